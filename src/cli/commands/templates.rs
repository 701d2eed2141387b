//! List registered campaign templates.

use console::style;

use crate::cli::Output;
use crate::template::TemplateRegistry;
use crate::types::Result;

pub fn run(verbose: bool) -> Result<()> {
    let registry = TemplateRegistry::builtin()?;
    let output = Output::new();

    output.header("Campaign Types");
    for template in registry.iter() {
        if verbose {
            println!();
            println!(
                "{} {}",
                style(template.name()).bold(),
                style(format!("(slots: {})", template.slots().join(", "))).dim()
            );
            println!("  {}", template.text());
        } else {
            println!("  {}", template.name());
        }
    }

    Ok(())
}
