//! Provider health probe.

use crate::cli::Output;
use crate::config::ConfigLoader;
use crate::provider::create_provider;
use crate::types::Result;

pub async fn run() -> Result<()> {
    let config = ConfigLoader::load()?;
    let provider = create_provider(&config.provider)?;
    let output = Output::new();

    output.info(&format!(
        "Checking provider '{}' (model: {})...",
        provider.name(),
        provider.model()
    ));

    if provider.health_check().await? {
        output.success("Provider is reachable");
    } else {
        output.error("Provider is not reachable");
    }

    Ok(())
}
