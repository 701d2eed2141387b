//! Console Output Helpers

use console::style;

use crate::types::Artifact;

pub struct Output;

impl Output {
    pub fn new() -> Self {
        Self
    }

    pub fn success(&self, message: &str) {
        println!("{} {}", style("✓").green(), message);
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", style("✗").red(), message);
    }

    pub fn info(&self, message: &str) {
        println!("{} {}", style("ℹ").blue(), message);
    }

    pub fn header(&self, message: &str) {
        println!("\n{}", style(message).bold().underlined());
    }

    pub fn section(&self, message: &str) {
        println!("\n{}", style(message).bold());
        println!("{}", "─".repeat(40));
    }

    /// Render one generated artifact with its language and timestamp.
    pub fn artifact(&self, artifact: &Artifact) {
        println!(
            "{}",
            style(format!(
                "[{} · {}]",
                artifact.language,
                artifact.created_at.format("%H:%M:%S")
            ))
            .dim()
        );
        println!("{}", artifact.content);
    }

    /// Render a unified diff with added/removed line coloring.
    pub fn diff(&self, diff: &str) {
        if diff.is_empty() {
            println!("{}", style("(no changes)").dim());
            return;
        }
        for line in diff.lines() {
            if line.starts_with('+') {
                println!("{}", style(line).green());
            } else if line.starts_with('-') {
                println!("{}", style(line).red());
            } else if line.starts_with("@@") {
                println!("{}", style(line).cyan());
            } else {
                println!("{}", line);
            }
        }
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::new()
    }
}
