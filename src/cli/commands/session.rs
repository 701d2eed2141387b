//! Interactive refinement session.
//!
//! Generates once from the supplied flags, then reads commands from
//! stdin: `improve <feedback>`, `translate <language>`, `show`,
//! `history`, `diff`, `feedback`, `help`, `quit`. Each command maps to
//! one session transition or derived view; provider failures are
//! reported and leave the loop running.

use std::io::{self, BufRead, Write};

use console::style;
use tracing::debug;

use super::generate::GenerateOptions;
use crate::cli::Output;
use crate::config::ConfigLoader;
use crate::pipeline::ContentPipeline;
use crate::provider::create_provider;
use crate::session::RefinementSession;
use crate::types::Result;

pub async fn run(options: GenerateOptions) -> Result<()> {
    let config = ConfigLoader::load()?;
    let provider = create_provider(&config.provider)?;
    let pipeline = ContentPipeline::new(provider)?;
    let mut session = RefinementSession::new(pipeline);
    let output = Output::new();

    let request = options.into_request(&config.session.default_language);

    output.info("Generating initial content...");
    match session.generate(request).await {
        Ok(artifact) => {
            output.section("Generated Content");
            output.artifact(&artifact);
        }
        Err(e) => {
            output.error(&e.to_string());
            return Err(e);
        }
    }

    print_help();

    let stdin = io::stdin();
    loop {
        print!("{} ", style(">").cyan().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };
        debug!(command, "session command");

        match command {
            "improve" | "i" => {
                if rest.is_empty() {
                    output.error("Usage: improve <feedback>");
                    continue;
                }
                match session.improve(rest).await {
                    Ok(Some(artifact)) => {
                        output.section("Revised Content");
                        output.artifact(&artifact);
                        if let Some(diff) = session.diffs().first() {
                            output.section("Latest Improvement");
                            output.diff(diff);
                        }
                    }
                    Ok(None) => output.info("Nothing to improve yet."),
                    Err(e) => output.error(&e.to_string()),
                }
            }
            "translate" | "t" => {
                if rest.is_empty() {
                    output.error("Usage: translate <language>");
                    continue;
                }
                match session.translate(rest).await {
                    Ok(Some(artifact)) => {
                        output.section(&format!("Content ({})", rest));
                        output.artifact(&artifact);
                    }
                    Ok(None) => output.info("Nothing to translate yet."),
                    Err(e) => output.error(&e.to_string()),
                }
            }
            "show" | "s" => match session.latest() {
                Some(artifact) => {
                    output.section("Current Content");
                    output.artifact(artifact);
                }
                None => output.info("No content generated yet."),
            },
            "history" | "h" => {
                if session.history().is_empty() {
                    output.info("History is empty.");
                    continue;
                }
                output.section("History (most recent first)");
                for (index, artifact) in session.history().iter().enumerate() {
                    println!("{}", style(format!("#{}", index + 1)).bold());
                    output.artifact(artifact);
                    println!();
                }
            }
            "diff" | "d" => match session.diffs().first() {
                Some(diff) => {
                    output.section("Latest Improvement");
                    output.diff(diff);
                }
                None => output.info("No improvements recorded yet."),
            },
            "feedback" | "f" => {
                if session.feedback_history().is_empty() {
                    output.info("No feedback recorded.");
                    continue;
                }
                output.section("Feedback History (most recent first)");
                for (index, feedback) in session.feedback_history().iter().enumerate() {
                    println!("{} {}", style(format!("#{}:", index + 1)).bold(), feedback);
                }
            }
            "help" | "?" => print_help(),
            "quit" | "q" | "exit" => break,
            other => {
                output.error(&format!("Unknown command: {}. Type 'help' for commands.", other));
            }
        }
    }

    Ok(())
}

fn print_help() {
    println!();
    println!("{}", style("Commands").bold());
    println!("  improve <feedback>    regenerate with accumulated feedback");
    println!("  translate <language>  regenerate the current content in a language");
    println!("  show                  print the current content");
    println!("  history               print the rolling history (up to 5)");
    println!("  diff                  print the latest improvement diff");
    println!("  feedback              print accumulated feedback");
    println!("  help                  show this help");
    println!("  quit                  end the session");
}
