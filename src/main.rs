use clap::{Args, Parser, Subcommand};
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use copysmith::cli::commands;
use copysmith::cli::commands::generate::GenerateOptions;

#[derive(Parser)]
#[command(name = "copysmith")]
#[command(
    version,
    about = "Template-driven marketing copy generator with iterative refinement"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Args)]
struct RequestArgs {
    #[arg(long, short = 'c', help = "Campaign type (see 'copysmith templates')")]
    campaign_type: String,

    #[arg(long, default_value = "", help = "Tone of voice (casual, professional, urgent, ...)")]
    tone: String,

    #[arg(long, default_value = "", help = "Target platform (LinkedIn, Twitter, Facebook, ...)")]
    platform: String,

    #[arg(long, short = 't', help = "Campaign topic or details")]
    topic: String,

    #[arg(long, default_value = "", help = "Target audience")]
    audience: String,

    #[arg(long, short = 'l', help = "Output language (default from config)")]
    language: Option<String>,

    #[arg(long, help = "Extra instructions appended to the default system prompt")]
    system_prompt: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one piece of content and print it
    Generate {
        #[command(flatten)]
        request: RequestArgs,

        #[arg(long, help = "Revision feedback included in the prompt")]
        feedback: Option<String>,

        #[arg(long, help = "Print JSON ({\"generated_content\": ...}) instead of plain text")]
        json: bool,
    },

    /// Start an interactive refinement session
    Session {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// List campaign types and their templates
    Templates {
        #[arg(long, short, help = "Show full template text and slots")]
        verbose: bool,
    },

    /// Check that the completion provider is reachable
    Health,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

impl RequestArgs {
    fn into_options(self, feedback: Option<String>, json: bool) -> GenerateOptions {
        GenerateOptions {
            campaign_type: self.campaign_type,
            tone: self.tone,
            platform: self.platform,
            topic: self.topic,
            audience: self.audience,
            language: self.language,
            system_prompt: self.system_prompt,
            feedback,
            json,
        }
    }
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Generate {
            request,
            feedback,
            json,
        } => {
            let rt = Runtime::new()?;
            rt.block_on(commands::generate::run(request.into_options(feedback, json)))?;
        }
        Commands::Session { request } => {
            let rt = Runtime::new()?;
            rt.block_on(commands::session::run(request.into_options(None, false)))?;
        }
        Commands::Templates { verbose } => {
            commands::templates::run(verbose)?;
        }
        Commands::Health => {
            let rt = Runtime::new()?;
            rt.block_on(commands::health::run())?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => {
                commands::config::show(json)?;
            }
            ConfigAction::Path => {
                commands::config::path()?;
            }
            ConfigAction::Init { global, force } => {
                commands::config::init(global, force)?;
            }
        },
    }

    Ok(())
}
