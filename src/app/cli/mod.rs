//! CLI Adapter.

mod handle;
mod resolve;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::domain::{AppError, ResolverConfig};

#[derive(Parser)]
#[command(name = "appreg-resolver")]
#[command(version)]
#[command(
    about = "Resolve a stack's AppRegistry application name for CloudFormation custom resources",
    long_about = None
)]
struct Cli {
    /// TOML configuration file (environment variables take precedence)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Handle a custom-resource event and print the response envelope
    #[clap(visible_alias = "h")]
    Handle {
        /// Event JSON file, or '-' for stdin
        #[arg(short, long, default_value = "-")]
        event: String,
    },
    /// Resolve the application name for a stack
    #[clap(visible_alias = "r")]
    Resolve {
        /// Stack name or ARN
        #[arg(short, long)]
        stack_id: String,
        /// Name returned when the application cannot be resolved
        #[arg(short, long)]
        default_name: String,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Handle { event } => handle::run_handle(cli.config.as_deref(), &event),
        Commands::Resolve { stack_id, default_name } => {
            resolve::run_resolve(cli.config.as_deref(), &stack_id, &default_name)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_and_init(config_path: Option<&Path>) -> Result<ResolverConfig, AppError> {
    let config = crate::app::config::load_config(config_path)?;
    crate::app::logging::init(&config.logging)?;
    Ok(config)
}
