mod commands;
mod output;

use clap::{Parser, Subcommand};
use miette::Result;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cordial")]
#[command(about = "Discord REST endpoints as agent tools")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every tool in the catalog
    List,
    /// Print one tool's parameter schema
    Schema {
        /// Tool name (e.g. ban_user_from_guild)
        tool: String,
    },
    /// Dump the full tool catalog as a JSON array
    Catalog,
    /// Invoke one tool and print the result
    Invoke {
        /// Tool name (e.g. create_message)
        tool: String,

        /// Arguments as a JSON object
        #[arg(long, conflicts_with = "arg")]
        args: Option<String>,

        /// Arguments as key=value pairs (values parsed as JSON when possible)
        #[arg(long = "arg", short = 'a')]
        arg: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();
    miette::set_panic_hook();

    let cli = Cli::parse();

    let filter = if cli.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = cordial_core::CordialConfig::load_or_default(cli.config.as_deref())?;
    tracing::debug!(api_base = %config.api_base, "configuration loaded");

    match cli.command {
        Commands::List => commands::list(&config),
        Commands::Schema { tool } => commands::schema(&config, &tool),
        Commands::Catalog => commands::catalog(&config),
        Commands::Invoke { tool, args, arg } => {
            commands::invoke(&config, &tool, args.as_deref(), &arg).await
        }
    }
}
