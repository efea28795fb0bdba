//! Vitrine CLI - self-hosted personal portfolio site.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(about = "Self-hosted personal portfolio site")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to portfolio.toml config file
    #[arg(short, long, default_value = "portfolio.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold a portfolio.toml and assets directory
    Init {
        /// Overwrite existing files without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// Run the portfolio site server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },

    /// Validate the project catalog without serving
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Init { yes } => {
            commands::init::run(yes).await?;
        }
        Commands::Serve { port, no_open } => {
            commands::serve::run(&cli.config, port, !no_open).await?;
        }
        Commands::Check => {
            commands::check::run(&cli.config)?;
        }
    }

    Ok(())
}
