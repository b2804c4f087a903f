//! Command-line entry point for computing vision regions.
//!
//! Run with: `vision <command>`

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Area, Presets};
use config::CliConfig;

/// Compute visible regions for tokens in a scene
#[derive(Parser)]
#[command(name = "vision")]
#[command(about = "Vision region tools", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Compute a preset's region against a scene
    Area(Area),

    /// List the presets of a catalog
    Presets(Presets),
}

fn main() -> Result<()> {
    // Load .env file if it exists (VISION_* settings)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    let cli = Cli::parse();

    match cli.command {
        Command::Area(cmd) => cmd.execute(&config),
        Command::Presets(cmd) => cmd.execute(&config),
    }
}
