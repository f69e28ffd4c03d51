//! Development tasks for the agent workspace
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{CheckBuilds, CheckConfig, Cooldowns};
use tracing_subscriber::EnvFilter;

/// Development tasks for the agent workspace
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for the agent", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Parse an opening book and show each opening's expanded steps
    CheckBuilds(CheckBuilds),

    /// Show the effective bot configuration after environment overrides
    CheckConfig(CheckConfig),

    /// List tracked ability cooldowns
    Cooldowns(Cooldowns),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for BOT_* overrides)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::CheckBuilds(cmd) => cmd.execute(),
        Command::CheckConfig(cmd) => cmd.execute(),
        Command::Cooldowns(cmd) => cmd.execute(),
    }
}
