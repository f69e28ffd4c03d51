//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod check_builds;
mod check_config;
mod cooldowns;

pub use check_builds::CheckBuilds;
pub use check_config::CheckConfig;
pub use cooldowns::Cooldowns;

use std::path::PathBuf;

/// Output format shared by the inspection commands
#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// Full JSON output
    Json,
}

/// Bundled content file under `crates/game/content/data`
pub fn bundled_data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../game/content/data")
        .join(name)
}
