//! Effective bot configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use game_content::ConfigLoader;
use runtime::RuntimeConfig;
use serde_json::json;

use super::{OutputFormat, bundled_data};

/// Show the bot configuration after `BOT_*` environment overrides
#[derive(Parser)]
pub struct CheckConfig {
    /// Config file (defaults to the bundled bot.toml)
    file: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl CheckConfig {
    pub fn execute(self) -> Result<()> {
        let path = self.file.unwrap_or_else(|| bundled_data("bot.toml"));
        let file = ConfigLoader::load(&path)
            .with_context(|| format!("loading bot config {}", path.display()))?;
        let config = RuntimeConfig::from_env_with(file.clone());
        let bot = &config.bot;

        match self.format {
            OutputFormat::Summary => {
                println!(
                    "{} {}",
                    style("Bot config").bold().cyan(),
                    style(path.display()).dim()
                );
                let rows = [
                    ("game_step", bot.game_step.to_string(), file.game_step.to_string()),
                    ("safety_limit", bot.safety_limit.to_string(), file.safety_limit.to_string()),
                    (
                        "path_sensitivity",
                        bot.path_sensitivity.to_string(),
                        file.path_sensitivity.to_string(),
                    ),
                    (
                        "danger_distance",
                        bot.danger_distance.to_string(),
                        file.danger_distance.to_string(),
                    ),
                    (
                        "danger_threshold",
                        bot.danger_threshold.to_string(),
                        file.danger_threshold.to_string(),
                    ),
                    (
                        "opening",
                        bot.opening.clone().unwrap_or_else(|| "-".into()),
                        file.opening.clone().unwrap_or_else(|| "-".into()),
                    ),
                    (
                        "constant_worker_production_till",
                        bot.constant_worker_production_till.to_string(),
                        file.constant_worker_production_till.to_string(),
                    ),
                    (
                        "persistent_worker",
                        bot.persistent_worker.to_string(),
                        file.persistent_worker.to_string(),
                    ),
                ];
                for (key, effective, from_file) in rows {
                    if effective == from_file {
                        println!("  {key:<32} {effective}");
                    } else {
                        println!(
                            "  {key:<32} {} {}",
                            style(effective).yellow(),
                            style(format!("(file: {from_file})")).dim()
                        );
                    }
                }
                println!("  {:<32} {}", "isolate_failures", config.isolate_failures);
            }
            OutputFormat::Json => {
                let output = json!({
                    "file": path.display().to_string(),
                    "bot": bot,
                    "isolate_failures": config.isolate_failures,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        Ok(())
    }
}
