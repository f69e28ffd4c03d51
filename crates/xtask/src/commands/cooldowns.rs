//! Tracked ability cooldowns.

use anyhow::Result;
use clap::Parser;
use console::style;
use game_core::{AbilityId, FRAMES_PER_SECOND};
use serde_json::json;
use strum::IntoEnumIterator;

use super::OutputFormat;

/// List abilities whose cooldowns the agent tracks itself
#[derive(Parser)]
pub struct Cooldowns {
    /// Output format
    #[arg(long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl Cooldowns {
    pub fn execute(self) -> Result<()> {
        let tracked: Vec<(AbilityId, u32)> = AbilityId::iter()
            .filter_map(|ability| Some((ability, ability.base_cooldown_frames()?)))
            .collect();

        match self.format {
            OutputFormat::Summary => {
                println!("{}", style("Tracked ability cooldowns").bold().cyan());
                for (ability, frames) in &tracked {
                    println!(
                        "  {:<32} {:>5} frames {}",
                        ability.to_string(),
                        frames,
                        style(format!("({:.1}s)", *frames as f32 / FRAMES_PER_SECOND)).dim()
                    );
                }
            }
            OutputFormat::Json => {
                let output: Vec<_> = tracked
                    .iter()
                    .map(|(ability, frames)| {
                        json!({ "ability": ability.to_string(), "frames": frames })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }
        Ok(())
    }
}
