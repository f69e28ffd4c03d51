//! Opening book inspection.
//!
//! Parses every opening in a RON book the way the bot would and prints the
//! race-specific steps each one expands to. Parse errors are reported per
//! opening so one broken entry does not hide the rest.

use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use console::style;
use game_content::{BuildOrderLoader, OpeningSpec};
use game_core::Race;
use runtime::{BuildOrderParser, BuildOrderStep};
use serde_json::json;

use super::{OutputFormat, bundled_data};

/// Parse an opening book and show the expanded steps
#[derive(Parser)]
pub struct CheckBuilds {
    /// Opening book file (defaults to the bundled openings.ron)
    file: Option<PathBuf>,

    /// Only check this opening
    #[arg(long)]
    opening: Option<String>,

    /// Race used to expand shorthand commands (terran, protoss, zerg)
    #[arg(long, default_value = "terran")]
    race: String,

    /// Output format
    #[arg(long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

impl CheckBuilds {
    pub fn execute(self) -> Result<()> {
        let path = self.file.unwrap_or_else(|| bundled_data("openings.ron"));
        let race: Race = self
            .race
            .parse()
            .map_err(|_| anyhow!("unknown race `{}`", self.race))?;
        let book = BuildOrderLoader::load(&path)
            .with_context(|| format!("loading opening book {}", path.display()))?;

        let selected: Vec<(&str, &OpeningSpec)> = match &self.opening {
            Some(name) => {
                let opening = book
                    .opening(name)
                    .ok_or_else(|| anyhow!("opening `{name}` not found in {}", path.display()))?;
                vec![(name.as_str(), opening)]
            }
            None => book.openings.iter().map(|(n, o)| (n.as_str(), o)).collect(),
        };

        let parser = BuildOrderParser::new(race);
        let mut failed = 0;
        let mut reports = Vec::with_capacity(selected.len());
        for (name, opening) in selected {
            let report = OpeningReport::check(name, opening, &parser);
            if report.steps.is_err() {
                failed += 1;
            }
            reports.push(report);
        }

        match self.format {
            OutputFormat::Summary => {
                println!(
                    "{} {} ({})",
                    style("Opening book").bold().cyan(),
                    style(path.display()).dim(),
                    race
                );
                for report in &reports {
                    report.print_summary();
                }
            }
            OutputFormat::Json => {
                let openings: Vec<_> = reports.iter().map(OpeningReport::to_json).collect();
                let output = json!({
                    "file": path.display().to_string(),
                    "race": race.to_string(),
                    "openings": openings,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
        }

        if failed > 0 {
            bail!("{failed} opening(s) failed to parse");
        }
        Ok(())
    }
}

struct OpeningReport<'a> {
    name: &'a str,
    opening: &'a OpeningSpec,
    steps: std::result::Result<Vec<BuildOrderStep>, String>,
}

impl<'a> OpeningReport<'a> {
    fn check(name: &'a str, opening: &'a OpeningSpec, parser: &BuildOrderParser) -> Self {
        let steps = parser.parse_opening(opening).map_err(|e| e.to_string());
        Self {
            name,
            opening,
            steps,
        }
    }

    fn print_summary(&self) {
        println!();
        match &self.steps {
            Ok(steps) => {
                println!(
                    "{} {} ({} steps, workers till {}, persistent builder: {})",
                    style("✓").green(),
                    style(self.name).bold(),
                    steps.len(),
                    self.opening.constant_worker_production_till,
                    self.opening.persistent_worker
                );
                for (index, step) in steps.iter().enumerate() {
                    println!(
                        "  {:>3}  {:>3}  {:?}",
                        style(index).dim(),
                        step.start_at_supply,
                        step.command
                    );
                }
            }
            Err(error) => {
                println!("{} {}", style("✗").red(), style(self.name).bold());
                println!("  {}", style(error).red());
            }
        }
    }

    fn to_json(&self) -> serde_json::Value {
        match &self.steps {
            Ok(steps) => json!({
                "name": self.name,
                "constant_worker_production_till": self.opening.constant_worker_production_till,
                "persistent_worker": self.opening.persistent_worker,
                "steps": steps
                    .iter()
                    .map(|step| json!({
                        "supply": step.start_at_supply,
                        "command": format!("{:?}", step.command),
                    }))
                    .collect::<Vec<_>>(),
            }),
            Err(error) => json!({
                "name": self.name,
                "error": error,
            }),
        }
    }
}
