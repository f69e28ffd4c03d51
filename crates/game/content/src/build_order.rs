//! Textual build step grammar.
//!
//! A step reads `<supply> <command> [@ <target>] [x<N>|*<N>]`:
//!
//! ```text
//! 13 supply @ ramp
//! 16 gas
//! 17 marine x3
//! 20 chrono @ nexus
//! ```
//!
//! The command is either a [`BuildOption`] shorthand, a unit or structure
//! type, or an upgrade. Names are case-insensitive. Parsing yields
//! [`BuildStepSpec`]s; turning them into executable steps is the runtime's job.

use game_core::{BuildTarget, UnitTypeId, UpgradeId};
use thiserror::Error;
use tracing::warn;

/// Shorthand commands that expand to race-specific actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum BuildOption {
    Chrono,
    Core,
    Expand,
    Gas,
    Gate,
    Orbital,
    OverlordScout,
    Supply,
    Worker,
    WorkerScout,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepCommand {
    Option(BuildOption),
    Unit(UnitTypeId),
    Upgrade(UpgradeId),
}

/// What follows `@`: a placement specifier or, for chrono, a structure type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepTarget {
    Location(BuildTarget),
    Structure(UnitTypeId),
}

/// One parsed step, before race-specific expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuildStepSpec {
    /// Supply at which the step may start.
    pub supply: u32,
    pub command: StepCommand,
    pub target: Option<StepTarget>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildParseError {
    #[error("build step `{0}` needs a supply count and a command")]
    TooFewWords(String),

    #[error("unknown build command `{command}` in step `{step}`")]
    UnknownCommand { step: String, command: String },

    #[error("unknown build target `{target}` in step `{step}`")]
    UnknownTarget { step: String, target: String },

    #[error("`@` without a target in step `{0}`")]
    MissingTarget(String),

    #[error("unexpected token `{token}` in step `{step}`")]
    UnexpectedToken { step: String, token: String },

    #[error("chrono step `{0}` must name the structure to boost")]
    MissingChronoTarget(String),
}

/// Parses one step; a repeat suffix yields that many identical specs.
pub fn parse_step(line: &str) -> Result<Vec<BuildStepSpec>, BuildParseError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() < 2 {
        return Err(BuildParseError::TooFewWords(line.to_string()));
    }

    let supply = match words[0].parse::<u32>() {
        Ok(supply) => supply,
        Err(_) => {
            warn!(step = line, "build step supply is not an integer; starting at 0");
            0
        }
    };
    let command = parse_command(line, words[1])?;

    let mut target = None;
    let mut repeat = 1;
    let mut rest = words[2..].iter();
    while let Some(word) = rest.next() {
        if *word == "@" {
            let name = rest
                .next()
                .ok_or_else(|| BuildParseError::MissingTarget(line.to_string()))?;
            target = Some(parse_target(line, name)?);
        } else if let Some(count) = repeat_count(word) {
            repeat = count;
        } else {
            return Err(BuildParseError::UnexpectedToken {
                step: line.to_string(),
                token: word.to_string(),
            });
        }
    }

    if command == StepCommand::Option(BuildOption::Chrono)
        && !matches!(target, Some(StepTarget::Structure(_)))
    {
        return Err(BuildParseError::MissingChronoTarget(line.to_string()));
    }

    let spec = BuildStepSpec {
        supply,
        command,
        target,
    };
    Ok(vec![spec; repeat])
}

/// Parses a whole opening, preserving step order.
pub fn parse_steps<S: AsRef<str>>(lines: &[S]) -> Result<Vec<BuildStepSpec>, BuildParseError> {
    let mut specs = Vec::with_capacity(lines.len());
    for line in lines {
        specs.extend(parse_step(line.as_ref())?);
    }
    Ok(specs)
}

fn parse_command(step: &str, word: &str) -> Result<StepCommand, BuildParseError> {
    if let Ok(option) = word.parse::<BuildOption>() {
        return Ok(StepCommand::Option(option));
    }
    if let Ok(unit) = word.parse::<UnitTypeId>() {
        return Ok(StepCommand::Unit(unit));
    }
    if let Ok(upgrade) = word.parse::<UpgradeId>() {
        return Ok(StepCommand::Upgrade(upgrade));
    }
    Err(BuildParseError::UnknownCommand {
        step: step.to_string(),
        command: word.to_string(),
    })
}

fn parse_target(step: &str, word: &str) -> Result<StepTarget, BuildParseError> {
    if let Ok(location) = word.parse::<BuildTarget>() {
        return Ok(StepTarget::Location(location));
    }
    match word.parse::<UnitTypeId>() {
        Ok(structure) if structure.is_structure() => Ok(StepTarget::Structure(structure)),
        _ => Err(BuildParseError::UnknownTarget {
            step: step.to_string(),
            target: word.to_string(),
        }),
    }
}

fn repeat_count(word: &str) -> Option<usize> {
    let digits = word
        .strip_prefix(['x', 'X', '*'])
        .filter(|rest| !rest.is_empty())?;
    digits.parse::<usize>().ok().filter(|n| *n > 0)
}
