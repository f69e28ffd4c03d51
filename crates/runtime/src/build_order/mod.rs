//! Scripted build orders.
//!
//! Openings are authored as text steps (see [`game_content::parse_step`]),
//! expanded for the bot's race by [`BuildOrderParser`] and executed one step
//! at a time by [`BuildOrderRunner`].
mod parser;
mod runner;
mod step;

pub use parser::BuildOrderParser;
pub use runner::BuildOrderRunner;
pub use step::{BuildCommand, BuildOrderStep, Condition};
