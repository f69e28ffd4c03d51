//! Macro behaviors, composed into [`maneuver::MacroPlan`]s.
mod structures;
mod supply;
mod workers;

pub use structures::BuildStructure;
pub use supply::{AutoSupply, supply_required};
pub use workers::BuildWorkers;
