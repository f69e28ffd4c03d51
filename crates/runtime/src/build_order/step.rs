use std::fmt;
use std::sync::Arc;

use game_core::{BuildTarget, Frame, UnitTypeId, UpgradeId};

/// Predicate over the current frame.
pub type Condition = Arc<dyn Fn(&Frame) -> bool + Send + Sync>;

/// What a build step does once its start condition holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildCommand {
    /// Start a structure, optionally at a named location.
    Structure {
        structure: UnitTypeId,
        target: Option<BuildTarget>,
    },
    /// Attach an add-on to the first idle finished base structure.
    AddOn(UnitTypeId),
    Train(UnitTypeId),
    Research(UpgradeId),
    /// Boost the first finished structure of this type.
    Chrono(UnitTypeId),
    Orbital,
    WorkerScout,
    OverlordScout,
}

/// One scripted step: a command guarded by start and end conditions.
///
/// The runner issues the command once the start condition holds and supply
/// has reached `start_at_supply`, then waits for the end condition before
/// moving on.
#[derive(Clone)]
pub struct BuildOrderStep {
    pub command: BuildCommand,
    pub start_at_supply: u32,
    start: Condition,
    end: Condition,
}

impl BuildOrderStep {
    pub fn new<S, E>(command: BuildCommand, start: S, end: E) -> Self
    where
        S: Fn(&Frame) -> bool + Send + Sync + 'static,
        E: Fn(&Frame) -> bool + Send + Sync + 'static,
    {
        Self {
            command,
            start_at_supply: 0,
            start: Arc::new(start),
            end: Arc::new(end),
        }
    }

    pub fn start_at_supply(mut self, supply: u32) -> Self {
        self.start_at_supply = supply;
        self
    }

    /// Start condition and supply gate.
    pub fn can_start(&self, frame: &Frame) -> bool {
        frame.economy.supply_used >= self.start_at_supply && (self.start)(frame)
    }

    pub fn is_finished(&self, frame: &Frame) -> bool {
        (self.end)(frame)
    }
}

impl fmt::Debug for BuildOrderStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BuildOrderStep")
            .field("command", &self.command)
            .field("start_at_supply", &self.start_at_supply)
            .finish_non_exhaustive()
    }
}
