//! Kiting: shoot when the weapon is ready, move between shots.
use game_core::{Command, CommandKind, GridKind, Target, UnitTag};
use maneuver::{Behavior, Outcome};
use tracing::warn;

use crate::combat::individual::KeepUnitSafe;
use crate::combat::targeting::{attack_ready, closest_to};
use crate::context::BotContext;

/// Attack `target` if the weapon will be ready, otherwise back off to safety.
pub struct StutterUnitBack {
    unit: UnitTag,
    target: UnitTag,
    grid: GridKind,
    use_pathing: bool,
}

impl StutterUnitBack {
    pub fn new(unit: UnitTag, target: UnitTag, grid: GridKind) -> Self {
        Self {
            unit,
            target,
            grid,
            use_pathing: true,
        }
    }

    pub fn use_pathing(mut self, use_pathing: bool) -> Self {
        self.use_pathing = use_pathing;
        self
    }
}

impl Behavior<BotContext> for StutterUnitBack {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let frame = ctx.frame();
        let (Some(unit), Some(target)) = (frame.unit(self.unit), frame.find(self.target)) else {
            return Outcome::Declined;
        };

        if !target.is_memory && attack_ready(unit, target, frame.game_step) {
            ctx.issue(Command::new(
                self.unit,
                CommandKind::Attack(Target::Unit(self.target)),
            ));
            return Outcome::Acted;
        }
        if self.use_pathing {
            return KeepUnitSafe::new(self.unit, self.grid).execute(ctx);
        }
        warn!(unit = %self.unit, "kiting back without pathing is not supported");
        Outcome::Declined
    }
}

/// Attack `target` if the weapon will be ready, otherwise close the distance.
pub struct StutterUnitForward {
    unit: UnitTag,
    target: UnitTag,
}

impl StutterUnitForward {
    pub fn new(unit: UnitTag, target: UnitTag) -> Self {
        Self { unit, target }
    }
}

impl Behavior<BotContext> for StutterUnitForward {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let frame = ctx.frame();
        let (Some(unit), Some(target)) = (frame.unit(self.unit), frame.find(self.target)) else {
            return Outcome::Declined;
        };

        let kind = if !target.is_memory && attack_ready(unit, target, frame.game_step) {
            CommandKind::Attack(Target::Unit(self.target))
        } else {
            CommandKind::Move(Target::Point(target.position))
        };
        ctx.issue(Command::new(self.unit, kind));
        Outcome::Acted
    }
}

/// Worker variant of kiting: retreat by gathering from the home mineral line.
///
/// Gathering lets a worker walk through other units, which plain movement
/// does not.
pub struct WorkerKiteBack {
    unit: UnitTag,
    target: UnitTag,
}

impl WorkerKiteBack {
    pub fn new(unit: UnitTag, target: UnitTag) -> Self {
        Self { unit, target }
    }
}

impl Behavior<BotContext> for WorkerKiteBack {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let frame = ctx.frame();
        let (Some(unit), Some(target)) = (frame.unit(self.unit), frame.find(self.target)) else {
            return Outcome::Declined;
        };

        if !target.is_memory && attack_ready(unit, target, frame.game_step) {
            ctx.issue(Command::new(
                self.unit,
                CommandKind::Attack(Target::Unit(self.target)),
            ));
            return Outcome::Acted;
        }
        let Some(mineral) = closest_to(frame.start_location, frame.mineral_fields()) else {
            return Outcome::Declined;
        };
        ctx.issue(Command::new(self.unit, CommandKind::Gather(mineral.tag)));
        Outcome::Acted
    }
}
