use game_core::{Command, CommandKind, Frame, UnitTag, UnitTypeId};
use maneuver::{Behavior, Outcome};

use crate::context::BotContext;

/// Train one worker while the worker count is below `to_count`.
pub struct BuildWorkers {
    to_count: u32,
}

impl BuildWorkers {
    pub fn new(to_count: u32) -> Self {
        Self { to_count }
    }
}

impl Behavior<BotContext> for BuildWorkers {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let frame = ctx.frame();
        let worker = UnitTypeId::worker_for(frame.race);
        if frame.economy.supply_workers >= self.to_count || !frame.can_afford(worker.cost()) {
            return Outcome::Declined;
        }
        let Some(producer) = idle_producer(&frame, worker) else {
            return Outcome::Declined;
        };
        ctx.issue(Command::new(producer, CommandKind::Train(worker)));
        Outcome::Acted
    }
}

/// First idle, complete producer of `unit`.
pub(crate) fn idle_producer(frame: &Frame, unit: UnitTypeId) -> Option<UnitTag> {
    frame
        .idle_producers(unit.trained_from())
        .map(|producer| producer.tag)
        .next()
}
