use game_core::{BuildTarget, Point2, UnitTypeId};
use maneuver::{Behavior, Outcome};
use tracing::debug;

use crate::context::BotContext;

/// Place `structure` near `base_location` with the closest available worker.
///
/// Declines when no placement or no worker is found, or the worker service
/// refuses the order.
pub struct BuildStructure {
    base_location: Point2,
    structure: UnitTypeId,
    target: Option<BuildTarget>,
}

impl BuildStructure {
    pub fn new(base_location: Point2, structure: UnitTypeId) -> Self {
        Self {
            base_location,
            structure,
            target: None,
        }
    }

    /// Named location the placement should honor.
    pub fn target(mut self, target: BuildTarget) -> Self {
        self.target = Some(target);
        self
    }
}

impl Behavior<BotContext> for BuildStructure {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let Some(placement) =
            ctx.spatial()
                .find_placement(self.structure, self.target, self.base_location)
        else {
            return Outcome::Declined;
        };
        let Some(worker) = ctx.workers().select_worker(placement, true) else {
            return Outcome::Declined;
        };
        if !ctx.workers().build_with_worker(worker, self.structure, placement) {
            return Outcome::Declined;
        }
        debug!(structure = %self.structure, %worker, ?placement, "structure placed");
        Outcome::Acted
    }
}
