use game_core::{AbilityId, Command, CommandKind, Point2, Target, UnitTag};
use maneuver::{Behavior, Outcome};
use tracing::trace;

use crate::context::BotContext;

/// Spread creep with an active tumor.
///
/// Placement candidates, in order: the creep edge near the tumor, the creep
/// cell least covered by existing tumors, any random creep cell.
pub struct TumorSpreadCreep {
    unit: UnitTag,
    search_radius: f32,
    spread_distance: f32,
}

impl TumorSpreadCreep {
    pub const ABILITY: AbilityId = AbilityId::BuildCreepTumorTumor;

    pub fn new(unit: UnitTag) -> Self {
        Self {
            unit,
            search_radius: 9.5,
            spread_distance: 2.0,
        }
    }

    pub fn search_radius(mut self, radius: f32) -> Self {
        self.search_radius = radius;
        self
    }

    fn placement(&self, ctx: &BotContext, position: Point2) -> Option<Point2> {
        let creep = ctx.creep();
        creep
            .nearby_creep_edge(position, self.search_radius, self.spread_distance)
            .or_else(|| creep.lowest_tumor_influence(position))
            .or_else(|| creep.random_creep_position(position))
    }
}

impl Behavior<BotContext> for TumorSpreadCreep {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let frame = ctx.frame();
        let Some(tumor) = frame.unit(self.unit) else {
            return Outcome::Declined;
        };
        if !tumor.has_ability(Self::ABILITY) {
            return Outcome::Declined;
        }
        let Some(position) = self.placement(ctx, tumor.position) else {
            return Outcome::Declined;
        };

        trace!(unit = %self.unit, ?position, "spreading creep");
        ctx.issue(Command::new(
            self.unit,
            CommandKind::UseAbility {
                ability: Self::ABILITY,
                target: Some(Target::Point(position)),
            },
        ));
        Outcome::Acted
    }
}
