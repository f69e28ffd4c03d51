//! Transport loading and unloading.
use game_core::{Command, CommandKind, GridKind, Point2, UnitTag};
use maneuver::{Behavior, Outcome};

use crate::combat::individual::{KeepUnitSafe, PathUnitToTarget};
use crate::combat::targeting::closest_to;
use crate::context::BotContext;

/// Load the closest of `targets` into the transport, moving to it first.
///
/// Declines for non-transports, a full transport or an empty target set.
pub struct PickUpCargo {
    unit: UnitTag,
    grid: GridKind,
    targets: Vec<UnitTag>,
}

impl PickUpCargo {
    pub fn new(unit: UnitTag, grid: GridKind, targets: Vec<UnitTag>) -> Self {
        Self {
            unit,
            grid,
            targets,
        }
    }
}

impl Behavior<BotContext> for PickUpCargo {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        if self.targets.is_empty() {
            return Outcome::Declined;
        }
        let frame = ctx.frame();
        let Some(transport) = frame.unit(self.unit) else {
            return Outcome::Declined;
        };
        let Some(pickup_range) = transport.type_id.pickup_range() else {
            return Outcome::Declined;
        };
        if transport.cargo_used >= transport.cargo_max {
            return Outcome::Declined;
        }
        let Some(target) = closest_to(transport.position, frame.units_by_tag(&self.targets)) else {
            return Outcome::Declined;
        };

        let reach = pickup_range + transport.radius + target.radius;
        if transport.distance_to(target.position) <= reach {
            ctx.issue(Command::new(self.unit, CommandKind::Load(target.tag)));
            return Outcome::Acted;
        }
        PathUnitToTarget::new(self.unit, self.grid, target.position).execute(ctx)
    }
}

/// Unload everything at the transport's position.
///
/// Declines when empty or hovering over unpathable ground.
pub struct DropCargo {
    unit: UnitTag,
}

impl DropCargo {
    pub fn new(unit: UnitTag) -> Self {
        Self { unit }
    }
}

impl Behavior<BotContext> for DropCargo {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let frame = ctx.frame();
        let Some(transport) = frame.unit(self.unit) else {
            return Outcome::Declined;
        };
        if !transport.has_cargo() || !ctx.spatial().is_pathable(transport.position) {
            return Outcome::Declined;
        }
        ctx.issue(Command::new(self.unit, CommandKind::UnloadAll));
        Outcome::Acted
    }
}

/// Pick up, carry to `target`, drop, and stay safe while doing nothing else.
///
/// Each stage stops at the first one that acts. The keep-safe fallback also
/// applies to an empty transport that has nothing left to collect.
pub struct PickUpAndDropCargo {
    unit: UnitTag,
    grid: GridKind,
    pickup_targets: Vec<UnitTag>,
    target: Point2,
    success_at_distance: f32,
    keep_safe: bool,
}

impl PickUpAndDropCargo {
    pub fn new(unit: UnitTag, grid: GridKind, pickup_targets: Vec<UnitTag>, target: Point2) -> Self {
        Self {
            unit,
            grid,
            pickup_targets,
            target,
            success_at_distance: 2.0,
            keep_safe: true,
        }
    }

    pub fn success_at_distance(mut self, distance: f32) -> Self {
        self.success_at_distance = distance;
        self
    }

    pub fn keep_safe(mut self, keep_safe: bool) -> Self {
        self.keep_safe = keep_safe;
        self
    }
}

impl Behavior<BotContext> for PickUpAndDropCargo {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let frame = ctx.frame();
        let Some(transport) = frame.unit(self.unit) else {
            return Outcome::Declined;
        };

        if PickUpCargo::new(self.unit, self.grid, self.pickup_targets.clone())
            .execute(ctx)
            .is_acted()
        {
            return Outcome::Acted;
        }

        if transport.has_cargo() {
            let delivered = PathUnitToTarget::new(self.unit, self.grid, self.target)
                .success_at_distance(self.success_at_distance)
                .execute(ctx)
                .or_else(|| DropCargo::new(self.unit).execute(ctx));
            if delivered.is_acted() {
                return Outcome::Acted;
            }
        }

        if self.keep_safe {
            return KeepUnitSafe::new(self.unit, self.grid).execute(ctx);
        }
        Outcome::Declined
    }
}
