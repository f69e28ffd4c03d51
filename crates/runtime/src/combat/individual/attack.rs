//! Direct attack behaviors.
use game_core::{Command, CommandKind, GridKind, Point2, Target, UnitTag};
use maneuver::{Behavior, Outcome};

use crate::combat::individual::PathUnitToTarget;
use crate::combat::targeting::{attack_ready, in_attack_range, lowest_health};
use crate::context::BotContext;

/// Attack-move toward a point or unit. Always acts.
pub struct AMove {
    unit: UnitTag,
    target: Target,
}

impl AMove {
    pub fn new(unit: UnitTag, target: impl Into<Target>) -> Self {
        Self {
            unit,
            target: target.into(),
        }
    }
}

impl Behavior<BotContext> for AMove {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        ctx.issue(Command::new(self.unit, CommandKind::Attack(self.target)));
        Outcome::Acted
    }
}

/// Direct attack order on a specific unit. Always acts.
pub struct AttackTarget {
    unit: UnitTag,
    target: UnitTag,
}

impl AttackTarget {
    pub fn new(unit: UnitTag, target: UnitTag) -> Self {
        Self { unit, target }
    }
}

impl Behavior<BotContext> for AttackTarget {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        ctx.issue(Command::new(
            self.unit,
            CommandKind::Attack(Target::Unit(self.target)),
        ));
        Outcome::Acted
    }
}

/// Fire on the weakest candidate already in weapon range.
///
/// Declines when there are no candidates, none is targetable and in range, or
/// the weapon will not be ready in time. Cloaked candidates that are not
/// revealed are ignored. A unit already attacking an in-range candidate with
/// its weapon ready counts as acting without a new order.
pub struct ShootTargetInRange {
    unit: UnitTag,
    targets: Vec<UnitTag>,
    extra_range: f32,
}

impl ShootTargetInRange {
    pub fn new(unit: UnitTag, targets: Vec<UnitTag>) -> Self {
        Self {
            unit,
            targets,
            extra_range: 0.0,
        }
    }

    pub fn extra_range(mut self, extra_range: f32) -> Self {
        self.extra_range = extra_range;
        self
    }
}

impl Behavior<BotContext> for ShootTargetInRange {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        if self.targets.is_empty() {
            return Outcome::Declined;
        }
        let frame = ctx.frame();
        let Some(unit) = frame.unit(self.unit) else {
            return Outcome::Declined;
        };

        let candidates = self
            .targets
            .iter()
            .filter_map(|tag| frame.find(*tag))
            .filter(|target| !target.is_untargetable());
        let in_range = in_attack_range(unit, candidates, self.extra_range);
        if in_range.is_empty() {
            return Outcome::Declined;
        }

        if unit.weapon_cooldown <= 0.0
            && let Some(Target::Unit(current)) = unit.order_target()
            && in_range.iter().any(|target| target.tag == current)
        {
            return Outcome::Acted;
        }

        let Some(target) = lowest_health(in_range) else {
            return Outcome::Declined;
        };
        if !attack_ready(unit, target, frame.game_step) {
            return Outcome::Declined;
        }

        ctx.issue(Command::new(
            self.unit,
            CommandKind::Attack(Target::Unit(target.tag)),
        ));
        Outcome::Acted
    }
}

/// Shoot anything in range, otherwise path toward a destination.
///
/// Enemy units take priority over destructible obstacles in the way.
pub struct ShootAndMoveToTarget {
    unit: UnitTag,
    target: Point2,
    grid: GridKind,
    enemies: Vec<UnitTag>,
    destructables: Vec<UnitTag>,
    dist_to_target: f32,
}

impl ShootAndMoveToTarget {
    pub const DEFAULT_DIST_TO_TARGET: f32 = 4.0;

    pub fn new(unit: UnitTag, target: Point2, grid: GridKind, enemies: Vec<UnitTag>) -> Self {
        Self {
            unit,
            target,
            grid,
            enemies,
            destructables: Vec::new(),
            dist_to_target: Self::DEFAULT_DIST_TO_TARGET,
        }
    }

    pub fn destructables(mut self, destructables: Vec<UnitTag>) -> Self {
        self.destructables = destructables;
        self
    }

    pub fn dist_to_target(mut self, distance: f32) -> Self {
        self.dist_to_target = distance;
        self
    }
}

impl Behavior<BotContext> for ShootAndMoveToTarget {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        if ShootTargetInRange::new(self.unit, self.enemies.clone())
            .execute(ctx)
            .is_acted()
        {
            return Outcome::Acted;
        }
        if ShootTargetInRange::new(self.unit, self.destructables.clone())
            .execute(ctx)
            .is_acted()
        {
            return Outcome::Acted;
        }
        PathUnitToTarget::new(self.unit, self.grid, self.target)
            .success_at_distance(self.dist_to_target)
            .execute(ctx)
    }
}
