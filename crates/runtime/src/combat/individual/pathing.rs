//! Grid-aware movement for a single unit.
use game_core::{Command, CommandKind, GridKind, Point2, Target, UnitTag};
use maneuver::{Behavior, Outcome};
use tracing::trace;

use crate::context::BotContext;

/// Move one waypoint along the cheapest path on `grid` toward `target`.
///
/// Declines once the unit is within `success_at_distance` of the target.
pub struct PathUnitToTarget {
    unit: UnitTag,
    grid: GridKind,
    target: Point2,
    success_at_distance: f32,
    sensitivity: Option<u32>,
    smoothing: bool,
    sense_danger: bool,
}

impl PathUnitToTarget {
    pub fn new(unit: UnitTag, grid: GridKind, target: Point2) -> Self {
        Self {
            unit,
            grid,
            target,
            success_at_distance: 0.0,
            sensitivity: None,
            smoothing: false,
            sense_danger: true,
        }
    }

    pub fn success_at_distance(mut self, distance: f32) -> Self {
        self.success_at_distance = distance;
        self
    }

    /// Overrides the configured path sensitivity.
    pub fn sensitivity(mut self, sensitivity: u32) -> Self {
        self.sensitivity = Some(sensitivity);
        self
    }

    pub fn smoothing(mut self, smoothing: bool) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn sense_danger(mut self, sense_danger: bool) -> Self {
        self.sense_danger = sense_danger;
        self
    }
}

impl Behavior<BotContext> for PathUnitToTarget {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let frame = ctx.frame();
        let Some(unit) = frame.unit(self.unit) else {
            return Outcome::Declined;
        };
        if unit.distance_to(self.target) < self.success_at_distance {
            return Outcome::Declined;
        }

        let mut request = ctx.path_request(unit.position, self.target, self.grid);
        if let Some(sensitivity) = self.sensitivity {
            request.sensitivity = sensitivity;
        }
        request.smoothing = self.smoothing;
        if !self.sense_danger {
            request.danger = None;
        }

        let step = ctx.spatial().next_path_step(&request);
        trace!(unit = %self.unit, ?step, "path step");
        ctx.issue(Command::new(
            self.unit,
            CommandKind::Move(Target::Point(step)),
        ));
        Outcome::Acted
    }
}

/// Move toward the nearest safe cell when the unit stands in danger.
///
/// Declines when the current cell is already safe or no safe cell exists
/// within the search radius.
pub struct KeepUnitSafe {
    unit: UnitTag,
    grid: GridKind,
}

impl KeepUnitSafe {
    pub const SEARCH_RADIUS: f32 = 7.0;

    pub fn new(unit: UnitTag, grid: GridKind) -> Self {
        Self { unit, grid }
    }
}

impl Behavior<BotContext> for KeepUnitSafe {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let frame = ctx.frame();
        let Some(unit) = frame.unit(self.unit) else {
            return Outcome::Declined;
        };
        if ctx.is_position_safe(self.grid, unit.position) {
            return Outcome::Declined;
        }
        let Some(safe) = ctx
            .spatial()
            .closest_safe_spot(unit.position, self.grid, Self::SEARCH_RADIUS)
        else {
            return Outcome::Declined;
        };
        PathUnitToTarget::new(self.unit, self.grid, safe).execute(ctx)
    }
}

/// Move to the safest cell around `target`.
///
/// Declines once the unit is within `success_at_distance` of `target` or no
/// safe cell exists within `radius` of it.
pub struct MoveToSafeTarget {
    unit: UnitTag,
    grid: GridKind,
    target: Point2,
    radius: f32,
    success_at_distance: f32,
    use_pathing: bool,
}

impl MoveToSafeTarget {
    pub fn new(unit: UnitTag, grid: GridKind, target: Point2) -> Self {
        Self {
            unit,
            grid,
            target,
            radius: 12.0,
            success_at_distance: 1.0,
            use_pathing: true,
        }
    }

    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn success_at_distance(mut self, distance: f32) -> Self {
        self.success_at_distance = distance;
        self
    }

    pub fn use_pathing(mut self, use_pathing: bool) -> Self {
        self.use_pathing = use_pathing;
        self
    }
}

impl Behavior<BotContext> for MoveToSafeTarget {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let frame = ctx.frame();
        let Some(unit) = frame.unit(self.unit) else {
            return Outcome::Declined;
        };
        if unit.distance_to(self.target) < self.success_at_distance {
            return Outcome::Declined;
        }
        let Some(safe) = ctx
            .spatial()
            .closest_safe_spot(self.target, self.grid, self.radius)
        else {
            return Outcome::Declined;
        };

        if self.use_pathing {
            return PathUnitToTarget::new(self.unit, self.grid, safe)
                .success_at_distance(self.success_at_distance)
                .execute(ctx);
        }
        ctx.issue(Command::new(
            self.unit,
            CommandKind::Move(Target::Point(safe)),
        ));
        Outcome::Acted
    }
}
