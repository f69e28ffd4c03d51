use game_core::{AbilityId, Command, CommandKind, GridKind, Point2, Target, UnitTag};
use maneuver::{Behavior, Outcome};

use crate::combat::group::{DUPLICATE_DISTANCE_SQUARED, duplicate_or_similar_order, target_position};
use crate::combat::targeting::{closest_to, furthest_from};
use crate::context::BotContext;
use crate::services::DangerSense;

/// One shared attack-move toward `target`.
///
/// Declines when the straggler farthest from the target already has a
/// matching order.
pub struct AMoveGroup {
    group: Vec<UnitTag>,
    target: Target,
}

impl AMoveGroup {
    pub fn new(group: Vec<UnitTag>, target: impl Into<Target>) -> Self {
        Self {
            group,
            target: target.into(),
        }
    }
}

impl Behavior<BotContext> for AMoveGroup {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let frame = ctx.frame();
        let units: Vec<_> = frame.units_by_tag(&self.group).collect();
        let Some(position) = target_position(&frame, self.target) else {
            return Outcome::Declined;
        };
        let Some(sample) = furthest_from(position, units.iter().copied()) else {
            return Outcome::Declined;
        };
        if duplicate_or_similar_order(
            &frame,
            sample,
            self.target,
            AbilityId::Attack,
            DUPLICATE_DISTANCE_SQUARED,
        ) {
            return Outcome::Declined;
        }
        ctx.issue(Command::group(
            units.iter().map(|u| u.tag),
            CommandKind::Attack(self.target),
        ));
        Outcome::Acted
    }
}

/// One shared move order along the path from `start` to `target`.
///
/// The path is queried once for the whole group. With `prevent_duplicate`
/// the order is skipped while the member closest to `start` is already
/// heading to the same waypoint.
pub struct PathGroupToTarget {
    start: Point2,
    group: Vec<UnitTag>,
    grid: GridKind,
    target: Point2,
    distance_check_squared: f32,
    success_at_distance: f32,
    sensitivity: u32,
    smoothing: bool,
    sense_danger: bool,
    prevent_duplicate: bool,
}

impl PathGroupToTarget {
    pub const DEFAULT_DISTANCE_CHECK_SQUARED: f32 = 26.25;
    pub const DEFAULT_SENSITIVITY: u32 = 12;

    pub fn new(start: Point2, group: Vec<UnitTag>, grid: GridKind, target: Point2) -> Self {
        Self {
            start,
            group,
            grid,
            target,
            distance_check_squared: Self::DEFAULT_DISTANCE_CHECK_SQUARED,
            success_at_distance: 0.0,
            sensitivity: Self::DEFAULT_SENSITIVITY,
            smoothing: false,
            sense_danger: false,
            prevent_duplicate: true,
        }
    }

    pub fn distance_check_squared(mut self, distance_squared: f32) -> Self {
        self.distance_check_squared = distance_squared;
        self
    }

    pub fn success_at_distance(mut self, distance: f32) -> Self {
        self.success_at_distance = distance;
        self
    }

    pub fn sensitivity(mut self, sensitivity: u32) -> Self {
        self.sensitivity = sensitivity;
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

    pub fn prevent_duplicate(mut self, prevent: bool) -> Self {
        self.prevent_duplicate = prevent;
        self
    }
}

impl Behavior<BotContext> for PathGroupToTarget {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let frame = ctx.frame();
        let units: Vec<_> = frame.units_by_tag(&self.group).collect();
        if units.is_empty() || self.start.distance_to(self.target) < self.success_at_distance {
            return Outcome::Declined;
        }

        let mut request = ctx.path_request(self.start, self.target, self.grid);
        request.sensitivity = self.sensitivity;
        request.smoothing = self.smoothing;
        request.danger = self.sense_danger.then(|| DangerSense {
            distance: ctx.config().danger_distance,
            threshold: ctx.config().danger_threshold,
        });
        let move_to = ctx.spatial().next_path_step(&request);

        if self.prevent_duplicate
            && let Some(sample) = closest_to(self.start, units.iter().copied())
            && duplicate_or_similar_order(
                &frame,
                sample,
                Target::Point(move_to),
                AbilityId::Move,
                self.distance_check_squared,
            )
        {
            return Outcome::Declined;
        }

        ctx.issue(Command::group(
            units.iter().map(|u| u.tag),
            CommandKind::Move(Target::Point(move_to)),
        ));
        Outcome::Acted
    }
}
