use game_core::{AbilityId, Command, CommandKind, Frame, GridKind, Point2, Target, Unit, UnitTag};
use maneuver::{Behavior, Outcome};
use tracing::trace;

use crate::combat::group::{
    BACK_COOLDOWN_THRESHOLD, DUPLICATE_DISTANCE_SQUARED, FORWARD_COOLDOWN_THRESHOLD,
    duplicate_or_similar_order, group_center, group_weapons_on_cooldown, target_position,
};
use crate::combat::individual::KeepUnitSafe;
use crate::combat::targeting::{closest_to, furthest_from, in_attack_range};
use crate::context::BotContext;

/// Probe directions for a group retreat. Diagonals are not normalized.
const RETREAT_DIRECTIONS: [(f32, f32); 8] = [
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (1.0, 1.0),
    (-1.0, -1.0),
    (1.0, -1.0),
    (-1.0, 1.0),
];

/// Kite a whole group away from `target` in unison.
///
/// While the group's weapons cool down it retreats toward a safe spot with
/// one shared move order; once they are ready it attacks with one shared
/// attack order. The member farthest from the target stands in for the group
/// when checking for repeated orders.
pub struct StutterGroupBack {
    group: Vec<UnitTag>,
    target: Target,
    grid: GridKind,
}

impl StutterGroupBack {
    pub fn new(group: Vec<UnitTag>, target: impl Into<Target>, grid: GridKind) -> Self {
        Self {
            group,
            target: target.into(),
            grid,
        }
    }

    fn retreat(&self, ctx: &mut BotContext, units: &[&Unit], sample: &Unit, target: Point2) {
        let frame = ctx.frame();
        let Some(center) = group_center(units) else {
            return;
        };
        let safe_from = if units.len() > 1 {
            retreat_position(&frame, ctx, center, target, units.len())
        } else {
            center
        };
        let Some(safe_spot) =
            ctx.spatial()
                .closest_safe_spot(safe_from, self.grid, KeepUnitSafe::SEARCH_RADIUS)
        else {
            return;
        };
        if !ctx.spatial().is_pathable(safe_spot) {
            return;
        }

        let mut request = ctx.path_request(center, safe_spot, self.grid);
        request.sensitivity = units.len().min(8) as u32;
        request.danger = None;
        let move_to = ctx.spatial().next_path_step(&request);
        if duplicate_or_similar_order(
            &frame,
            sample,
            Target::Point(move_to),
            AbilityId::Move,
            DUPLICATE_DISTANCE_SQUARED,
        ) {
            return;
        }
        trace!(size = units.len(), ?move_to, "group retreat");
        ctx.issue(Command::group(
            units.iter().map(|u| u.tag),
            CommandKind::Move(Target::Point(move_to)),
        ));
    }
}

impl Behavior<BotContext> for StutterGroupBack {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let frame = ctx.frame();
        let units: Vec<_> = frame.units_by_tag(&self.group).collect();
        let Some(target) = target_position(&frame, self.target) else {
            return Outcome::Declined;
        };
        let Some(sample) = furthest_from(target, units.iter().copied()) else {
            return Outcome::Declined;
        };

        if group_weapons_on_cooldown(&units, BACK_COOLDOWN_THRESHOLD) {
            let group_safe = units
                .iter()
                .all(|u| ctx.is_position_safe(self.grid, u.position));
            if !group_safe {
                self.retreat(ctx, &units, sample, target);
            }
            return Outcome::Acted;
        }

        if !duplicate_or_similar_order(
            &frame,
            sample,
            self.target,
            AbilityId::Attack,
            DUPLICATE_DISTANCE_SQUARED,
        ) {
            ctx.issue(Command::group(
                units.iter().map(|u| u.tag),
                CommandKind::Attack(Target::Point(target)),
            ));
        }
        Outcome::Acted
    }
}

/// Pathable probe point farthest from `target`, `center` if none is pathable.
fn retreat_position(
    frame: &Frame,
    ctx: &BotContext,
    center: Point2,
    target: Point2,
    group_size: usize,
) -> Point2 {
    let distance = group_size as f32 * 1.5;
    let mut best = center;
    let mut best_distance = 0.0;
    for (dx, dy) in RETREAT_DIRECTIONS {
        let probe = frame
            .map_size
            .clamp(center.offset(dx * distance, dy * distance));
        if !ctx.spatial().is_pathable(probe) {
            continue;
        }
        let from_target = probe.distance_squared(target);
        if from_target > best_distance {
            best_distance = from_target;
            best = probe;
        }
    }
    best
}

/// Advance a group on `enemies` in unison.
///
/// A group already in range everywhere attacks the enemy center. Otherwise it
/// walks toward the enemy center while its weapons cool down and attack-moves
/// there once they are ready. The member closest to `target` stands in for
/// the group when checking for repeated orders.
pub struct StutterGroupForward {
    group: Vec<UnitTag>,
    target: Target,
    enemies: Vec<UnitTag>,
}

impl StutterGroupForward {
    pub fn new(group: Vec<UnitTag>, target: impl Into<Target>, enemies: Vec<UnitTag>) -> Self {
        Self {
            group,
            target: target.into(),
            enemies,
        }
    }
}

impl Behavior<BotContext> for StutterGroupForward {
    fn execute(&self, ctx: &mut BotContext) -> Outcome {
        let frame = ctx.frame();
        let units: Vec<_> = frame.units_by_tag(&self.group).collect();
        let enemies: Vec<_> = self
            .enemies
            .iter()
            .filter_map(|tag| frame.find(*tag))
            .collect();
        if units.is_empty() || enemies.is_empty() {
            return Outcome::Declined;
        }
        let Some(target) = target_position(&frame, self.target) else {
            return Outcome::Declined;
        };
        let Some(sample) = closest_to(target, units.iter().copied()) else {
            return Outcome::Declined;
        };
        let Some(enemy_center) = group_center(&enemies) else {
            return Outcome::Declined;
        };
        let tags = || units.iter().map(|u| u.tag);

        let all_in_range = units
            .iter()
            .all(|u| !in_attack_range(u, enemies.iter().copied(), 0.0).is_empty());
        if all_in_range {
            if !duplicate_or_similar_order(
                &frame,
                sample,
                self.target,
                AbilityId::Attack,
                DUPLICATE_DISTANCE_SQUARED,
            ) {
                ctx.issue(Command::group(
                    tags(),
                    CommandKind::Attack(Target::Point(enemy_center)),
                ));
            }
            return Outcome::Acted;
        }

        let (ability, kind) = if group_weapons_on_cooldown(&units, FORWARD_COOLDOWN_THRESHOLD) {
            (
                AbilityId::Move,
                CommandKind::Move(Target::Point(enemy_center)),
            )
        } else {
            (
                AbilityId::Attack,
                CommandKind::Attack(Target::Point(enemy_center)),
            )
        };
        if !duplicate_or_similar_order(
            &frame,
            sample,
            Target::Point(enemy_center),
            ability,
            DUPLICATE_DISTANCE_SQUARED,
        ) {
            ctx.issue(Command::group(tags(), kind));
        }
        Outcome::Acted
    }
}
