//! Range, readiness and target selection helpers shared by combat behaviors.
use std::f32::consts::PI;

use game_core::{FRAMES_PER_SECOND, Point2, Unit};

/// Whether `unit` will have its weapon ready by the time it can fire on `target`.
///
/// The time until the unit could actually shoot is this step's duration plus
/// the time to turn toward the target plus the time to walk into range. The
/// unit counts as ready once that time covers the remaining weapon cooldown.
/// A unit whose current order is a weapon-locking ability cast is never ready.
pub fn attack_ready(unit: &Unit, target: &Unit, game_step: u32) -> bool {
    if unit
        .current_order()
        .is_some_and(|order| order.ability.locks_weapon())
    {
        return false;
    }

    let cooldown_seconds = unit.weapon_cooldown.max(0.0) / FRAMES_PER_SECOND;
    if cooldown_seconds <= 0.0 {
        return true;
    }

    let step_seconds = game_step as f32 / FRAMES_PER_SECOND;
    let turn_seconds = heading_change(unit.facing, unit.position, target.position).to_degrees()
        / unit.type_id.turn_rate();

    let range = unit.range_against(target).unwrap_or(0.0);
    let gap = (unit.distance_to(target.position) - unit.radius - target.radius - range).max(0.0);
    let move_seconds = if unit.movement_speed > 0.0 {
        gap / unit.movement_speed
    } else {
        0.0
    };

    step_seconds + turn_seconds + move_seconds >= cooldown_seconds
}

/// Absolute turn, in radians, needed to face `to` from `from` with heading `facing`.
fn heading_change(facing: f32, from: Point2, to: Point2) -> f32 {
    let mut diff = (from.angle_to(to) - facing).rem_euclid(2.0 * PI);
    if diff > PI {
        diff = 2.0 * PI - diff;
    }
    diff
}

/// Targets `unit` can hit now, edge to edge, allowing `extra_range`.
pub fn in_attack_range<'a, I>(unit: &Unit, targets: I, extra_range: f32) -> Vec<&'a Unit>
where
    I: IntoIterator<Item = &'a Unit>,
{
    targets
        .into_iter()
        .filter(|target| unit.in_attack_range_of(target, extra_range))
        .collect()
}

/// Lowest health plus shield; ties go to the lowest tag for determinism.
///
/// This is a cheap stand-in for damage-optimal target selection.
pub fn lowest_health<'a, I>(targets: I) -> Option<&'a Unit>
where
    I: IntoIterator<Item = &'a Unit>,
{
    targets.into_iter().min_by(|a, b| {
        a.total_health()
            .total_cmp(&b.total_health())
            .then(a.tag.cmp(&b.tag))
    })
}

pub fn closest_to<'a, I>(point: Point2, units: I) -> Option<&'a Unit>
where
    I: IntoIterator<Item = &'a Unit>,
{
    units.into_iter().min_by(|a, b| {
        a.position
            .distance_squared(point)
            .total_cmp(&b.position.distance_squared(point))
            .then(a.tag.cmp(&b.tag))
    })
}

pub fn furthest_from<'a, I>(point: Point2, units: I) -> Option<&'a Unit>
where
    I: IntoIterator<Item = &'a Unit>,
{
    units.into_iter().max_by(|a, b| {
        a.position
            .distance_squared(point)
            .total_cmp(&b.position.distance_squared(point))
            .then(b.tag.cmp(&a.tag))
    })
}
