//! Atomic behaviors that move a set of units as one.
//!
//! A group behavior issues a single shared command for every tag in the
//! group. Repeating the same order every frame makes units stutter in place,
//! so each behavior checks one representative member's current order and
//! skips commands that would not change anything.
mod ability;
mod movement;
mod safety;
mod stutter;

pub use ability::GroupUseAbility;
pub use movement::{AMoveGroup, PathGroupToTarget};
pub use safety::KeepGroupSafe;
pub use stutter::{StutterGroupBack, StutterGroupForward};

use game_core::{AbilityId, Frame, Point2, Target, Unit};

/// Squared distance under which a unit counts as already at its target.
pub const DUPLICATE_DISTANCE_SQUARED: f32 = 2.0;

/// Average weapon cooldown, in frames, above which a retreating group moves.
pub const BACK_COOLDOWN_THRESHOLD: f32 = 5.0;

/// Average weapon cooldown, in frames, above which an advancing group moves.
pub const FORWARD_COOLDOWN_THRESHOLD: f32 = 2.5;

/// Whether issuing `ability` on `target` to `unit` would repeat what it is
/// already doing.
///
/// True when the unit is within `distance_check_squared` of the target, or
/// when its current order uses the same ability on the same unit or on the
/// same point after rounding.
pub fn duplicate_or_similar_order(
    frame: &Frame,
    unit: &Unit,
    target: Target,
    ability: AbilityId,
    distance_check_squared: f32,
) -> bool {
    if let Some(position) = target_position(frame, target)
        && unit.position.distance_squared(position) < distance_check_squared
    {
        return true;
    }

    let Some(order) = unit.current_order() else {
        return false;
    };
    if order.ability != ability {
        return false;
    }
    match (order.target, target) {
        (Some(Target::Point(current)), wanted) => target_position(frame, wanted)
            .is_some_and(|wanted| current.rounded() == wanted.rounded()),
        (Some(Target::Unit(current)), Target::Unit(wanted)) => current == wanted,
        _ => false,
    }
}

/// Whether the group's average weapon cooldown exceeds `threshold` frames.
///
/// A group whose weapons are all ready is never on cooldown.
pub fn group_weapons_on_cooldown(units: &[&Unit], threshold: f32) -> bool {
    if units.is_empty() {
        return false;
    }
    let average = units.iter().map(|u| u.weapon_cooldown).sum::<f32>() / units.len() as f32;
    average > 0.0 && average > threshold
}

/// Map position of a target, `None` for a unit that is no longer visible.
pub fn target_position(frame: &Frame, target: Target) -> Option<Point2> {
    match target {
        Target::Point(point) => Some(point),
        Target::Unit(tag) => frame.find(tag).map(|unit| unit.position),
    }
}

/// Mean position of the group.
pub(crate) fn group_center(units: &[&Unit]) -> Option<Point2> {
    Point2::centroid(units.iter().map(|u| u.position))
}
