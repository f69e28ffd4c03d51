//! Ready-made maneuvers for common compound tactics.
use game_core::{Frame, GridKind, Point2, UnitTag};
use maneuver::Maneuver;

use crate::combat::individual::{
    KeepUnitSafe, MoveToSafeTarget, PathUnitToTarget, PickUpAndDropCargo, ShootTargetInRange,
    StutterUnitBack,
};
use crate::combat::targeting::closest_to;
use crate::context::BotContext;

/// Get out of danger, then settle on the safest spot around `target`.
pub fn move_to_safe_target(unit: UnitTag, grid: GridKind, target: Point2) -> Maneuver<BotContext> {
    Maneuver::new()
        .with(KeepUnitSafe::new(unit, grid))
        .with(MoveToSafeTarget::new(unit, grid, target))
}

/// Fire at anything in range, otherwise keep walking to `target`.
pub fn shoot_and_move_to_target(
    unit: UnitTag,
    enemies: Vec<UnitTag>,
    target: Point2,
    grid: GridKind,
) -> Maneuver<BotContext> {
    Maneuver::new()
        .with(ShootTargetInRange::new(unit, enemies))
        .with(PathUnitToTarget::new(unit, grid, target))
}

/// Kite the closest of `enemies` when there are any, otherwise walk to
/// `target`.
pub fn stutter_close_enemies_and_move_to_target(
    frame: &Frame,
    unit: UnitTag,
    enemies: &[UnitTag],
    target: Point2,
    grid: GridKind,
) -> Maneuver<BotContext> {
    let mut maneuver = Maneuver::new();
    maneuver.add(ShootTargetInRange::new(unit, enemies.to_vec()));
    if let Some(own) = frame.unit(unit) {
        let visible = enemies.iter().filter_map(|tag| frame.find(*tag));
        if let Some(closest) = closest_to(own.position, visible) {
            maneuver.add(StutterUnitBack::new(unit, closest.tag, grid));
        }
    }
    maneuver.add(PathUnitToTarget::new(unit, grid, target));
    maneuver
}

/// Ferry `cargo` to `target` with `transport`, keeping it safe otherwise.
pub fn pickup_and_transport_cargo(
    transport: UnitTag,
    cargo: Vec<UnitTag>,
    target: Point2,
    grid: GridKind,
) -> Maneuver<BotContext> {
    Maneuver::new()
        .with(PickUpAndDropCargo::new(transport, grid, cargo, target).keep_safe(false))
        .with(KeepUnitSafe::new(transport, grid))
}
