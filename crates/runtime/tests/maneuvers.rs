mod common;

use common::{StubSpatial, StubWorkers, World, shooter, unit};
use game_core::{CommandKind, Frame, GridKind, Point2, Target, Unit, UnitTag, UnitTypeId};
use maneuver::{Behavior, BehaviorExecutioner, Outcome};
use runtime::BotContext;
use runtime::combat::recipes::{
    move_to_safe_target, pickup_and_transport_cargo, shoot_and_move_to_target,
    stutter_close_enemies_and_move_to_target,
};
use runtime::combat::{AMove, KeepUnitSafe};

fn frame(units: Vec<Unit>, enemies: Vec<Unit>) -> Frame {
    Frame::builder()
        .game_step(2)
        .map_size(64, 64)
        .units(units)
        .enemies(enemies)
        .build()
}

#[test]
fn shooting_outranks_moving() {
    let world = World::new();
    let destination = Point2::new(40.0, 10.0);
    let mut ctx = world.context(frame(
        vec![shooter(1, 10.0, 10.0, 5.0)],
        vec![unit(10, UnitTypeId::Zergling, 13.0, 10.0)],
    ));

    let outcome = shoot_and_move_to_target(UnitTag(1), vec![UnitTag(10)], destination, GridKind::Ground)
        .execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    assert_eq!(ctx.issued().len(), 1, "first acting child ends the chain");
    assert_eq!(
        ctx.issued()[0].kind,
        CommandKind::Attack(Target::Unit(UnitTag(10)))
    );
    assert!(world.spatial.path_requests().is_empty());
}

#[test]
fn moving_resumes_without_targets() {
    let world = World::new();
    let destination = Point2::new(40.0, 10.0);
    let mut ctx = world.context(frame(
        vec![shooter(1, 10.0, 10.0, 5.0)],
        vec![unit(10, UnitTypeId::Zergling, 30.0, 30.0)],
    ));

    let outcome = shoot_and_move_to_target(UnitTag(1), vec![UnitTag(10)], destination, GridKind::Ground)
        .execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    assert_eq!(
        ctx.issued()[0].kind,
        CommandKind::Move(Target::Point(destination))
    );
}

#[test]
fn stutter_recipe_backs_off_while_reloading() {
    let threat = Point2::new(12.5, 10.5);
    let world = World::with(
        StubSpatial::new().with_danger(threat, 3.0, 50.0),
        StubWorkers::new(None),
    );
    let reloading = Unit {
        weapon_cooldown: 20.0,
        ..shooter(1, 10.5, 10.5, 5.0)
    };
    let frame = frame(vec![reloading], vec![unit(10, UnitTypeId::Zergling, 12.5, 10.5)]);
    let destination = Point2::new(40.0, 10.0);
    let recipe = stutter_close_enemies_and_move_to_target(
        &frame,
        UnitTag(1),
        &[UnitTag(10)],
        destination,
        GridKind::Ground,
    );
    assert_eq!(recipe.len(), 3);
    let mut ctx = world.context(frame);

    assert_eq!(recipe.execute(&mut ctx), Outcome::Acted);
    let CommandKind::Move(Target::Point(step)) = ctx.issued()[0].kind else {
        panic!("expected a retreat, got {:?}", ctx.issued());
    };
    assert_ne!(step, destination, "kiting wins over walking on");
}

#[test]
fn stutter_recipe_without_visible_enemies_only_walks() {
    let frame = frame(vec![shooter(1, 10.0, 10.0, 5.0)], Vec::new());
    let recipe = stutter_close_enemies_and_move_to_target(
        &frame,
        UnitTag(1),
        &[UnitTag(10)],
        Point2::new(40.0, 10.0),
        GridKind::Ground,
    );
    assert_eq!(recipe.len(), 2);
}

#[test]
fn safe_target_recipe_settles_near_target() {
    let world = World::new();
    let target = Point2::new(30.5, 30.5);
    let mut ctx = world.context(frame(vec![shooter(1, 10.0, 10.0, 5.0)], Vec::new()));

    let outcome = move_to_safe_target(UnitTag(1), GridKind::Ground, target).execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    let CommandKind::Move(Target::Point(step)) = ctx.issued()[0].kind else {
        panic!("expected a move, got {:?}", ctx.issued());
    };
    assert!(step.distance_to(target) <= 1.0);
}

#[test]
fn transport_recipe_falls_back_to_safety() {
    let threat = Point2::new(10.5, 10.5);
    let world = World::with(
        StubSpatial::new().with_danger(threat, 3.0, 50.0),
        StubWorkers::new(None),
    );
    let medivac = Unit {
        is_flying: true,
        cargo_max: 8,
        ..unit(1, UnitTypeId::Medivac, 10.5, 10.5)
    };
    let mut ctx = world.context(frame(vec![medivac], Vec::new()));

    let outcome =
        pickup_and_transport_cargo(UnitTag(1), Vec::new(), Point2::new(50.0, 50.0), GridKind::Ground)
            .execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    assert!(matches!(ctx.issued()[0].kind, CommandKind::Move(_)));
}

#[test]
fn executioner_runs_every_registered_item_once() {
    let world = World::new();
    let mut ctx = world.context(frame(
        vec![shooter(1, 10.0, 10.0, 5.0), shooter(2, 12.0, 10.0, 5.0)],
        Vec::new(),
    ));
    let mut executioner = BehaviorExecutioner::<BotContext>::new();
    executioner.register(AMove::new(UnitTag(1), Point2::new(30.0, 30.0)));
    executioner.register(KeepUnitSafe::new(UnitTag(2), GridKind::Ground));
    executioner.register(AMove::new(UnitTag(2), Point2::new(31.0, 30.0)));

    let report = executioner.execute(&mut ctx);

    assert_eq!(report.executed, 3);
    assert_eq!(report.acted, 2);
    assert!(executioner.is_empty());
    let units: Vec<_> = ctx.issued().iter().map(|c| c.units[0]).collect();
    assert_eq!(units, vec![UnitTag(1), UnitTag(2)]);
}
