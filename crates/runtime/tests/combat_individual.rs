mod common;

use common::{StubCreep, StubSpatial, StubWorkers, World, init_tracing, shooter, unit};
use game_core::{
    AbilityId, Command, CommandKind, CostGrid, Frame, GridKind, Point2, Target, Unit, UnitTag,
    UnitTypeId,
};
use maneuver::{Behavior, Outcome};
use runtime::SpatialQuery;
use runtime::combat::{
    AttackTarget, DropCargo, KeepUnitSafe, PickUpCargo, PlacePredictiveAoe, ShootAndMoveToTarget,
    ShootTargetInRange, StutterUnitBack, StutterUnitForward, TumorSpreadCreep, UseAbility,
    UseAoeAbility, WorkerKiteBack,
};

fn frame(units: Vec<Unit>, enemies: Vec<Unit>) -> Frame {
    Frame::builder()
        .game_step(2)
        .map_size(64, 64)
        .units(units)
        .enemies(enemies)
        .build()
}

#[test]
fn shoot_picks_weakest_target_in_range() {
    let near = Unit {
        health: 60.0,
        ..unit(10, UnitTypeId::Zergling, 13.0, 10.0)
    };
    let weaker_far = Unit {
        health: 5.0,
        ..unit(11, UnitTypeId::Zergling, 30.0, 10.0)
    };
    let weakest_near = Unit {
        health: 20.0,
        ..unit(12, UnitTypeId::Zergling, 10.0, 13.0)
    };
    let world = World::new();
    let mut ctx = world.context(frame(
        vec![shooter(1, 10.0, 10.0, 5.0)],
        vec![near, weaker_far, weakest_near],
    ));

    let outcome = ShootTargetInRange::new(UnitTag(1), vec![UnitTag(10), UnitTag(11), UnitTag(12)])
        .execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    assert_eq!(
        ctx.issued(),
        &[Command::new(
            UnitTag(1),
            CommandKind::Attack(Target::Unit(UnitTag(12)))
        )]
    );
}

#[test]
fn shoot_ignores_cloaked_targets() {
    let cloaked = Unit {
        is_cloaked: true,
        ..unit(10, UnitTypeId::Zergling, 12.0, 10.0)
    };
    let world = World::new();
    let mut ctx = world.context(frame(vec![shooter(1, 10.0, 10.0, 5.0)], vec![cloaked]));

    let outcome = ShootTargetInRange::new(UnitTag(1), vec![UnitTag(10)]).execute(&mut ctx);

    assert_eq!(outcome, Outcome::Declined);
    assert!(ctx.issued().is_empty());
}

#[test]
fn shoot_declines_while_weapon_recovers() {
    let reloading = Unit {
        weapon_cooldown: 20.0,
        ..shooter(1, 10.0, 10.0, 5.0)
    };
    let world = World::new();
    let mut ctx = world.context(frame(
        vec![reloading],
        vec![unit(10, UnitTypeId::Zergling, 12.0, 10.0)],
    ));

    let outcome = ShootTargetInRange::new(UnitTag(1), vec![UnitTag(10)]).execute(&mut ctx);

    assert!(outcome.is_declined());
}

#[test]
fn keep_safe_declines_on_safe_ground() {
    let world = World::new();
    let mut ctx = world.context(frame(vec![shooter(1, 10.5, 10.5, 5.0)], Vec::new()));

    let outcome = KeepUnitSafe::new(UnitTag(1), GridKind::Ground).execute(&mut ctx);

    assert!(outcome.is_declined());
    assert!(world.spatial.path_requests().is_empty());
}

#[test]
fn keep_safe_paths_out_of_danger() {
    init_tracing();
    let threat = Point2::new(10.5, 10.5);
    let world = World::with(
        StubSpatial::new().with_danger(threat, 3.0, 50.0),
        StubWorkers::new(None),
    );
    let mut ctx = world.context(frame(vec![shooter(1, 11.5, 10.5, 5.0)], Vec::new()));

    let outcome = KeepUnitSafe::new(UnitTag(1), GridKind::Ground).execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    let [command] = ctx.issued() else {
        panic!("expected one command, got {:?}", ctx.issued());
    };
    let CommandKind::Move(Target::Point(step)) = command.kind else {
        panic!("expected a move, got {:?}", command.kind);
    };
    let grid = world.spatial.grid(GridKind::Ground);
    assert_eq!(grid.value_at(step), Some(CostGrid::BASE_COST));

    let requests = world.spatial.path_requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].danger.is_some());
}

#[test]
fn stutter_back_without_pathing_declines() {
    let reloading = Unit {
        weapon_cooldown: 20.0,
        ..shooter(1, 10.0, 10.0, 5.0)
    };
    let world = World::new();
    let mut ctx = world.context(frame(
        vec![reloading],
        vec![unit(10, UnitTypeId::Zergling, 12.0, 10.0)],
    ));

    let outcome = StutterUnitBack::new(UnitTag(1), UnitTag(10), GridKind::Ground)
        .use_pathing(false)
        .execute(&mut ctx);

    assert!(outcome.is_declined());
    assert!(ctx.issued().is_empty());
}

#[test]
fn stutter_back_shoots_when_ready() {
    let world = World::new();
    let mut ctx = world.context(frame(
        vec![shooter(1, 10.0, 10.0, 5.0)],
        vec![unit(10, UnitTypeId::Zergling, 12.0, 10.0)],
    ));

    let outcome = StutterUnitBack::new(UnitTag(1), UnitTag(10), GridKind::Ground).execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    assert_eq!(
        ctx.issued()[0].kind,
        CommandKind::Attack(Target::Unit(UnitTag(10)))
    );
}

#[test]
fn ability_respects_tracked_cooldown() {
    let mut stalker = unit(1, UnitTypeId::Stalker, 10.0, 10.0);
    stalker.abilities.insert(AbilityId::EffectBlinkStalker);
    let blink = Point2::new(16.0, 10.0);
    let world = World::new();
    let mut ctx = world.context(frame(vec![stalker.clone()], Vec::new()));

    let cast = UseAbility::new(UnitTag(1), AbilityId::EffectBlinkStalker).target(blink);
    assert_eq!(cast.execute(&mut ctx), Outcome::Acted);
    assert_eq!(cast.execute(&mut ctx), Outcome::Declined);
    assert_eq!(ctx.issued().len(), 1);

    let ready_at = ctx
        .cooldowns()
        .ready_frame(UnitTag(1), AbilityId::EffectBlinkStalker)
        .expect("blink is tracked");
    ctx.begin_frame(
        Frame::builder()
            .game_loop(ready_at)
            .game_step(2)
            .unit(stalker)
            .build(),
    );
    assert_eq!(cast.execute(&mut ctx), Outcome::Acted);
}

#[test]
fn ability_requires_the_unit_to_have_it() {
    let world = World::new();
    let mut ctx = world.context(frame(vec![unit(1, UnitTypeId::Stalker, 10.0, 10.0)], Vec::new()));

    let outcome = UseAbility::new(UnitTag(1), AbilityId::EffectBlinkStalker)
        .target(Point2::new(16.0, 10.0))
        .execute(&mut ctx);

    assert!(outcome.is_declined());
}

#[test]
fn aoe_needs_enough_targets() {
    let mut templar = unit(1, UnitTypeId::HighTemplar, 10.0, 10.0);
    templar.abilities.insert(AbilityId::EffectPsiStorm);
    let enemies = vec![
        unit(10, UnitTypeId::Marine, 15.0, 10.0),
        unit(11, UnitTypeId::Marine, 15.5, 10.0),
        unit(12, UnitTypeId::Marine, 15.0, 10.5),
    ];
    let tags = vec![UnitTag(10), UnitTag(11), UnitTag(12)];
    let world = World::new();
    let mut ctx = world.context(frame(vec![templar], enemies));

    let too_many = UseAoeAbility::new(UnitTag(1), AbilityId::EffectPsiStorm, tags.clone())
        .min_targets(4)
        .execute(&mut ctx);
    assert!(too_many.is_declined());

    let outcome = UseAoeAbility::new(UnitTag(1), AbilityId::EffectPsiStorm, tags)
        .min_targets(3)
        .execute(&mut ctx);
    assert_eq!(outcome, Outcome::Acted);
    assert!(matches!(
        ctx.issued()[0].kind,
        CommandKind::UseAbility {
            ability: AbilityId::EffectPsiStorm,
            target: Some(Target::Point(_)),
        }
    ));
}

#[test]
fn aoe_avoids_own_units() {
    let mut templar = unit(1, UnitTypeId::HighTemplar, 10.0, 10.0);
    templar.abilities.insert(AbilityId::EffectPsiStorm);
    let mut spatial = StubSpatial::new();
    spatial.in_range = vec![UnitTag(2)];
    let world = World::with(spatial, StubWorkers::new(None));
    let mut ctx = world.context(frame(
        vec![templar, unit(2, UnitTypeId::Zealot, 15.0, 11.0)],
        vec![unit(10, UnitTypeId::Marine, 15.0, 10.0)],
    ));

    let outcome = UseAoeAbility::new(UnitTag(1), AbilityId::EffectPsiStorm, vec![UnitTag(10)])
        .avoid_own_ground(true)
        .execute(&mut ctx);

    assert!(outcome.is_declined());
}

fn medivac(cargo_used: u32) -> Unit {
    Unit {
        is_flying: true,
        cargo_used,
        cargo_max: 8,
        ..unit(1, UnitTypeId::Medivac, 10.0, 10.0)
    }
}

#[test]
fn pickup_loads_adjacent_passenger() {
    let world = World::new();
    let mut ctx = world.context(frame(
        vec![medivac(0), unit(2, UnitTypeId::Marine, 11.0, 10.0)],
        Vec::new(),
    ));

    let outcome = PickUpCargo::new(UnitTag(1), GridKind::Air, vec![UnitTag(2)]).execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    assert_eq!(
        ctx.issued(),
        &[Command::new(UnitTag(1), CommandKind::Load(UnitTag(2)))]
    );
}

#[test]
fn pickup_moves_toward_distant_passenger() {
    let world = World::new();
    let mut ctx = world.context(frame(
        vec![medivac(0), unit(2, UnitTypeId::Marine, 30.0, 30.0)],
        Vec::new(),
    ));

    let outcome = PickUpCargo::new(UnitTag(1), GridKind::Air, vec![UnitTag(2)]).execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    assert_eq!(
        ctx.issued()[0].kind,
        CommandKind::Move(Target::Point(Point2::new(30.0, 30.0)))
    );
    assert_eq!(world.spatial.path_requests()[0].grid, GridKind::Air);
}

#[test]
fn pickup_declines_when_full() {
    let world = World::new();
    let mut ctx = world.context(frame(
        vec![medivac(8), unit(2, UnitTypeId::Marine, 11.0, 10.0)],
        Vec::new(),
    ));

    let outcome = PickUpCargo::new(UnitTag(1), GridKind::Air, vec![UnitTag(2)]).execute(&mut ctx);

    assert!(outcome.is_declined());
}

#[test]
fn drop_unloads_on_pathable_ground() {
    let world = World::new();
    let mut ctx = world.context(frame(vec![medivac(2)], Vec::new()));

    assert_eq!(DropCargo::new(UnitTag(1)).execute(&mut ctx), Outcome::Acted);
    assert_eq!(ctx.issued()[0].kind, CommandKind::UnloadAll);

    let mut empty = world.context(frame(vec![medivac(0)], Vec::new()));
    assert!(DropCargo::new(UnitTag(1)).execute(&mut empty).is_declined());
}

fn remembered(tag: u64, x: f32, y: f32) -> Unit {
    Unit {
        is_memory: true,
        ..unit(tag, UnitTypeId::Zergling, x, y)
    }
}

fn scv(weapon_cooldown: f32) -> Unit {
    Unit {
        weapon_cooldown,
        ground_range: Some(0.1),
        ..unit(1, UnitTypeId::Scv, 10.0, 10.0)
    }
}

#[test]
fn attack_target_always_orders_the_attack() {
    let world = World::new();
    let mut ctx = world.context(frame(Vec::new(), Vec::new()));

    let outcome = AttackTarget::new(UnitTag(1), UnitTag(10)).execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    assert_eq!(
        ctx.issued()[0].kind,
        CommandKind::Attack(Target::Unit(UnitTag(10)))
    );
}

#[test]
fn stutter_forward_attacks_when_ready() {
    let world = World::new();
    let mut ctx = world.context(frame(
        vec![shooter(1, 10.0, 10.0, 5.0)],
        vec![unit(10, UnitTypeId::Zergling, 13.0, 10.0)],
    ));

    let outcome = StutterUnitForward::new(UnitTag(1), UnitTag(10)).execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    assert_eq!(
        ctx.issued()[0].kind,
        CommandKind::Attack(Target::Unit(UnitTag(10)))
    );
}

#[test]
fn stutter_forward_closes_in_while_reloading() {
    let reloading = Unit {
        weapon_cooldown: 20.0,
        ..shooter(1, 10.0, 10.0, 5.0)
    };
    let world = World::new();
    let mut ctx = world.context(frame(
        vec![reloading],
        vec![unit(10, UnitTypeId::Zergling, 13.0, 10.0)],
    ));

    let outcome = StutterUnitForward::new(UnitTag(1), UnitTag(10)).execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    assert_eq!(
        ctx.issued()[0].kind,
        CommandKind::Move(Target::Point(Point2::new(13.0, 10.0)))
    );
}

#[test]
fn stutter_forward_never_shoots_at_a_memory() {
    let world = World::new();
    let mut ctx = world.context(frame(
        vec![shooter(1, 10.0, 10.0, 5.0)],
        vec![remembered(10, 13.0, 10.0)],
    ));

    let outcome = StutterUnitForward::new(UnitTag(1), UnitTag(10)).execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    assert_eq!(
        ctx.issued()[0].kind,
        CommandKind::Move(Target::Point(Point2::new(13.0, 10.0)))
    );
}

#[test]
fn worker_kite_back_hits_when_ready() {
    let world = World::new();
    let mut ctx = world.context(
        Frame::builder()
            .game_step(2)
            .units([scv(0.0)])
            .enemy(unit(10, UnitTypeId::Zergling, 11.0, 10.0))
            .mineral_field(unit(50, UnitTypeId::MineralField, 4.0, 4.0))
            .build(),
    );

    let outcome = WorkerKiteBack::new(UnitTag(1), UnitTag(10)).execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    assert_eq!(
        ctx.issued()[0].kind,
        CommandKind::Attack(Target::Unit(UnitTag(10)))
    );
}

#[test]
fn worker_kite_back_mineral_walks_home() {
    let world = World::new();
    let mut ctx = world.context(
        Frame::builder()
            .game_step(2)
            .start_location(Point2::new(5.0, 5.0))
            .units([scv(20.0)])
            .enemy(unit(10, UnitTypeId::Zergling, 11.0, 10.0))
            .mineral_field(unit(50, UnitTypeId::MineralField, 4.0, 4.0))
            .mineral_field(unit(51, UnitTypeId::MineralField, 40.0, 40.0))
            .build(),
    );

    let outcome = WorkerKiteBack::new(UnitTag(1), UnitTag(10)).execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    assert_eq!(ctx.issued()[0].kind, CommandKind::Gather(UnitTag(50)));
}

#[test]
fn worker_kite_back_retreats_from_a_memory() {
    let world = World::new();
    let mut ctx = world.context(
        Frame::builder()
            .game_step(2)
            .units([scv(0.0)])
            .enemy(remembered(10, 11.0, 10.0))
            .mineral_field(unit(50, UnitTypeId::MineralField, 4.0, 4.0))
            .build(),
    );

    let outcome = WorkerKiteBack::new(UnitTag(1), UnitTag(10)).execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    assert_eq!(ctx.issued()[0].kind, CommandKind::Gather(UnitTag(50)));
}

#[test]
fn worker_kite_back_without_minerals_declines() {
    let world = World::new();
    let mut ctx = world.context(frame(
        vec![scv(20.0)],
        vec![unit(10, UnitTypeId::Zergling, 11.0, 10.0)],
    ));

    let outcome = WorkerKiteBack::new(UnitTag(1), UnitTag(10)).execute(&mut ctx);

    assert!(outcome.is_declined());
    assert!(ctx.issued().is_empty());
}

#[test]
fn shoot_and_move_prefers_shooting() {
    let world = World::new();
    let mut ctx = world.context(frame(
        vec![shooter(1, 10.0, 10.0, 5.0)],
        vec![unit(10, UnitTypeId::Zergling, 13.0, 10.0)],
    ));

    let outcome = ShootAndMoveToTarget::new(
        UnitTag(1),
        Point2::new(40.0, 10.0),
        GridKind::Ground,
        vec![UnitTag(10)],
    )
    .execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    assert_eq!(
        ctx.issued()[0].kind,
        CommandKind::Attack(Target::Unit(UnitTag(10)))
    );
    assert!(world.spatial.path_requests().is_empty());
}

#[test]
fn shoot_and_move_clears_obstacles_before_walking() {
    let world = World::new();
    let mut ctx = world.context(frame(
        vec![shooter(1, 10.0, 10.0, 5.0)],
        vec![
            unit(10, UnitTypeId::Zergling, 30.0, 30.0),
            unit(20, UnitTypeId::Zergling, 12.0, 10.0),
        ],
    ));

    let outcome = ShootAndMoveToTarget::new(
        UnitTag(1),
        Point2::new(40.0, 10.0),
        GridKind::Ground,
        vec![UnitTag(10)],
    )
    .destructables(vec![UnitTag(20)])
    .execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    assert_eq!(
        ctx.issued()[0].kind,
        CommandKind::Attack(Target::Unit(UnitTag(20)))
    );
}

#[test]
fn shoot_and_move_walks_until_close_enough() {
    let destination = Point2::new(40.0, 10.0);
    let world = World::new();
    let mut ctx = world.context(frame(vec![shooter(1, 10.0, 10.0, 5.0)], Vec::new()));

    let outcome =
        ShootAndMoveToTarget::new(UnitTag(1), destination, GridKind::Ground, vec![UnitTag(10)])
            .execute(&mut ctx);
    assert_eq!(outcome, Outcome::Acted);
    assert_eq!(
        ctx.issued()[0].kind,
        CommandKind::Move(Target::Point(destination))
    );

    let mut arrived = world.context(frame(vec![shooter(1, 38.0, 10.0, 5.0)], Vec::new()));
    let outcome =
        ShootAndMoveToTarget::new(UnitTag(1), destination, GridKind::Ground, vec![UnitTag(10)])
            .execute(&mut arrived);
    assert!(outcome.is_declined());
}

fn ravager() -> Unit {
    let mut ravager = unit(1, UnitTypeId::Ravager, 10.0, 10.0);
    ravager.abilities.insert(AbilityId::EffectCorrosiveBile);
    ravager
}

#[test]
fn predictive_aoe_casts_on_the_enemy_without_delay() {
    let world = World::new();
    let mut ctx = world.context(frame(
        vec![ravager()],
        vec![unit(10, UnitTypeId::Zergling, 15.0, 10.0)],
    ));

    let outcome = PlacePredictiveAoe::new(
        UnitTag(1),
        vec![Point2::new(2.0, 10.0)],
        UnitTag(10),
        AbilityId::EffectCorrosiveBile,
    )
    .execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    assert_eq!(
        ctx.issued()[0].kind,
        CommandKind::UseAbility {
            ability: AbilityId::EffectCorrosiveBile,
            target: Some(Target::Point(Point2::new(15.0, 10.0))),
        }
    );
    assert!(!ctx.is_ability_ready(UnitTag(1), AbilityId::EffectCorrosiveBile));
}

#[test]
fn predictive_aoe_leads_a_chasing_enemy() {
    let world = World::new();
    let enemy_start = Point2::new(15.0, 10.0);
    let mut ctx = world.context(frame(
        vec![ravager()],
        vec![unit(10, UnitTypeId::Zergling, enemy_start.x, enemy_start.y)],
    ));

    let outcome = PlacePredictiveAoe::new(
        UnitTag(1),
        vec![Point2::new(2.0, 10.0)],
        UnitTag(10),
        AbilityId::EffectCorrosiveBile,
    )
    .delay_frames(4)
    .execute(&mut ctx);

    assert_eq!(outcome, Outcome::Acted);
    let CommandKind::UseAbility {
        target: Some(Target::Point(aim)),
        ..
    } = ctx.issued()[0].kind
    else {
        panic!("expected a targeted cast, got {:?}", ctx.issued());
    };
    assert!(aim.x < enemy_start.x, "aim leads toward the fleeing caster");
    assert!(aim.distance_to(enemy_start) < 1.0);
}

#[test]
fn predictive_aoe_needs_ability_and_vision() {
    let world = World::new();
    let enemies = vec![unit(10, UnitTypeId::Zergling, 15.0, 10.0)];
    let cast = PlacePredictiveAoe::new(
        UnitTag(1),
        vec![Point2::new(2.0, 10.0)],
        UnitTag(10),
        AbilityId::EffectCorrosiveBile,
    );

    let mut without = world.context(frame(
        vec![unit(1, UnitTypeId::Ravager, 10.0, 10.0)],
        enemies.clone(),
    ));
    assert!(cast.execute(&mut without).is_declined());

    let mut spatial = StubSpatial::new();
    spatial.visible = false;
    let blind = World::with(spatial, StubWorkers::new(None));
    let mut ctx = blind.context(frame(vec![ravager()], enemies));
    assert!(cast.execute(&mut ctx).is_declined());
    assert!(ctx.issued().is_empty());
}

fn tumor() -> Unit {
    let mut tumor = unit(1, UnitTypeId::CreepTumorBurrowed, 10.0, 10.0);
    tumor.abilities.insert(TumorSpreadCreep::ABILITY);
    tumor
}

fn spread_target(ctx: &runtime::BotContext) -> Option<Target> {
    match ctx.issued().first()?.kind {
        CommandKind::UseAbility { target, .. } => target,
        _ => None,
    }
}

#[test]
fn tumor_prefers_the_creep_edge() {
    let world = World::new().with_creep(StubCreep {
        edge: Some(Point2::new(18.0, 10.0)),
        lowest_influence: Some(Point2::new(5.0, 5.0)),
        random: Some(Point2::new(1.0, 1.0)),
    });
    let mut ctx = world.context(frame(vec![tumor()], Vec::new()));

    assert_eq!(TumorSpreadCreep::new(UnitTag(1)).execute(&mut ctx), Outcome::Acted);
    assert_eq!(spread_target(&ctx), Some(Target::Point(Point2::new(18.0, 10.0))));
}

#[test]
fn tumor_falls_back_through_influence_then_random() {
    let world = World::new().with_creep(StubCreep {
        edge: None,
        lowest_influence: Some(Point2::new(5.0, 5.0)),
        random: Some(Point2::new(1.0, 1.0)),
    });
    let mut ctx = world.context(frame(vec![tumor()], Vec::new()));
    assert_eq!(TumorSpreadCreep::new(UnitTag(1)).execute(&mut ctx), Outcome::Acted);
    assert_eq!(spread_target(&ctx), Some(Target::Point(Point2::new(5.0, 5.0))));

    let world = World::new().with_creep(StubCreep {
        random: Some(Point2::new(1.0, 1.0)),
        ..StubCreep::default()
    });
    let mut ctx = world.context(frame(vec![tumor()], Vec::new()));
    assert_eq!(TumorSpreadCreep::new(UnitTag(1)).execute(&mut ctx), Outcome::Acted);
    assert_eq!(spread_target(&ctx), Some(Target::Point(Point2::new(1.0, 1.0))));
}

#[test]
fn tumor_without_placement_or_ability_declines() {
    let world = World::new();
    let mut ctx = world.context(frame(vec![tumor()], Vec::new()));
    assert!(TumorSpreadCreep::new(UnitTag(1)).execute(&mut ctx).is_declined());

    let world = World::new().with_creep(StubCreep {
        edge: Some(Point2::new(18.0, 10.0)),
        ..StubCreep::default()
    });
    let spent = unit(1, UnitTypeId::CreepTumorBurrowed, 10.0, 10.0);
    let mut ctx = world.context(frame(vec![spent], Vec::new()));
    assert!(TumorSpreadCreep::new(UnitTag(1)).execute(&mut ctx).is_declined());
    assert!(ctx.issued().is_empty());
}
