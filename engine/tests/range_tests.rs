//! Range Tests - Whole Sessions Driven Through the Public API
//!
//! Each test builds a ShootingRange from config, feeds it input snapshots at
//! 60 Hz and checks the invariants the range promises: ground and floor
//! clamps, placement retries, cooldown, and shots blocked by walls.

use glam::Vec3;
use shooting_range_engine::game::{
    Arena, ArenaConfig, BodyRef, DeferredEffect, RangeConfig, ShootingRange, ShotHit, TargetId,
    WallConfig,
};
use shooting_range_engine::input::{InputHandler, InputState, KeyCode, MouseButton, MovementKeys};

const DT: f32 = 1.0 / 60.0;

fn range_with(arena: ArenaConfig) -> ShootingRange {
    ShootingRange::new(RangeConfig {
        arena: arena.with_seed(2024),
        ..RangeConfig::default()
    })
}

fn fire() -> InputState {
    InputState {
        fire: true,
        ..InputState::default()
    }
}

// ============================================================================
// Player
// ============================================================================

#[test]
fn test_walk_forward_one_second() {
    let mut range = range_with(ArenaConfig::open());
    let mut input = InputHandler::new();
    input.handle_key(KeyCode::W, true);

    for _ in 0..60 {
        range.tick(DT, &input.take_snapshot());
    }

    let pos = range.player().position();
    assert!((pos.z + 10.0).abs() < 0.01, "z = {}", pos.z);
    assert!(pos.x.abs() < 1e-4);
    assert_eq!(pos.y, 2.0);
}

#[test]
fn test_player_never_below_ground() {
    let mut range = range_with(ArenaConfig::default());
    let jump = InputState {
        jump: true,
        ..InputState::moving(MovementKeys::with(false, true, true, false))
    };

    for frame in 0..900 {
        let dt = [DT, 0.1, 0.004, 0.25][frame % 4];
        let input = if frame % 50 == 0 { jump } else { InputState::new() };
        range.tick(dt, &input);
        assert!(range.player().position().y >= 2.0);
    }
}

#[test]
fn test_stock_walls_stop_the_player() {
    let mut range = range_with(ArenaConfig::default());
    // Face +X toward the right wall (inner face at x = 14.5)
    range.player_mut().view_mut().yaw = std::f32::consts::FRAC_PI_2;
    let forward = InputState::moving(MovementKeys::with(true, false, false, false));

    for _ in 0..180 {
        range.tick(DT, &forward);
    }

    let x = range.player().position().x;
    assert!(x > 13.8 && x < 14.01, "x = {x}");
}

// ============================================================================
// Targets
// ============================================================================

#[test]
fn test_targets_stay_above_floor() {
    let mut range = range_with(ArenaConfig::default());
    for _ in 0..1200 {
        range.tick(DT, &InputState::new());
        for target in range.targets() {
            assert!(target.position.y - 0.5 >= 1.5, "{:?}", target.position);
        }
    }
}

#[test]
fn test_targets_keep_count_and_spin() {
    let mut range = range_with(ArenaConfig::default());
    for _ in 0..120 {
        range.tick(DT, &InputState::new());
    }
    assert_eq!(range.targets().len(), 10);
    for target in range.targets() {
        assert!((target.rotation.x - 1.0).abs() < 1e-3);
        assert!((target.rotation.y - 0.6).abs() < 1e-3);
    }
}

#[test]
fn test_respawn_in_empty_arena_takes_one_attempt() {
    let mut range = range_with(ArenaConfig {
        target_count: 1,
        ..ArenaConfig::open()
    });
    let target = range.targets()[0].position;
    range.player_mut().view_mut().look_at(target);

    let shot = range.tick(DT, &fire()).shot.unwrap();
    match shot.hit {
        ShotHit::Target { id, placement } => {
            assert_eq!(id, TargetId(0));
            assert_eq!(placement.attempts, 1);
            assert!(placement.collision_free);
        }
        other => panic!("expected a target hit, got {other:?}"),
    }
}

#[test]
fn test_wall_over_spawn_region_gives_up_after_ten() {
    // A single wall covers every possible spawn point
    let config = ArenaConfig {
        walls: vec![WallConfig::new(
            Vec3::new(0.0, 3.5, -7.0),
            Vec3::new(26.0, 5.0, 12.0),
            Vec3::ZERO,
        )],
        target_count: 2,
        ..ArenaConfig::default()
    };
    let mut arena = Arena::new(config.with_seed(7));

    let placement = arena.respawn_target(TargetId(1)).unwrap();
    assert_eq!(placement.attempts, 10);
    assert!(!placement.collision_free);

    // The last draw is kept, inside the spawn region
    let kept = arena.target(TargetId(1)).unwrap().position;
    assert_eq!(kept, placement.position);
    assert!(kept.cmpge(arena.config().spawn_min).all());
    assert!(kept.cmple(arena.config().spawn_max).all());
}

// ============================================================================
// Weapon
// ============================================================================

#[test]
fn test_double_fire_within_cooldown_resolves_once() {
    let mut range = range_with(ArenaConfig::open());
    let mut input = InputHandler::new();

    input.handle_mouse_button(MouseButton::Left, true);
    let first = range.tick(DT, &input.take_snapshot());
    input.handle_mouse_button(MouseButton::Left, false);
    input.handle_mouse_button(MouseButton::Left, true);
    let second = range.tick(0.2, &input.take_snapshot());

    assert!(first.shot.is_some());
    assert!(second.shot.is_none());
    assert_eq!(range.weapon().shots_fired(), 1);
    assert_eq!(range.muzzle_flashes().len(), 0);
}

#[test]
fn test_wall_in_front_of_target_blocks_shot() {
    // Spawn region collapsed to one point behind a wall
    let spot = Vec3::new(0.0, 3.0, -8.0);
    let arena = ArenaConfig {
        walls: vec![WallConfig::new(
            Vec3::new(0.0, 2.5, -4.0),
            Vec3::new(4.0, 5.0, 0.5),
            Vec3::ZERO,
        )],
        target_count: 1,
        spawn_min: spot,
        spawn_max: spot,
        ..ArenaConfig::default()
    };
    let mut range = range_with(arena);
    assert_eq!(range.targets()[0].position, spot);

    range.player_mut().view_mut().look_at(spot);
    let shot = range.tick(DT, &fire()).shot.unwrap();

    assert_eq!(shot.hit, ShotHit::Blocked(BodyRef::Wall(0)));
    let target = &range.targets()[0];
    assert_eq!(target.scale, 1.0);
    assert!((target.position.z - spot.z).abs() < 1e-6);
}

#[test]
fn test_hit_pulse_restores_after_200ms() {
    let mut range = range_with(ArenaConfig {
        target_count: 1,
        ..ArenaConfig::open()
    });
    let aim = range.targets()[0].position;
    range.player_mut().view_mut().look_at(aim);

    let shot = range.tick(DT, &fire()).shot.unwrap();
    let id = shot.hit_target().unwrap();
    let scale_of = |range: &ShootingRange| range.arena().target(id).map(|t| t.scale);
    assert_eq!(scale_of(&range), Some(0.8));

    let mut applied = Vec::new();
    for _ in 0..10 {
        applied.extend(range.tick(DT, &InputState::new()).applied_effects);
    }
    assert_eq!(scale_of(&range), Some(0.8));

    for _ in 0..4 {
        applied.extend(range.tick(DT, &InputState::new()).applied_effects);
    }
    assert_eq!(scale_of(&range), Some(1.0));
    assert!(applied.contains(&DeferredEffect::RestoreTargetScale { id, pulse: 1 }));
    assert!(applied.contains(&DeferredEffect::RemoveMuzzleFlash(shot.flash)));
    assert_eq!(range.pending_effects(), 0);
}
