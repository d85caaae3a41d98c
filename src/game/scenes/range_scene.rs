//! ShootingRange - one play session.
//!
//! Owns the arena, the player, the weapon, the target animator and the effect
//! queue. [`tick`](ShootingRange::tick) is the single entry point for the
//! per-frame logic and runs the systems in a fixed order:
//!
//! 1. apply deferred effects that have come due
//! 2. pointer release, look input, then player movement against the walls
//! 3. jump, if requested
//! 4. target animation
//! 5. weapon cooldown
//! 6. fire, if requested
//!
//! No rendering or platform code lives here.

use glam::Vec3;
use log::{debug, info};

use crate::game::arena::Arena;
use crate::game::config::RangeConfig;
use crate::game::systems::{
    DeferredEffect, EffectScheduler, ShotReport, TargetAnimator, WeaponSystem,
};
use crate::game::types::{MuzzleFlash, Target};
use crate::input::InputState;
use crate::physics::OrientedBox;
use crate::player::PlayerMovementController;

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    /// Present when a shot actually fired
    pub shot: Option<ShotReport>,
    /// True when a jump impulse was applied
    pub jumped: bool,
    /// Deferred effects applied at the start of the tick
    pub applied_effects: Vec<DeferredEffect>,
}

/// Complete range session.
pub struct ShootingRange {
    config: RangeConfig,
    arena: Arena,
    player: PlayerMovementController,
    weapon: WeaponSystem,
    animator: TargetAnimator,
    effects: EffectScheduler,
    /// Session clock in seconds
    elapsed: f64,
    frame: u64,
}

impl ShootingRange {
    /// Build a session from configuration. Targets are placed immediately.
    pub fn new(config: RangeConfig) -> Self {
        let arena = Arena::new(config.arena.clone());
        let player = PlayerMovementController::with_settings(config.player);
        let weapon = WeaponSystem::new(config.weapon);
        let animator = TargetAnimator::new(
            config.animator,
            config.arena.target_radius,
            config.arena.target_probe,
        );

        info!(
            "range session started: player at {}, {} targets",
            player.position(),
            arena.targets().len()
        );

        Self {
            config,
            arena,
            player,
            weapon,
            animator,
            effects: EffectScheduler::new(),
            elapsed: 0.0,
            frame: 0,
        }
    }

    /// Advance the session by `delta_time` seconds.
    ///
    /// Zero, negative or non-finite deltas leave the clock where it is; the
    /// systems then treat the frame as empty, but a fire request is still
    /// honoured if the weapon is ready.
    pub fn tick(&mut self, delta_time: f32, input: &InputState) -> TickReport {
        let dt = if delta_time.is_finite() && delta_time > 0.0 {
            delta_time
        } else {
            0.0
        };
        self.elapsed += f64::from(dt);
        self.frame += 1;

        let mut report = TickReport {
            applied_effects: self.apply_due_effects(),
            ..TickReport::default()
        };

        if input.release_pointer {
            self.set_controls_enabled(false);
        }

        if self.player.is_enabled() {
            let (dx, dy) = input.look_delta;
            let view = self.player.view_mut();
            view.apply_mouse_delta(dx, dy);
            view.apply_touch_swipe(input.swipe_dx);
        }

        self.player.update(dt, &input.movement, &self.arena);

        if input.jump {
            report.jumped = self.player.jump();
        }

        let elapsed = self.elapsed as f32;
        let (targets, walls) = self.arena.targets_and_walls_mut();
        self.animator.update(dt, elapsed, targets, walls);

        self.weapon.update(dt);

        if input.fire {
            let ray = self.player.view().view_ray();
            report.shot = self.weapon.fire(
                self.elapsed,
                ray.origin,
                ray.direction,
                &mut self.arena,
                &mut self.effects,
            );
            if let Some(shot) = &report.shot {
                debug!("frame {}: {:?}", self.frame, shot.hit);
            }
        }

        report
    }

    fn apply_due_effects(&mut self) -> Vec<DeferredEffect> {
        let due = self.effects.drain_due(self.elapsed);
        for effect in &due {
            match *effect {
                DeferredEffect::RemoveMuzzleFlash(id) => {
                    self.weapon.remove_flash(id);
                }
                DeferredEffect::RestoreTargetScale { id, pulse } => {
                    if let Some(target) = self.arena.target_mut(id) {
                        target.end_pulse(pulse);
                    }
                }
            }
        }
        due
    }

    /// Pointer lock gained or lost. Movement and look stop while unlocked.
    pub fn set_controls_enabled(&mut self, enabled: bool) {
        if enabled != self.player.is_enabled() {
            info!("controls {}", if enabled { "locked" } else { "released" });
        }
        self.player.set_enabled(enabled);
    }

    pub fn arena(&self) -> &Arena {
        &self.arena
    }

    pub fn walls(&self) -> &[OrientedBox] {
        self.arena.walls()
    }

    pub fn targets(&self) -> &[Target] {
        self.arena.targets()
    }

    pub fn player(&self) -> &PlayerMovementController {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut PlayerMovementController {
        &mut self.player
    }

    pub fn weapon(&self) -> &WeaponSystem {
        &self.weapon
    }

    pub fn muzzle_flashes(&self) -> &[MuzzleFlash] {
        self.weapon.muzzle_flashes()
    }

    pub fn pending_effects(&self) -> usize {
        self.effects.len()
    }

    /// Seconds of simulated time so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn config(&self) -> &RangeConfig {
        &self.config
    }

    /// Eye position, for aiming helpers and logging.
    pub fn eye(&self) -> Vec3 {
        self.player.position()
    }
}
