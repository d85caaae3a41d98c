//! Weapon system - hitscan fire with a cooldown.
//!
//! A shot is a single ray from the eye along the view direction. The nearest
//! body decides the outcome: a target is respawned elsewhere and pulses, any
//! other body just absorbs the shot. Every shot spawns a muzzle flash that the
//! scene puts out again through the effect scheduler.

use glam::Vec3;
use log::debug;

use crate::game::arena::Arena;
use crate::game::config::WeaponConfig;
use crate::game::systems::effect_scheduler::{DeferredEffect, EffectScheduler};
use crate::game::types::{BodyRef, FlashId, MuzzleFlash, Placement, RayHit, TargetId};
use crate::physics::Ray;

/// What the shot ran into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShotHit {
    /// The ray left the range.
    Nothing,
    /// A wall or the ground was in the way.
    Blocked(BodyRef),
    /// A target was hit and moved.
    Target { id: TargetId, placement: Placement },
}

/// Result of a shot that actually fired.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotReport {
    pub hit: ShotHit,
    /// Nearest intersection, if the ray hit anything
    pub impact: Option<RayHit>,
    /// Flash spawned by this shot
    pub flash: FlashId,
}

impl ShotReport {
    pub fn hit_target(&self) -> Option<TargetId> {
        match self.hit {
            ShotHit::Target { id, .. } => Some(id),
            _ => None,
        }
    }
}

/// Cooldown state plus the flashes currently lit.
#[derive(Debug)]
pub struct WeaponSystem {
    config: WeaponConfig,
    /// Seconds until the next shot; ready at or below zero
    cooldown: f32,
    flashes: Vec<MuzzleFlash>,
    next_flash: u64,
    shots_fired: u64,
}

impl WeaponSystem {
    pub fn new(config: WeaponConfig) -> Self {
        Self {
            config,
            cooldown: 0.0,
            flashes: Vec::new(),
            next_flash: 0,
            shots_fired: 0,
        }
    }

    /// Count the cooldown down.
    pub fn update(&mut self, delta_time: f32) {
        if self.cooldown > 0.0 && delta_time.is_finite() && delta_time > 0.0 {
            self.cooldown -= delta_time;
        }
    }

    /// Fire from `origin` along `forward`.
    ///
    /// Returns `None` while cooling down. Otherwise the weapon goes back on
    /// cooldown, a flash is lit, and a hit target is respawned and shrunk
    /// until the scheduled restore.
    pub fn fire(
        &mut self,
        now: f64,
        origin: Vec3,
        forward: Vec3,
        arena: &mut Arena,
        effects: &mut EffectScheduler,
    ) -> Option<ShotReport> {
        if !self.is_ready() {
            return None;
        }
        self.cooldown = self.config.cooldown;
        self.shots_fired += 1;

        let ray = Ray::new(origin, forward);
        let flash = self.spawn_flash(origin + ray.direction * self.config.flash_distance);
        effects.schedule_after(
            now,
            self.config.flash_duration,
            DeferredEffect::RemoveMuzzleFlash(flash),
        );

        let impact = arena.ray_cast(&ray);
        let hit = match impact.map(|hit| hit.body) {
            None => ShotHit::Nothing,
            Some(BodyRef::Target(id)) => match arena.respawn_target(id) {
                Some(placement) => {
                    if let Some(target) = arena.target_mut(id) {
                        let pulse = target.begin_pulse(self.config.hit_scale);
                        effects.schedule_after(
                            now,
                            self.config.hit_pulse_duration,
                            DeferredEffect::RestoreTargetScale { id, pulse },
                        );
                    }
                    ShotHit::Target { id, placement }
                }
                None => ShotHit::Nothing,
            },
            Some(body) => ShotHit::Blocked(body),
        };

        debug!("shot {} from {origin}: {hit:?}", self.shots_fired);
        Some(ShotReport { hit, impact, flash })
    }

    fn spawn_flash(&mut self, position: Vec3) -> FlashId {
        let id = FlashId(self.next_flash);
        self.next_flash += 1;
        self.flashes.push(MuzzleFlash {
            id,
            position,
            color: self.config.flash_color,
            intensity: self.config.flash_intensity,
            range: self.config.flash_range,
        });
        id
    }

    /// Put out a flash. Returns false if it was already gone.
    pub fn remove_flash(&mut self, id: FlashId) -> bool {
        let before = self.flashes.len();
        self.flashes.retain(|flash| flash.id != id);
        self.flashes.len() != before
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.cooldown <= 0.0
    }

    /// Seconds left before the next shot, never negative.
    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown.max(0.0)
    }

    pub fn muzzle_flashes(&self) -> &[MuzzleFlash] {
        &self.flashes
    }

    pub fn shots_fired(&self) -> u64 {
        self.shots_fired
    }

    pub fn config(&self) -> &WeaponConfig {
        &self.config
    }
}
