//! Arena
//!
//! Owns every body in the range: the static walls, the decorative ground slab
//! and the targets. It is the only place targets get positions from, and the
//! registry the weapon ray is tested against.

use glam::Vec3;
use log::{debug, info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::game::config::ArenaConfig;
use crate::game::systems::CollisionSystem;
use crate::game::types::{BodyRef, Placement, RayHit, Target, TargetId};
use crate::physics::{ObstacleQuery, OrientedBox, Probe, ProbeProfile, Ray};

/// Thickness of the ground slab; its top face sits at y = 0.
const GROUND_THICKNESS: f32 = 0.1;

pub struct Arena {
    walls: Vec<OrientedBox>,
    ground: OrientedBox,
    targets: Vec<Target>,
    rng: SmallRng,
    seed: u64,
    config: ArenaConfig,
}

impl Arena {
    /// Build the arena and place every target.
    pub fn new(config: ArenaConfig) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        let walls = config.walls.iter().map(|wall| wall.to_box()).collect();
        let ground = OrientedBox::from_size(
            Vec3::new(0.0, -GROUND_THICKNESS * 0.5, 0.0),
            Vec3::new(config.ground_size, GROUND_THICKNESS, config.ground_size),
        );

        let mut arena = Self {
            walls,
            ground,
            targets: Vec::with_capacity(config.target_count),
            rng: SmallRng::seed_from_u64(seed),
            seed,
            config,
        };

        for index in 0..arena.config.target_count {
            let id = TargetId(index as u32);
            let mut target = Target::new(id, index, Vec3::ZERO, arena.config.target_size);
            arena.place_target(&mut target);
            arena.targets.push(target);
        }

        info!(
            "arena ready: {} walls, {} targets, seed {}",
            arena.walls.len(),
            arena.targets.len(),
            seed
        );
        arena
    }

    /// Move `target` to a random collision-free spot in the spawn region.
    ///
    /// Draws up to `placement_attempts` candidates. If all of them collide,
    /// the last draw is kept anyway.
    pub fn place_target(&mut self, target: &mut Target) -> Placement {
        let max_attempts = self.config.placement_attempts.max(1);
        let mut attempts = 0;
        let mut collision_free = false;

        while attempts < max_attempts {
            attempts += 1;
            target.position = self.random_spawn_point();
            if !self.is_colliding(target.probe(self.config.target_radius), &self.config.target_probe) {
                collision_free = true;
                break;
            }
        }

        if !collision_free {
            warn!(
                "{} placed at {} overlapping a wall after {} attempts",
                target.id, target.position, attempts
            );
        }

        Placement {
            position: target.position,
            attempts,
            collision_free,
        }
    }

    /// Re-place the target with the given id. `None` for an unknown id.
    pub fn respawn_target(&mut self, id: TargetId) -> Option<Placement> {
        let index = self.targets.iter().position(|t| t.id == id)?;
        // Work on a copy so placement can borrow the arena
        let mut target = self.targets[index].clone();
        let placement = self.place_target(&mut target);
        self.targets[index] = target;
        debug!("{id} respawned at {} ({} attempts)", placement.position, placement.attempts);
        Some(placement)
    }

    /// Probe against the walls. Targets and ground never block.
    pub fn is_colliding(&self, probe: Probe, profile: &ProbeProfile) -> bool {
        CollisionSystem::probe_blocked(probe, profile, &self.walls)
    }

    /// Nearest body along `ray`: walls, ground and targets alike.
    pub fn ray_cast(&self, ray: &Ray) -> Option<RayHit> {
        let walls = self
            .walls
            .iter()
            .enumerate()
            .map(|(index, wall)| (BodyRef::Wall(index), *wall));
        let targets = self
            .targets
            .iter()
            .map(|target| (BodyRef::Target(target.id), target.bounds()));
        let ground = std::iter::once((BodyRef::Ground, self.ground));

        CollisionSystem::nearest_hit(ray, walls.chain(targets).chain(ground))
    }

    fn random_spawn_point(&mut self) -> Vec3 {
        let (min, max) = (self.config.spawn_min, self.config.spawn_max);
        Vec3::new(
            sample(&mut self.rng, min.x, max.x),
            sample(&mut self.rng, min.y, max.y),
            sample(&mut self.rng, min.z, max.z),
        )
    }

    pub fn walls(&self) -> &[OrientedBox] {
        &self.walls
    }

    pub fn ground(&self) -> &OrientedBox {
        &self.ground
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn target(&self, id: TargetId) -> Option<&Target> {
        self.targets.iter().find(|t| t.id == id)
    }

    pub fn target_mut(&mut self, id: TargetId) -> Option<&mut Target> {
        self.targets.iter_mut().find(|t| t.id == id)
    }

    /// Targets for animation alongside the walls they must avoid.
    pub fn targets_and_walls_mut(&mut self) -> (&mut [Target], &[OrientedBox]) {
        (&mut self.targets, &self.walls)
    }

    pub fn config(&self) -> &ArenaConfig {
        &self.config
    }

    /// Seed the arena RNG started from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl ObstacleQuery for Arena {
    fn probe_collides(&self, probe: Probe, profile: &ProbeProfile) -> bool {
        self.is_colliding(probe, profile)
    }
}

/// Uniform draw in `[lo, hi)`; a collapsed range yields `lo`.
fn sample(rng: &mut SmallRng, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.random_range(lo..hi) } else { lo }
}
