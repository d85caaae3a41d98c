//! Arena Configuration
//!
//! Layout of the range: walls, ground, target count and the region targets
//! spawn in. `Default` reproduces the stock range.

use std::f32::consts::FRAC_PI_2;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::physics::{OrientedBox, ProbeProfile};

/// One static wall.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct WallConfig {
    /// World-space center
    pub position: Vec3,
    /// Full size along the wall's local axes (width, height, depth)
    pub size: Vec3,
    /// Euler rotation in radians (XYZ)
    #[serde(default)]
    pub rotation: Vec3,
}

impl WallConfig {
    pub fn new(position: Vec3, size: Vec3, rotation: Vec3) -> Self {
        Self {
            position,
            size,
            rotation,
        }
    }

    pub fn to_box(&self) -> OrientedBox {
        OrientedBox::from_size(self.position, self.size).with_rotation(self.rotation)
    }
}

/// Layout and spawning rules for the arena.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Static obstacles
    pub walls: Vec<WallConfig>,
    /// Edge length of the square ground slab (meters)
    pub ground_size: f32,
    /// Number of targets, fixed for the session
    pub target_count: usize,
    /// Edge length of a target cube (meters)
    pub target_size: f32,
    /// Lower corner of the spawn region
    pub spawn_min: Vec3,
    /// Upper corner of the spawn region
    pub spawn_max: Vec3,
    /// Candidate draws per placement before the last one is accepted
    pub placement_attempts: u32,
    /// Probe radius used when placing and animating targets
    pub target_radius: f32,
    /// Ray fan and cutoff for target-vs-wall checks
    pub target_probe: ProbeProfile,
    /// RNG seed; `None` picks one at startup
    pub seed: Option<u64>,
}

impl ArenaConfig {
    /// The five stock walls, 10x5x1 each.
    pub fn default_walls() -> Vec<WallConfig> {
        let size = Vec3::new(10.0, 5.0, 1.0);
        let turned = Vec3::new(0.0, FRAC_PI_2, 0.0);
        vec![
            WallConfig::new(Vec3::new(-8.0, 2.5, -10.0), size, Vec3::ZERO),
            WallConfig::new(Vec3::new(8.0, 2.5, -10.0), size, Vec3::ZERO),
            WallConfig::new(Vec3::new(0.0, 2.5, -15.0), size, turned),
            WallConfig::new(Vec3::new(-15.0, 2.5, 0.0), size, turned),
            WallConfig::new(Vec3::new(15.0, 2.5, 0.0), size, turned),
        ]
    }

    /// Same layout with no walls at all.
    pub fn open() -> Self {
        Self {
            walls: Vec::new(),
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            walls: Self::default_walls(),
            ground_size: 100.0,
            target_count: 10,
            target_size: 1.0,
            spawn_min: Vec3::new(-12.0, 2.0, -12.0),
            spawn_max: Vec3::new(12.0, 5.0, -2.0),
            placement_attempts: 10,
            target_radius: 0.5,
            target_probe: ProbeProfile::TARGET,
            seed: None,
        }
    }
}
