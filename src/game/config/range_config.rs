//! Range Configuration
//!
//! Top-level session configuration plus weapon and animator tuning. Every
//! section defaults to the stock values, so a JSON file only needs the fields
//! it changes.

use std::path::Path;

use glam::Vec3;
use log::info;
use serde::{Deserialize, Serialize};

use super::arena_config::ArenaConfig;
use crate::player::MovementSettings;

/// Errors from loading or validating a [`RangeConfig`].
#[derive(Debug)]
pub enum ConfigError {
    /// Standard I/O error.
    Io(std::io::Error),
    /// JSON serialization/deserialization error.
    Json(serde_json::Error),
    /// Parsed fine but a value is out of range.
    Invalid(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {e}"),
            ConfigError::Json(e) => write!(f, "JSON error: {e}"),
            ConfigError::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

/// Weapon timing and feedback.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeaponConfig {
    /// Seconds between shots
    pub cooldown: f32,
    /// How far in front of the eye the flash appears (meters)
    pub flash_distance: f32,
    /// Seconds the flash stays lit
    pub flash_duration: f32,
    /// Flash light color, 0xRRGGBB
    pub flash_color: u32,
    pub flash_intensity: f32,
    /// Light falloff distance (meters)
    pub flash_range: f32,
    /// Scale a target dips to when hit
    pub hit_scale: f32,
    /// Seconds before a hit target returns to full scale
    pub hit_pulse_duration: f32,
}

impl Default for WeaponConfig {
    fn default() -> Self {
        Self {
            cooldown: 0.5,
            flash_distance: 2.0,
            flash_duration: 0.05,
            flash_color: 0xffffaa,
            flash_intensity: 30.0,
            flash_range: 3.0,
            hit_scale: 0.8,
            hit_pulse_duration: 0.2,
        }
    }
}

/// Target bobbing and spinning.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Oscillation speed of the first target
    pub base_speed: f32,
    /// Added speed per target index
    pub speed_step: f32,
    /// Vertical step per frame at the crest of the wave
    pub bob_amplitude: f32,
    /// Lowest allowed bottom face height
    pub min_bottom: f32,
    /// Height a target snaps back to when it sinks too low
    pub recover_height: f32,
    /// Euler spin rate in radians per second
    pub spin: Vec3,
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            base_speed: 0.5,
            speed_step: 0.2,
            bob_amplitude: 0.02,
            min_bottom: 1.5,
            recover_height: 2.0,
            spin: Vec3::new(0.5, 0.3, 0.0),
        }
    }
}

/// Everything needed to build a [`ShootingRange`](crate::game::ShootingRange).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeConfig {
    pub arena: ArenaConfig,
    pub player: MovementSettings,
    pub weapon: WeaponConfig,
    pub animator: AnimatorConfig,
}

impl RangeConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        info!("loaded range config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let arena = &self.arena;
        let (min, max) = (arena.spawn_min, arena.spawn_max);
        if !min.is_finite() || !max.is_finite() {
            return invalid("spawn region must be finite");
        }
        if min.cmpgt(max).any() {
            return invalid(format!("spawn_min {min} exceeds spawn_max {max}"));
        }
        if arena.placement_attempts == 0 {
            return invalid("placement_attempts must be at least 1");
        }
        positive("arena.target_size", arena.target_size)?;
        positive("arena.target_radius", arena.target_radius)?;
        positive("arena.ground_size", arena.ground_size)?;
        for (index, wall) in arena.walls.iter().enumerate() {
            if !wall.position.is_finite() || !wall.rotation.is_finite() {
                return invalid(format!("wall {index} has a non-finite transform"));
            }
            if !wall.size.is_finite() || wall.size.cmple(Vec3::ZERO).any() {
                return invalid(format!("wall {index} size must be positive"));
            }
        }

        let player = &self.player;
        non_negative("player.speed", player.speed)?;
        non_negative("player.jump_impulse", player.jump_impulse)?;
        non_negative("player.gravity", player.gravity)?;
        positive("player.radius", player.radius)?;
        if !player.ground_height.is_finite() || !player.spawn.is_finite() {
            return invalid("player spawn and ground height must be finite");
        }

        let weapon = &self.weapon;
        non_negative("weapon.cooldown", weapon.cooldown)?;
        non_negative("weapon.flash_duration", weapon.flash_duration)?;
        non_negative("weapon.hit_pulse_duration", weapon.hit_pulse_duration)?;
        positive("weapon.hit_scale", weapon.hit_scale)?;

        let animator = &self.animator;
        if !animator.spin.is_finite()
            || !animator.base_speed.is_finite()
            || !animator.speed_step.is_finite()
            || !animator.bob_amplitude.is_finite()
        {
            return invalid("animator rates must be finite");
        }
        if animator.recover_height - arena.target_size * 0.5 < animator.min_bottom {
            return invalid("animator.recover_height leaves the target below min_bottom");
        }

        Ok(())
    }
}

fn invalid(msg: impl Into<String>) -> Result<(), ConfigError> {
    Err(ConfigError::Invalid(msg.into()))
}

fn positive(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        invalid(format!("{name} must be positive, got {value}"))
    }
}

fn non_negative(name: &str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        invalid(format!("{name} must be non-negative, got {value}"))
    }
}
