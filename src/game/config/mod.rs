//! Config Module
//!
//! Centralized configuration for the range layout and gameplay parameters.

pub mod arena_config;
pub mod range_config;

pub use arena_config::{ArenaConfig, WallConfig};
pub use range_config::{AnimatorConfig, ConfigError, RangeConfig, WeaponConfig};
