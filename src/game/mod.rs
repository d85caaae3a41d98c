//! Game Module
//!
//! The shooting range itself, built on top of the engine's camera, input,
//! physics and player modules.

pub mod arena;
pub mod config;
pub mod scenes;
pub mod systems;
pub mod types;

pub use arena::Arena;
pub use config::{AnimatorConfig, ArenaConfig, ConfigError, RangeConfig, WallConfig, WeaponConfig};
pub use scenes::{ShootingRange, TickReport};
pub use systems::{
    CollisionSystem, DeferredEffect, EffectScheduler, ShotHit, ShotReport, TargetAnimator,
    WeaponSystem,
};
pub use types::{
    BodyKind, BodyRef, FlashId, MuzzleFlash, Placement, RayHit, Target, TargetId,
};
