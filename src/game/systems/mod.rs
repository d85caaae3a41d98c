//! Game systems - self-contained modules that own state and logic.

pub mod collision_system;
pub mod effect_scheduler;
pub mod target_animator;
pub mod weapon_system;

pub use collision_system::CollisionSystem;
pub use effect_scheduler::{DeferredEffect, EffectScheduler};
pub use target_animator::TargetAnimator;
pub use weapon_system::{ShotHit, ShotReport, WeaponSystem};
