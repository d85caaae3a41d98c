//! Physics module
//!
//! Hand-written collision math for the shooting range. There is no rigid-body
//! solver: the player and targets are moved kinematically and blocked by
//! ray-probe proximity checks against static boxes.
//!
//! # Unit System
//!
//! **1 unit = 1 meter**, time in seconds.
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types (Vec3, Quat) re-exported from glam
//! - [`collision`] - Rays, slab-method ray/AABB tests, oriented boxes
//! - [`probe`] - Multi-ray proximity probes and the [`ObstacleQuery`] seam

pub mod collision;
pub mod probe;
pub mod types;

pub use collision::{BoxHit, OrientedBox, Ray, aabb_surface_normal, ray_aabb_intersect};
pub use probe::{ObstacleQuery, Probe, ProbePattern, ProbeProfile};
pub use types::{Quat, Vec3};
