//! Physics type re-exports from glam
//!
//! This module provides the core mathematical types used throughout
//! the collision and hitscan code, re-exported from the glam library.

pub use glam::{Quat, Vec3};
