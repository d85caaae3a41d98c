//! Scene Module
//!
//! High-level scene compositions that wire together all game systems.

pub mod range_scene;

pub use range_scene::{ShootingRange, TickReport};
