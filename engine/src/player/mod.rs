//! Player Module
//!
//! First-person player movement.
//!
//! # Components
//!
//! - [`PlayerMovementController`] - Gravity, held-direction movement and
//!   per-axis wall collision, with the view it carries
//! - [`MovementSettings`] - Serializable tuning for the controller

pub mod movement_controller;

pub use movement_controller::{
    PlayerMovementController, MovementSettings,
    MOVE_SPEED, JUMP_IMPULSE, GRAVITY, GROUND_HEIGHT, PLAYER_RADIUS, SPAWN_POSITION,
};
