//! Shooting Range Engine Library
//!
//! Headless core of a first-person shooting range: a player walking a walled
//! arena, floating targets that bob and spin, and a hitscan weapon that
//! respawns whatever target it hits. Rendering and windowing stay outside;
//! the host feeds an [`InputState`] and a frame delta into
//! [`ShootingRange::tick`] and reads positions back out.
//!
//! # Modules
//!
//! - [`input`] - Platform-agnostic keyboard, mouse and touch handling
//! - [`camera`] - First-person view (position, yaw, pitch)
//! - [`physics`] - Rays, oriented boxes and ray-probe collision checks
//! - [`player`] - Kinematic player movement
//! - [`game`] - Arena, weapon, target animation and the session scene
//!
//! # Example
//!
//! ```ignore
//! use shooting_range_engine::game::{RangeConfig, ShootingRange};
//! use shooting_range_engine::input::{InputHandler, KeyCode, MouseButton};
//!
//! let mut range = ShootingRange::new(RangeConfig::default());
//! let mut input = InputHandler::new();
//!
//! input.handle_key(KeyCode::W, true);
//! input.handle_mouse_button(MouseButton::Left, true);
//!
//! let report = range.tick(1.0 / 60.0, &input.take_snapshot());
//! if let Some(shot) = report.shot {
//!     println!("{:?}", shot.hit);
//! }
//! ```

pub mod camera;
pub mod input;
pub mod physics;
pub mod player;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export commonly used input types
pub use input::{InputHandler, InputState, KeyCode, MouseButton, MovementKeys};
// Re-export player types
pub use player::PlayerMovementController;
// Re-export the session entry points
pub use game::{RangeConfig, ShootingRange, TickReport};
