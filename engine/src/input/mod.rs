//! Input Module
//!
//! Platform-agnostic input handling for keyboard, mouse and touch. Nothing
//! here knows about a windowing system; the host translates its own events
//! into [`KeyCode`]/[`MouseButton`] calls on an [`InputHandler`] and hands
//! the resulting [`InputState`] to the simulation once per tick.
//!
//! # Example
//!
//! ```rust,ignore
//! use shooting_range_engine::input::{InputHandler, KeyCode, MouseButton};
//!
//! let mut handler = InputHandler::new();
//! handler.handle_key(KeyCode::W, true);
//! handler.handle_mouse_button(MouseButton::Left, true);
//!
//! let input = handler.take_snapshot();
//! assert!(input.movement.forward && input.fire);
//! ```

pub mod bindings;
pub mod handler;
pub mod keyboard;
pub mod touch;

// Re-export commonly used types at module level
pub use bindings::{InputAction, KeyBindings, MouseButton};
pub use handler::{InputHandler, KeyState};
pub use keyboard::{KeyCode, MovementKeys};
pub use touch::{JOYSTICK_THRESHOLD, TouchJoystick, TouchSwipe};

/// Everything the simulation reads from the player for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    /// Held movement directions
    pub movement: MovementKeys,
    /// Jump pressed since the last tick
    pub jump: bool,
    /// Fire pressed since the last tick
    pub fire: bool,
    /// Mouse movement in pixels (x right, y down)
    pub look_delta: (f32, f32),
    /// Horizontal touch swipe in pixels
    pub swipe_dx: f32,
    /// Pointer lock release requested since the last tick
    pub release_pointer: bool,
}

impl InputState {
    /// Create a new input state with all inputs in their default state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot holding only the given movement keys.
    pub fn moving(movement: MovementKeys) -> Self {
        Self {
            movement,
            ..Self::default()
        }
    }

    /// Check if any movement or look input is active.
    pub fn is_moving(&self) -> bool {
        self.movement.any_pressed()
            || self.look_delta != (0.0, 0.0)
            || self.swipe_dx != 0.0
    }
}
