//! Keyboard Input Module
//!
//! Platform-independent key codes and the held-direction flags the movement
//! controller consumes.

/// Generic key codes, independent of windowing system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    // Movement keys
    W,
    A,
    S,
    D,
    Space,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Control keys
    Escape,

    /// Catch-all for unhandled keys
    Unknown,
}

impl KeyCode {
    /// Maps a DOM/winit-style key code string ("KeyW", "ArrowUp", "Space").
    pub fn from_code(code: &str) -> Self {
        match code {
            "KeyW" => KeyCode::W,
            "KeyA" => KeyCode::A,
            "KeyS" => KeyCode::S,
            "KeyD" => KeyCode::D,
            "Space" => KeyCode::Space,
            "ArrowUp" => KeyCode::ArrowUp,
            "ArrowDown" => KeyCode::ArrowDown,
            "ArrowLeft" => KeyCode::ArrowLeft,
            "ArrowRight" => KeyCode::ArrowRight,
            "Escape" => KeyCode::Escape,
            _ => KeyCode::Unknown,
        }
    }
}

/// Held movement directions for one tick.
///
/// Opposing flags may both be set; they cancel out through the axis helpers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl MovementKeys {
    /// Create a new movement keys state with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor, mostly for tests and scripted input.
    pub fn with(forward: bool, backward: bool, left: bool, right: bool) -> Self {
        Self {
            forward,
            backward,
            left,
            right,
        }
    }

    /// Check if any movement key is currently pressed.
    pub fn any_pressed(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// True when forward or backward is held (even if they cancel).
    pub fn any_longitudinal(&self) -> bool {
        self.forward || self.backward
    }

    /// True when left or right is held (even if they cancel).
    pub fn any_lateral(&self) -> bool {
        self.left || self.right
    }

    /// Reset all movement keys to released state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Get the forward/backward movement direction (-1, 0, or 1).
    pub fn forward_axis(&self) -> i32 {
        (self.forward as i32) - (self.backward as i32)
    }

    /// Get the left/right movement direction (-1, 0, or 1).
    pub fn right_axis(&self) -> i32 {
        (self.right as i32) - (self.left as i32)
    }
}
