//! Input Bindings Module
//!
//! Maps physical keys and mouse buttons to logical actions. Several keys may
//! drive the same action (W and ArrowUp both move forward).

use std::collections::HashMap;

use super::KeyCode;

/// Logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move forward (default: W, ArrowUp)
    MoveForward,
    /// Move backward (default: S, ArrowDown)
    MoveBack,
    /// Strafe left (default: A, ArrowLeft)
    MoveLeft,
    /// Strafe right (default: D, ArrowRight)
    MoveRight,
    /// Jump (default: Space)
    Jump,
    /// Fire the weapon (default: left mouse button)
    Fire,
    /// Give up pointer lock (default: Escape)
    ReleasePointer,
}

impl InputAction {
    /// Actions that are held rather than triggered once.
    pub fn is_movement(&self) -> bool {
        matches!(
            self,
            InputAction::MoveForward
                | InputAction::MoveBack
                | InputAction::MoveLeft
                | InputAction::MoveRight
        )
    }
}

/// Mouse buttons the range cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Maps physical keys and buttons to logical actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    key_to_action: HashMap<KeyCode, InputAction>,
    button_to_action: HashMap<MouseButton, InputAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create a new KeyBindings instance with default key mappings.
    ///
    /// Default bindings:
    /// - W / ArrowUp = MoveForward
    /// - S / ArrowDown = MoveBack
    /// - A / ArrowLeft = MoveLeft
    /// - D / ArrowRight = MoveRight
    /// - Space = Jump
    /// - Left mouse = Fire
    /// - Escape = ReleasePointer
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::W, InputAction::MoveForward);
        bindings.bind(KeyCode::ArrowUp, InputAction::MoveForward);
        bindings.bind(KeyCode::S, InputAction::MoveBack);
        bindings.bind(KeyCode::ArrowDown, InputAction::MoveBack);
        bindings.bind(KeyCode::A, InputAction::MoveLeft);
        bindings.bind(KeyCode::ArrowLeft, InputAction::MoveLeft);
        bindings.bind(KeyCode::D, InputAction::MoveRight);
        bindings.bind(KeyCode::ArrowRight, InputAction::MoveRight);
        bindings.bind(KeyCode::Space, InputAction::Jump);
        bindings.bind(KeyCode::Escape, InputAction::ReleasePointer);
        bindings.bind_button(MouseButton::Left, InputAction::Fire);

        bindings
    }

    /// Bindings with nothing mapped.
    pub fn empty() -> Self {
        Self {
            key_to_action: HashMap::new(),
            button_to_action: HashMap::new(),
        }
    }

    /// Bind a physical key to a logical action, replacing any previous
    /// action for that key.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.key_to_action.insert(key, action);
    }

    /// Bind a mouse button to a logical action.
    pub fn bind_button(&mut self, button: MouseButton, action: InputAction) {
        self.button_to_action.insert(button, action);
    }

    /// Remove the binding for a specific key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.key_to_action.remove(&key);
    }

    /// Action bound to `key`, if any.
    pub fn action_for_key(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    /// Action bound to `button`, if any.
    pub fn action_for_button(&self, button: MouseButton) -> Option<InputAction> {
        self.button_to_action.get(&button).copied()
    }

    /// All keys bound to `action`, in no particular order.
    pub fn keys_for(&self, action: InputAction) -> Vec<KeyCode> {
        self.key_to_action
            .iter()
            .filter(|&(_, &bound)| bound == action)
            .map(|(&key, _)| key)
            .collect()
    }
}
