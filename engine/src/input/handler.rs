//! Input Handler
//!
//! Collects raw platform events between ticks and folds them into one
//! [`InputState`] snapshot per tick. Held keys persist across snapshots;
//! triggers (jump, fire) and look deltas are consumed by the snapshot.

use std::collections::HashSet;

use super::bindings::{InputAction, KeyBindings, MouseButton};
use super::keyboard::{KeyCode, MovementKeys};
use super::touch::{TouchJoystick, TouchSwipe};
use super::InputState;

/// State of a key (pressed or released)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub pressed: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

impl KeyState {
    fn update(&mut self, pressed: bool) {
        self.just_pressed = pressed && !self.pressed;
        self.just_released = !pressed && self.pressed;
        self.pressed = pressed;
    }
}

/// Event accumulator that produces per-tick snapshots.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    bindings: KeyBindings,
    /// Physical keys currently held
    held_keys: HashSet<KeyCode>,
    left_mouse: KeyState,
    jump_requested: bool,
    fire_requested: bool,
    release_requested: bool,
    /// Raw mouse movement since the last snapshot
    mouse_delta: (f32, f32),
    joystick: TouchJoystick,
    swipe: TouchSwipe,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            ..Default::default()
        }
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.bindings
    }

    /// Handle a key event. Auto-repeat presses of an already held key do not
    /// re-trigger jump or fire.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) {
        let was_held = if pressed {
            !self.held_keys.insert(key)
        } else {
            self.held_keys.remove(&key);
            true
        };

        if pressed && !was_held {
            match self.bindings.action_for_key(key) {
                Some(InputAction::Jump) => self.jump_requested = true,
                Some(InputAction::Fire) => self.fire_requested = true,
                Some(InputAction::ReleasePointer) => self.release_requested = true,
                _ => {}
            }
        }
    }

    /// Handle mouse button event
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if button == MouseButton::Left {
            self.left_mouse.update(pressed);
        }
        if pressed {
            match self.bindings.action_for_button(button) {
                Some(InputAction::Fire) => self.fire_requested = true,
                Some(InputAction::Jump) => self.jump_requested = true,
                _ => {}
            }
        }
    }

    /// Handle raw mouse movement (for camera control)
    pub fn handle_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.mouse_delta.0 += dx;
        self.mouse_delta.1 += dy;
    }

    pub fn joystick_mut(&mut self) -> &mut TouchJoystick {
        &mut self.joystick
    }

    pub fn swipe_mut(&mut self) -> &mut TouchSwipe {
        &mut self.swipe
    }

    /// On-screen jump button.
    pub fn touch_jump(&mut self) {
        self.jump_requested = true;
    }

    /// On-screen fire button.
    pub fn touch_fire(&mut self) {
        self.fire_requested = true;
    }

    /// Check if an action is currently held through any bound key.
    pub fn action_pressed(&self, action: InputAction) -> bool {
        self.held_keys
            .iter()
            .any(|&key| self.bindings.action_for_key(key) == Some(action))
    }

    pub fn left_mouse(&self) -> KeyState {
        self.left_mouse
    }

    /// Held directions from keys and joystick combined.
    pub fn movement(&self) -> MovementKeys {
        let stick = self.joystick.movement();
        MovementKeys {
            forward: stick.forward || self.action_pressed(InputAction::MoveForward),
            backward: stick.backward || self.action_pressed(InputAction::MoveBack),
            left: stick.left || self.action_pressed(InputAction::MoveLeft),
            right: stick.right || self.action_pressed(InputAction::MoveRight),
        }
    }

    /// Produce this tick's snapshot and clear one-shot state.
    pub fn take_snapshot(&mut self) -> InputState {
        let snapshot = InputState {
            movement: self.movement(),
            jump: self.jump_requested,
            fire: self.fire_requested,
            look_delta: self.mouse_delta,
            swipe_dx: self.swipe.take_dx(),
            release_pointer: self.release_requested,
        };

        self.jump_requested = false;
        self.fire_requested = false;
        self.release_requested = false;
        self.mouse_delta = (0.0, 0.0);
        self.left_mouse.just_pressed = false;
        self.left_mouse.just_released = false;

        snapshot
    }

    /// Drop everything held, e.g. when the pointer lock is lost.
    pub fn release_all(&mut self) {
        self.held_keys.clear();
        self.left_mouse = KeyState::default();
        self.joystick.end();
        self.swipe.end();
        self.jump_requested = false;
        self.fire_requested = false;
        self.release_requested = false;
        self.mouse_delta = (0.0, 0.0);
    }
}
