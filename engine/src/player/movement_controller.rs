//! Player Movement Controller
//!
//! Kinematic first-person movement: gravity, held-direction input and a flat
//! ground plane. The player *is* the view, so the controller owns an
//! [`FPSCameraController`] and moves it with the camera's horizontal helpers.
//!
//! # Physics Model
//!
//! - Move speed: 10.0 m/s, applied instantly (no acceleration)
//! - Gravity: 9.8 m/s^2
//! - Jump impulse: 20.0 m/s, only while jump-eligible
//! - Ground: eye height clamped to 2.0
//!
//! # Collision
//!
//! The X (strafe) and Z (forward) displacements are applied one at a time.
//! After each, a horizontal ray-ring probe is tested against the obstacles.
//! A blocked X move is reverted on its own; a blocked Z move reverts the
//! position to where the frame started, discarding the X move as well. Pushing
//! diagonally into a wall therefore stops the player; strafing along it with
//! no forward input still works.
//!
//! # Usage
//!
//! ```rust,ignore
//! use shooting_range_engine::player::PlayerMovementController;
//! use shooting_range_engine::input::MovementKeys;
//!
//! let mut controller = PlayerMovementController::new();
//!
//! // Each frame:
//! controller.update(delta_time, &movement_keys, &arena);
//! let eye = controller.position();
//! ```

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::camera::FPSCameraController;
use crate::input::MovementKeys;
use crate::physics::{ObstacleQuery, Probe, ProbeProfile};

/// Move speed in meters per second
pub const MOVE_SPEED: f32 = 10.0;

/// Upward velocity added by a jump, in meters per second
pub const JUMP_IMPULSE: f32 = 20.0;

/// Gravity acceleration in meters per second squared
pub const GRAVITY: f32 = 9.8;

/// Lowest allowed eye height
pub const GROUND_HEIGHT: f32 = 2.0;

/// Radius of the collision probe
pub const PLAYER_RADIUS: f32 = 0.5;

/// Where the player starts and respawns.
pub const SPAWN_POSITION: Vec3 = Vec3::new(0.0, GROUND_HEIGHT, 0.0);

/// Tunables for [`PlayerMovementController`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementSettings {
    /// Horizontal speed while a direction is held (m/s)
    pub speed: f32,
    /// Vertical velocity added by a jump (m/s)
    pub jump_impulse: f32,
    /// Downward acceleration (m/s^2)
    pub gravity: f32,
    /// Minimum eye height; landing here restores jump eligibility
    pub ground_height: f32,
    /// Probe radius used against walls
    pub radius: f32,
    /// Spawn point
    pub spawn: Vec3,
    /// Ray fan and broad-phase cutoff for wall checks
    pub probe: ProbeProfile,
}

impl Default for MovementSettings {
    fn default() -> Self {
        Self {
            speed: MOVE_SPEED,
            jump_impulse: JUMP_IMPULSE,
            gravity: GRAVITY,
            ground_height: GROUND_HEIGHT,
            radius: PLAYER_RADIUS,
            spawn: SPAWN_POSITION,
            probe: ProbeProfile::PLAYER,
        }
    }
}

/// First-person movement controller.
#[derive(Debug, Clone)]
pub struct PlayerMovementController {
    /// Eye position and facing
    view: FPSCameraController,

    /// Current velocity. Only `y` carries over between frames; `x`/`z` are
    /// recomputed from input every update.
    velocity: Vec3,

    /// Set on landing, cleared by a jump
    can_jump: bool,

    /// Pointer-lock gate. While false, `update` does nothing.
    enabled: bool,

    settings: MovementSettings,
}

impl Default for PlayerMovementController {
    fn default() -> Self {
        Self::with_settings(MovementSettings::default())
    }
}

impl PlayerMovementController {
    /// Controller at the default spawn with default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: MovementSettings) -> Self {
        Self {
            view: FPSCameraController::with_position(settings.spawn),
            velocity: Vec3::ZERO,
            can_jump: false,
            enabled: true,
            settings,
        }
    }

    /// Advance one frame.
    ///
    /// Does nothing while disabled or when `delta_time` is zero, negative or
    /// not finite.
    pub fn update(
        &mut self,
        delta_time: f32,
        input: &MovementKeys,
        obstacles: &(impl ObstacleQuery + ?Sized),
    ) {
        if !self.enabled || !delta_time.is_finite() || delta_time <= 0.0 {
            return;
        }

        self.velocity.y -= self.settings.gravity * delta_time;

        // Opposing keys cancel to a zero vector, which stays zero
        let direction = Vec3::new(
            input.right_axis() as f32,
            0.0,
            input.forward_axis() as f32,
        )
        .normalize_or_zero();

        self.velocity.z = if input.any_longitudinal() {
            -direction.z * self.settings.speed
        } else {
            0.0
        };
        self.velocity.x = if input.any_lateral() {
            -direction.x * self.settings.speed
        } else {
            0.0
        };

        // A blocked Z move also undoes the X move made this frame
        let start = self.view.position;

        let move_x = -self.velocity.x * delta_time;
        if move_x != 0.0 {
            self.view.move_right(move_x);
            if self.is_blocked(obstacles) {
                self.view.position = start;
            }
        }

        let move_z = -self.velocity.z * delta_time;
        if move_z != 0.0 {
            self.view.move_forward(move_z);
            if self.is_blocked(obstacles) {
                self.view.position = start;
            }
        }

        self.view.position.y += self.velocity.y * delta_time;

        if self.view.position.y < self.settings.ground_height {
            self.view.position.y = self.settings.ground_height;
            self.velocity.y = 0.0;
            self.can_jump = true;
        }
    }

    /// Apply the jump impulse if the player is jump-eligible.
    ///
    /// Returns `true` when the impulse was applied.
    pub fn jump(&mut self) -> bool {
        if !self.can_jump {
            return false;
        }
        self.velocity.y += self.settings.jump_impulse;
        self.can_jump = false;
        true
    }

    /// Back to the spawn point, at rest.
    pub fn respawn(&mut self) {
        self.view.position = self.settings.spawn;
        self.view.reset_orientation();
        self.velocity = Vec3::ZERO;
        self.can_jump = false;
    }

    fn is_blocked(&self, obstacles: &(impl ObstacleQuery + ?Sized)) -> bool {
        let probe = Probe::new(self.view.position, self.settings.radius);
        obstacles.probe_collides(probe, &self.settings.probe)
    }

    /// Enable or disable movement (pointer locked / unlocked).
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.view.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.view.position = position;
    }

    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    #[inline]
    pub fn can_jump(&self) -> bool {
        self.can_jump
    }

    pub fn view(&self) -> &FPSCameraController {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut FPSCameraController {
        &mut self.view
    }

    pub fn settings(&self) -> &MovementSettings {
        &self.settings
    }
}
