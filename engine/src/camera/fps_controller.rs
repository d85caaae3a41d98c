//! FPS Camera Controller Module
//!
//! The player's viewpoint: a world position plus yaw/pitch facing. Mouse (or
//! touch swipe) input rotates it; the movement controller translates it with
//! [`FPSCameraController::move_forward`] and [`FPSCameraController::move_right`],
//! which stay in the horizontal plane regardless of pitch.
//!
//! Key features:
//! - Direct mouse input → camera rotation (no button required)
//! - Configurable sensitivity (default: 0.002 rad/pixel)
//! - Pitch clamped to ±89 degrees to prevent gimbal lock
//! - NO smoothing - instant response for precise aiming

use glam::Vec3;

use crate::physics::Ray;

/// Pitch limit constant: -89 degrees in radians
const PITCH_LIMIT_MIN: f32 = -89.0 * std::f32::consts::PI / 180.0;
/// Pitch limit constant: +89 degrees in radians
const PITCH_LIMIT_MAX: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Radians of yaw per pixel of horizontal touch swipe
pub const TOUCH_LOOK_SENSITIVITY: f32 = 0.01;

/// FPS Camera Controller
///
/// ## Usage
/// ```rust,ignore
/// let mut camera = FPSCameraController::with_position(Vec3::new(0.0, 2.0, 0.0));
///
/// // In your input loop, pass raw mouse delta (in pixels)
/// camera.apply_mouse_delta(mouse_dx, mouse_dy);
///
/// // Crosshair ray for hitscan
/// let ray = camera.view_ray();
/// ```
#[derive(Clone, Debug)]
pub struct FPSCameraController {
    /// Camera position in world space
    pub position: Vec3,
    /// Horizontal angle (radians) - unrestricted, wraps around
    pub yaw: f32,
    /// Vertical angle (radians) - clamped to pitch_limits
    pub pitch: f32,
    /// Mouse sensitivity in radians per pixel (default: 0.002)
    pub sensitivity: f32,
    /// Pitch limits (min, max) in radians
    pitch_limits: (f32, f32),
}

impl Default for FPSCameraController {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: 0.002,
            pitch_limits: (PITCH_LIMIT_MIN, PITCH_LIMIT_MAX),
        }
    }
}

impl FPSCameraController {
    /// Create a new FPS camera controller with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an FPS camera controller with a custom position
    pub fn with_position(position: Vec3) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    /// Get the current camera position
    #[inline]
    pub fn get_position(&self) -> Vec3 {
        self.position
    }

    /// Set the camera position directly
    #[inline]
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    /// Set the pitch angle directly (in radians, will be clamped to limits)
    #[inline]
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch.clamp(self.pitch_limits.0, self.pitch_limits.1);
    }

    /// Apply mouse movement delta to rotate the camera
    ///
    /// # Arguments
    /// * `dx` - Mouse movement in X (pixels). Positive = look right (increase yaw)
    /// * `dy` - Mouse movement in Y (pixels). Positive = look down (decrease pitch)
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self.pitch.clamp(self.pitch_limits.0, self.pitch_limits.1);
    }

    /// Apply a horizontal touch swipe (pixels). Only yaw changes; swiping
    /// right turns the view right.
    pub fn apply_touch_swipe(&mut self, dx: f32) {
        self.yaw += dx * TOUCH_LOOK_SENSITIVITY;
    }

    /// Get the camera's forward direction vector
    ///
    /// # Coordinate System
    /// - +X = right
    /// - +Y = up
    /// - -Z = forward (OpenGL/Vulkan convention)
    ///
    /// When yaw=0 and pitch=0, camera looks toward -Z.
    #[inline]
    pub fn get_forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// Forward direction flattened onto the XZ plane (normalized).
    #[inline]
    pub fn get_horizontal_forward(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), 0.0, -self.yaw.cos())
    }

    /// Get the camera's right direction vector (horizontal, normalized).
    #[inline]
    pub fn get_right(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), 0.0, self.yaw.sin())
    }

    /// Translate along the horizontal forward direction.
    pub fn move_forward(&mut self, distance: f32) {
        self.position += self.get_horizontal_forward() * distance;
    }

    /// Translate along the horizontal right direction.
    pub fn move_right(&mut self, distance: f32) {
        self.position += self.get_right() * distance;
    }

    /// Ray from the eye through the crosshair (screen center).
    pub fn view_ray(&self) -> Ray {
        Ray::new(self.position, self.get_forward())
    }

    /// Point the camera at a specific world position
    pub fn look_at(&mut self, target: Vec3) {
        let to_target = target - self.position;
        let distance = to_target.length();

        if distance > 0.001 {
            self.yaw = to_target.x.atan2(-to_target.z);
            self.pitch = (to_target.y / distance)
                .asin()
                .clamp(self.pitch_limits.0, self.pitch_limits.1);
        }
    }

    /// Reset camera orientation to default (looking toward -Z)
    pub fn reset_orientation(&mut self) {
        self.yaw = 0.0;
        self.pitch = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_default_values() {
        let camera = FPSCameraController::new();
        assert_eq!(camera.position, Vec3::ZERO);
        assert_eq!(camera.yaw, 0.0);
        assert_eq!(camera.pitch, 0.0);
        assert_eq!(camera.sensitivity, 0.002);
    }

    #[test]
    fn test_apply_mouse_delta_yaw() {
        let mut camera = FPSCameraController::new();
        camera.apply_mouse_delta(100.0, 0.0);

        // Yaw should increase by 100 * 0.002 = 0.2 radians
        assert!((camera.yaw - 0.2).abs() < 0.001);
        assert_eq!(camera.pitch, 0.0);
    }

    #[test]
    fn test_pitch_clamping() {
        let mut camera = FPSCameraController::new();
        camera.apply_mouse_delta(0.0, -100000.0);

        let max_pitch = 89.0 * std::f32::consts::PI / 180.0;
        assert!((camera.pitch - max_pitch).abs() < 0.001);
    }

    #[test]
    fn test_forward_vector_at_origin() {
        let forward = FPSCameraController::new().get_forward();
        assert!(forward.x.abs() < 0.001);
        assert!(forward.y.abs() < 0.001);
        assert!((forward.z - (-1.0)).abs() < 0.001);
    }

    #[test]
    fn test_move_forward_ignores_pitch() {
        let mut camera = FPSCameraController::with_position(Vec3::new(0.0, 2.0, 0.0));
        camera.set_pitch(0.8);
        camera.move_forward(10.0);

        assert!((camera.position - Vec3::new(0.0, 2.0, -10.0)).length() < 1e-4);
    }

    #[test]
    fn test_move_right_follows_yaw() {
        let mut camera = FPSCameraController::new();
        camera.move_right(3.0);
        assert!((camera.position - Vec3::new(3.0, 0.0, 0.0)).length() < 1e-5);

        // Facing +X, right is +Z
        let mut turned = FPSCameraController::new();
        turned.yaw = FRAC_PI_2;
        turned.move_right(3.0);
        assert!((turned.position - Vec3::new(0.0, 0.0, 3.0)).length() < 1e-4);
    }

    #[test]
    fn test_right_perpendicular_to_forward() {
        let mut camera = FPSCameraController::new();
        camera.apply_mouse_delta(50.0, 30.0);
        assert!(camera.get_forward().dot(camera.get_right()).abs() < 0.001);
    }

    #[test]
    fn test_touch_swipe_turns_yaw_only() {
        let mut camera = FPSCameraController::new();
        camera.apply_touch_swipe(20.0);
        assert!((camera.yaw - 0.2).abs() < 1e-6);
        assert_eq!(camera.pitch, 0.0);
    }

    #[test]
    fn test_view_ray_matches_forward() {
        let mut camera = FPSCameraController::with_position(Vec3::new(1.0, 2.0, 3.0));
        camera.apply_mouse_delta(40.0, -25.0);
        let ray = camera.view_ray();
        assert_eq!(ray.origin, camera.position);
        assert!((ray.direction - camera.get_forward()).length() < 1e-6);
    }

    #[test]
    fn test_look_at() {
        let mut camera = FPSCameraController::with_position(Vec3::new(0.0, 0.0, 10.0));
        camera.look_at(Vec3::ZERO);
        assert!(camera.get_forward().z < 0.0);
    }
}
