//! Touch Input Module
//!
//! On-screen joystick for movement and horizontal swipe for looking. Both
//! reduce to the same snapshot fields the keyboard and mouse produce.

use super::MovementKeys;

/// Normalized deflection past which a joystick axis counts as pressed.
pub const JOYSTICK_THRESHOLD: f32 = 0.3;

/// Virtual thumbstick.
///
/// Deflection is measured from the pad center and normalized by the pad
/// radius, so (0, -1) is pushed fully up. Screen Y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchJoystick {
    /// Pad radius in pixels
    pub radius: f32,
    active: bool,
    deflection: (f32, f32),
}

impl TouchJoystick {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            active: false,
            deflection: (0.0, 0.0),
        }
    }

    /// Finger down on the pad.
    pub fn begin(&mut self) {
        self.active = true;
        self.deflection = (0.0, 0.0);
    }

    /// Finger moved; offsets are pixels from the pad center.
    pub fn drag(&mut self, dx: f32, dy: f32) {
        if !self.active || self.radius <= 0.0 {
            return;
        }
        self.deflection = (dx / self.radius, dy / self.radius);
    }

    /// Finger lifted. All directions release.
    pub fn end(&mut self) {
        self.active = false;
        self.deflection = (0.0, 0.0);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn deflection(&self) -> (f32, f32) {
        self.deflection
    }

    /// Held directions implied by the current deflection.
    pub fn movement(&self) -> MovementKeys {
        if !self.active {
            return MovementKeys::new();
        }
        let (x, y) = self.deflection;
        MovementKeys {
            forward: y < -JOYSTICK_THRESHOLD,
            backward: y > JOYSTICK_THRESHOLD,
            left: x < -JOYSTICK_THRESHOLD,
            right: x > JOYSTICK_THRESHOLD,
        }
    }
}

impl Default for TouchJoystick {
    fn default() -> Self {
        Self::new(60.0)
    }
}

/// Tracks a look swipe and accumulates its horizontal travel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchSwipe {
    last_x: Option<f32>,
    pending_dx: f32,
}

impl TouchSwipe {
    pub fn begin(&mut self, x: f32) {
        self.last_x = Some(x);
    }

    pub fn drag(&mut self, x: f32) {
        if let Some(last) = self.last_x {
            self.pending_dx += x - last;
            self.last_x = Some(x);
        }
    }

    pub fn end(&mut self) {
        self.last_x = None;
    }

    /// Horizontal pixels swiped since the last call.
    pub fn take_dx(&mut self) -> f32 {
        std::mem::take(&mut self.pending_dx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joystick_dead_zone() {
        let mut stick = TouchJoystick::new(50.0);
        stick.begin();
        stick.drag(10.0, -10.0); // 0.2 each way
        assert!(!stick.movement().any_pressed());
    }

    #[test]
    fn test_joystick_up_is_forward() {
        let mut stick = TouchJoystick::new(50.0);
        stick.begin();
        stick.drag(20.0, -40.0);
        let keys = stick.movement();
        assert!(keys.forward);
        assert!(keys.right);
        assert!(!keys.backward);
        assert!(!keys.left);
    }

    #[test]
    fn test_joystick_release_clears() {
        let mut stick = TouchJoystick::new(50.0);
        stick.begin();
        stick.drag(0.0, 50.0);
        assert!(stick.movement().backward);
        stick.end();
        assert_eq!(stick.movement(), MovementKeys::new());
    }

    #[test]
    fn test_drag_ignored_when_inactive() {
        let mut stick = TouchJoystick::new(50.0);
        stick.drag(-50.0, 0.0);
        assert_eq!(stick.deflection(), (0.0, 0.0));
    }

    #[test]
    fn test_swipe_accumulates() {
        let mut swipe = TouchSwipe::default();
        swipe.drag(500.0); // no begin yet
        swipe.begin(100.0);
        swipe.drag(110.0);
        swipe.drag(125.0);
        assert_eq!(swipe.take_dx(), 25.0);
        assert_eq!(swipe.take_dx(), 0.0);
    }
}
