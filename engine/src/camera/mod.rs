//! Camera Module
//!
//! The first-person viewpoint. Window-system agnostic - it only deals with
//! camera state and math.

pub mod fps_controller;

pub use fps_controller::{FPSCameraController, TOUCH_LOOK_SENSITIVITY};
