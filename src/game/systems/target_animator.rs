//! Target animator - bobs and spins the targets every frame.

use crate::game::config::AnimatorConfig;
use crate::game::types::Target;
use crate::physics::{ObstacleQuery, OrientedBox, ProbeProfile};

/// Per-frame target motion. Holds only tuning; targets live in the arena.
#[derive(Debug, Clone)]
pub struct TargetAnimator {
    config: AnimatorConfig,
    /// Probe radius and profile for the wall check
    radius: f32,
    profile: ProbeProfile,
}

impl TargetAnimator {
    pub fn new(config: AnimatorConfig, radius: f32, profile: ProbeProfile) -> Self {
        Self {
            config,
            radius,
            profile,
        }
    }

    /// Oscillation speed of the target created at `index`.
    pub fn speed_for(&self, index: usize) -> f32 {
        self.config.base_speed + index as f32 * self.config.speed_step
    }

    /// Advance every target by one frame.
    ///
    /// The vertical step is `sin(elapsed * speed) * amplitude`. A target that
    /// sinks below the floor snaps back up; a target that would touch a wall
    /// keeps its previous position. Rotation advances either way.
    pub fn update(&self, delta_time: f32, elapsed: f32, targets: &mut [Target], walls: &[OrientedBox]) {
        if !delta_time.is_finite() || delta_time <= 0.0 {
            return;
        }

        for target in targets.iter_mut() {
            self.animate(target, delta_time, elapsed, walls);
        }
    }

    fn animate(
        &self,
        target: &mut Target,
        delta_time: f32,
        elapsed: f32,
        obstacles: &(impl ObstacleQuery + ?Sized),
    ) {
        let previous = target.position;
        let speed = self.speed_for(target.index);

        target.position.y += (elapsed * speed).sin() * self.config.bob_amplitude;
        if target.position.y - target.half_height() < self.config.min_bottom {
            target.position.y = self.config.recover_height;
        }

        if obstacles.probe_collides(target.probe(self.radius), &self.profile) {
            target.position = previous;
        }

        target.rotation.x += delta_time * self.config.spin.x;
        target.rotation.y += delta_time * self.config.spin.y;
        target.rotation.z += delta_time * self.config.spin.z;
    }
}
