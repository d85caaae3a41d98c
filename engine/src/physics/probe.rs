//! Ray-probe proximity checks
//!
//! A probe is a point plus a radius. Instead of exact shape-vs-box overlap, a
//! probe casts a small fixed fan of rays from its center and reports a collision
//! when any ray meets an obstacle surface closer than the radius.
//!
//! Approximate: anything that slips between two rays of the
//! fan is missed. Obstacles whose center is farther than the profile's cutoff are
//! skipped before any ray is cast, unless the probe center is already inside
//! one.

use std::f32::consts::FRAC_1_SQRT_2;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::collision::{OrientedBox, Ray};

/// Eight horizontal directions, 45 degrees apart.
pub const HORIZONTAL_RING_DIRECTIONS: [Vec3; 8] = [
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(-1.0, 0.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.0, 0.0, -1.0),
    Vec3::new(FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2),
    Vec3::new(FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2),
    Vec3::new(-FRAC_1_SQRT_2, 0.0, FRAC_1_SQRT_2),
    Vec3::new(-FRAC_1_SQRT_2, 0.0, -FRAC_1_SQRT_2),
];

/// The six axis directions.
pub const AXIS_DIRECTIONS: [Vec3; 6] = [
    Vec3::X,
    Vec3::NEG_X,
    Vec3::Y,
    Vec3::NEG_Y,
    Vec3::Z,
    Vec3::NEG_Z,
];

/// Which fan of rays a probe casts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbePattern {
    /// 8 rays in the horizontal plane (walking bodies)
    HorizontalRing,
    /// 6 axis-aligned rays (floating bodies)
    AxisAligned,
}

impl ProbePattern {
    pub fn directions(&self) -> &'static [Vec3] {
        match self {
            ProbePattern::HorizontalRing => &HORIZONTAL_RING_DIRECTIONS,
            ProbePattern::AxisAligned => &AXIS_DIRECTIONS,
        }
    }
}

/// Tuning for one kind of probe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbeProfile {
    pub pattern: ProbePattern,
    /// Broad-phase center distance beyond which an obstacle is ignored
    pub cutoff: f32,
    /// Extra slack added to the probe radius
    pub epsilon: f32,
}

impl ProbeProfile {
    /// Player probe: horizontal ring, 6 unit cutoff, no slack.
    pub const PLAYER: Self = Self {
        pattern: ProbePattern::HorizontalRing,
        cutoff: 6.0,
        epsilon: 0.0,
    };

    /// Target probe: axis rays, 8 unit cutoff, a little slack.
    pub const TARGET: Self = Self {
        pattern: ProbePattern::AxisAligned,
        cutoff: 8.0,
        epsilon: 0.05,
    };

    /// Tests one obstacle, including the broad-phase cutoff.
    ///
    /// A probe whose center is inside the obstacle always collides, however
    /// far away the obstacle's center is.
    pub fn hits_box(&self, probe: Probe, obstacle: &OrientedBox) -> bool {
        if obstacle.contains_point(probe.position) {
            return true;
        }
        if obstacle.center_distance(probe.position) >= self.cutoff {
            return false;
        }

        let reach = probe.radius + self.epsilon;
        self.pattern.directions().iter().any(|&dir| {
            obstacle
                .ray_distance(&Ray::new(probe.position, dir))
                .is_some_and(|distance| distance < reach)
        })
    }

    /// Tests a set of obstacles. An empty set never collides.
    pub fn hits_any<'a>(
        &self,
        probe: Probe,
        obstacles: impl IntoIterator<Item = &'a OrientedBox>,
    ) -> bool {
        obstacles.into_iter().any(|obstacle| self.hits_box(probe, obstacle))
    }
}

/// A collision probe: center point and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe {
    pub position: Vec3,
    pub radius: f32,
}

impl Probe {
    pub fn new(position: Vec3, radius: f32) -> Self {
        Self { position, radius }
    }
}

/// Anything that can answer "is this probe blocked?".
///
/// The movement controller and target animator only see this trait, so they
/// can be driven by the arena or by a bare slice of boxes in tests.
pub trait ObstacleQuery {
    fn probe_collides(&self, probe: Probe, profile: &ProbeProfile) -> bool;
}

impl ObstacleQuery for [OrientedBox] {
    fn probe_collides(&self, probe: Probe, profile: &ProbeProfile) -> bool {
        profile.hits_any(probe, self)
    }
}

impl ObstacleQuery for Vec<OrientedBox> {
    fn probe_collides(&self, probe: Probe, profile: &ProbeProfile) -> bool {
        self.as_slice().probe_collides(probe, profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall() -> OrientedBox {
        OrientedBox::from_size(Vec3::new(0.0, 2.5, -10.0), Vec3::new(10.0, 5.0, 1.0))
    }

    #[test]
    fn test_ring_directions_are_unit_and_horizontal() {
        for dir in HORIZONTAL_RING_DIRECTIONS {
            assert!((dir.length() - 1.0).abs() < 1e-5);
            assert_eq!(dir.y, 0.0);
        }
    }

    #[test]
    fn test_probe_near_wall_collides() {
        // Wall front face at z = -9.5, probe 0.4 away
        let probe = Probe::new(Vec3::new(0.0, 2.0, -9.1), 0.5);
        assert!(ProbeProfile::PLAYER.hits_box(probe, &wall()));
    }

    #[test]
    fn test_probe_clear_of_wall() {
        let probe = Probe::new(Vec3::new(0.0, 2.0, -8.5), 0.5);
        assert!(!ProbeProfile::PLAYER.hits_box(probe, &wall()));
    }

    #[test]
    fn test_cutoff_skips_far_obstacle() {
        // Long wall: the probe is touching its end but the center is 7 units away
        let long_wall = OrientedBox::from_size(Vec3::new(0.0, 2.5, 0.0), Vec3::new(20.0, 5.0, 1.0));
        let probe = Probe::new(Vec3::new(7.0, 2.0, 0.8), 0.5);

        let near_profile = ProbeProfile { cutoff: 100.0, ..ProbeProfile::PLAYER };
        assert!(near_profile.hits_box(probe, &long_wall));
        assert!(!ProbeProfile::PLAYER.hits_box(probe, &long_wall));
    }

    #[test]
    fn test_center_inside_obstacle_collides() {
        // Every ray would exit 6+ units away, well past the radius
        let slab = OrientedBox::from_size(Vec3::new(0.0, 3.5, -7.0), Vec3::new(26.0, 5.0, 12.0));
        let at_center = Probe::new(slab.center, 0.5);
        assert!(ProbeProfile::TARGET.hits_box(at_center, &slab));
        assert!(ProbeProfile::PLAYER.hits_box(at_center, &slab));

        // Inside, with the center beyond the cutoff
        let far_corner = Probe::new(Vec3::new(12.0, 2.0, -12.0), 0.5);
        assert!(slab.center_distance(far_corner.position) > ProbeProfile::TARGET.cutoff);
        assert!(ProbeProfile::TARGET.hits_box(far_corner, &slab));
    }

    #[test]
    fn test_empty_set_never_collides() {
        let obstacles: Vec<OrientedBox> = Vec::new();
        let probe = Probe::new(Vec3::ZERO, 100.0);
        assert!(!obstacles.probe_collides(probe, &ProbeProfile::PLAYER));
    }

    #[test]
    fn test_axis_probe_sees_obstacle_above() {
        // Only the +Y ray can reach a ceiling directly overhead
        let ceiling = OrientedBox::from_size(Vec3::new(0.0, 3.0, 0.0), Vec3::new(4.0, 1.0, 4.0));
        let probe = Probe::new(Vec3::new(0.0, 2.1, 0.0), 0.5);

        assert!(ProbeProfile::TARGET.hits_box(probe, &ceiling));
        assert!(!ProbeProfile::PLAYER.hits_box(probe, &ceiling));
    }

    #[test]
    fn test_target_epsilon_extends_reach() {
        // Face at z = -9.5, probe 0.52 away: outside radius, inside radius + epsilon
        let probe = Probe::new(Vec3::new(0.0, 2.0, -8.98), 0.5);
        assert!(ProbeProfile::TARGET.hits_box(probe, &wall()));
        assert!(!ProbeProfile::PLAYER.hits_box(probe, &wall()));
    }
}
