//! Collision system - ray and probe queries over tagged bodies.
//!
//! Wraps the low-level primitives from [`crate::physics`] into operations that
//! run against a whole set of bodies in one call. Pure game logic, no state.

use crate::game::types::{BodyRef, RayHit};
use crate::physics::{OrientedBox, Probe, ProbeProfile, Ray};

/// Stateless collision system that delegates to the physics primitives.
pub struct CollisionSystem;

impl CollisionSystem {
    /// Nearest intersection along `ray` among `bodies`.
    ///
    /// Ties keep the body that came first.
    pub fn nearest_hit(
        ray: &Ray,
        bodies: impl IntoIterator<Item = (BodyRef, OrientedBox)>,
    ) -> Option<RayHit> {
        let mut nearest: Option<RayHit> = None;

        for (body, shape) in bodies {
            let Some(hit) = shape.ray_intersect(ray) else {
                continue;
            };
            if nearest.is_none_or(|best| hit.distance < best.distance) {
                nearest = Some(RayHit {
                    body,
                    distance: hit.distance,
                    point: hit.point,
                });
            }
        }

        nearest
    }

    /// True if `probe` touches any obstacle under `profile`.
    pub fn probe_blocked(probe: Probe, profile: &ProbeProfile, obstacles: &[OrientedBox]) -> bool {
        profile.hits_any(probe, obstacles)
    }
}
