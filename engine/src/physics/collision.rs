//! Collision detection module
//!
//! Ray primitives shared by the movement probes and the weapon hitscan.
//! Boxes are oriented (center, Euler rotation, half-extents); a ray is tested
//! against an oriented box by moving it into the box's local frame and running
//! the slab test there.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used for ray-AABB intersection, which finds the
//! intersection points by computing entry and exit times for each axis.
//!
//! # Example
//!
//! ```ignore
//! use shooting_range_engine::physics::collision::{OrientedBox, Ray};
//! use glam::Vec3;
//!
//! let wall = OrientedBox::from_size(Vec3::new(0.0, 2.5, -10.0), Vec3::new(10.0, 5.0, 1.0));
//! let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Z);
//!
//! if let Some(hit) = wall.ray_intersect(&ray) {
//!     println!("Hit at distance {}: {:?}", hit.distance, hit.point);
//! }
//! ```

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A half-line with a normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit direction, or zero for a degenerate ray that hits nothing
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray, normalizing `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at distance `t` along the ray.
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// True when the direction could not be normalized.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.direction == Vec3::ZERO
    }
}

/// Result of a ray hitting a box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxHit {
    /// Distance from ray origin to hit point
    pub distance: f32,
    /// World-space position where the ray met the surface
    pub point: Vec3,
    /// Outward surface normal at the hit point (world space, normalized)
    pub normal: Vec3,
}

/// Performs ray-AABB (Axis-Aligned Bounding Box) intersection test using the slab method.
///
/// The slab method works by finding the intersection of the ray with each pair of
/// axis-aligned planes that make up the AABB. If the ray enters and exits the AABB
/// at valid times (t_enter < t_exit and t_exit > 0), there is an intersection.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the intersection point (t >= 0).
///   When the origin is inside the box this is the distance to the exit face.
/// * `None` - No intersection or intersection is behind the ray origin
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    if ray_dir == Vec3::ZERO {
        return None;
    }

    // Near-zero components get a huge inverse so the slab for that axis
    // becomes (-inf, inf) when inside it and empty when outside.
    let inv = |d: f32| {
        if d.abs() > 1e-10 {
            1.0 / d
        } else {
            f32::MAX * if d.is_sign_negative() { -1.0 } else { 1.0 }
        }
    };
    let inv_dir = Vec3::new(inv(ray_dir.x), inv(ray_dir.y), inv(ray_dir.z));

    let t1 = (aabb_min - ray_origin) * inv_dir;
    let t2 = (aabb_max - ray_origin) * inv_dir;

    let t_min = t1.min(t2).max_element();
    let t_max = t1.max(t2).min_element();

    if t_max >= t_min && t_max >= 0.0 {
        if t_min >= 0.0 {
            Some(t_min)
        } else {
            // Ray starts inside the AABB
            Some(t_max)
        }
    } else {
        None
    }
}

/// Computes the surface normal for a point on an AABB surface.
///
/// Determines which face of the AABB the point is on and returns the outward normal.
pub fn aabb_surface_normal(point: Vec3, aabb_min: Vec3, aabb_max: Vec3) -> Vec3 {
    let center = (aabb_min + aabb_max) * 0.5;
    let half_extents = ((aabb_max - aabb_min) * 0.5).max(Vec3::splat(f32::EPSILON));
    let normalized = (point - center) / half_extents;

    // Closest face = highest absolute normalized coordinate
    let abs_normalized = normalized.abs();

    if abs_normalized.x >= abs_normalized.y && abs_normalized.x >= abs_normalized.z {
        Vec3::new(normalized.x.signum(), 0.0, 0.0)
    } else if abs_normalized.y >= abs_normalized.x && abs_normalized.y >= abs_normalized.z {
        Vec3::new(0.0, normalized.y.signum(), 0.0)
    } else {
        Vec3::new(0.0, 0.0, normalized.z.signum())
    }
}

// =============================================================================
// OrientedBox - walls, targets and the ground slab
// =============================================================================

/// A box with arbitrary orientation.
///
/// Rotation is stored as XYZ Euler angles (radians) so that animation code can
/// spin a box by adding to individual axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrientedBox {
    /// World-space center
    pub center: Vec3,
    /// Euler angles in radians, applied in XYZ order
    #[serde(default)]
    pub rotation: Vec3,
    /// Half the box size along each local axis
    pub half_extents: Vec3,
}

impl OrientedBox {
    /// Axis-aligned box from center and half-extents.
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            rotation: Vec3::ZERO,
            half_extents,
        }
    }

    /// Axis-aligned box from center and full size.
    pub fn from_size(center: Vec3, size: Vec3) -> Self {
        Self::new(center, size * 0.5)
    }

    /// Returns the box with the given Euler rotation.
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Orientation as a quaternion.
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Returns a copy uniformly scaled about its center.
    pub fn scaled(&self, scale: f32) -> Self {
        Self {
            half_extents: self.half_extents * scale,
            ..*self
        }
    }

    /// Euclidean distance between centers, used as a broad-phase prune.
    #[inline]
    pub fn center_distance(&self, point: Vec3) -> f32 {
        self.center.distance(point)
    }

    /// True when `point` lies inside the box or on its surface.
    pub fn contains_point(&self, point: Vec3) -> bool {
        let local = self.orientation().inverse() * (point - self.center);
        local.abs().cmple(self.half_extents).all()
    }

    /// Intersects a ray with the box surface.
    ///
    /// Rotation preserves length, so the local-space hit distance is also the
    /// world-space distance.
    pub fn ray_intersect(&self, ray: &Ray) -> Option<BoxHit> {
        if ray.is_degenerate() {
            return None;
        }

        let orientation = self.orientation();
        let inverse = orientation.inverse();
        let local_origin = inverse * (ray.origin - self.center);
        let local_dir = inverse * ray.direction;

        let t = ray_aabb_intersect(local_origin, local_dir, -self.half_extents, self.half_extents)?;
        let local_point = local_origin + local_dir * t;
        let local_normal = aabb_surface_normal(local_point, -self.half_extents, self.half_extents);

        Some(BoxHit {
            distance: t,
            point: ray.at(t),
            normal: (orientation * local_normal).normalize_or_zero(),
        })
    }

    /// Nearest hit distance along `ray`, if any.
    #[inline]
    pub fn ray_distance(&self, ray: &Ray) -> Option<f32> {
        self.ray_intersect(ray).map(|hit| hit.distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_ray_hits_aabb_from_front() {
        let origin = Vec3::new(0.0, 0.0, -5.0);
        let dir = Vec3::new(0.0, 0.0, 1.0);
        let aabb_min = Vec3::new(-1.0, -1.0, -1.0);
        let aabb_max = Vec3::new(1.0, 1.0, 1.0);

        let t = ray_aabb_intersect(origin, dir, aabb_min, aabb_max).expect("should hit");
        assert!((t - 4.0).abs() < 0.001, "Expected t=4.0, got t={}", t);
    }

    #[test]
    fn test_ray_misses_aabb() {
        let origin = Vec3::new(0.0, 5.0, -5.0);
        let dir = Vec3::new(0.0, 0.0, 1.0);
        let result = ray_aabb_intersect(origin, dir, Vec3::splat(-1.0), Vec3::splat(1.0));
        assert!(result.is_none());
    }

    #[test]
    fn test_ray_starts_inside_aabb() {
        let t = ray_aabb_intersect(Vec3::ZERO, Vec3::Z, Vec3::splat(-1.0), Vec3::splat(1.0))
            .expect("should hit exit face");
        assert!((t - 1.0).abs() < 0.001, "Expected t=1.0, got t={}", t);
    }

    #[test]
    fn test_ray_aabb_behind_origin() {
        let origin = Vec3::new(0.0, 0.0, 5.0);
        let result = ray_aabb_intersect(origin, Vec3::Z, Vec3::splat(-1.0), Vec3::splat(1.0));
        assert!(result.is_none());
    }

    #[test]
    fn test_zero_direction_never_hits() {
        let result = ray_aabb_intersect(Vec3::ZERO, Vec3::ZERO, Vec3::splat(-1.0), Vec3::splat(1.0));
        assert!(result.is_none());
    }

    #[test]
    fn test_axis_parallel_ray_outside_slab() {
        // Horizontal ray above the box never enters the Y slab
        let origin = Vec3::new(-5.0, 2.0, 0.0);
        let result = ray_aabb_intersect(origin, Vec3::X, Vec3::splat(-1.0), Vec3::splat(1.0));
        assert!(result.is_none());
    }

    #[test]
    fn test_surface_normal_faces() {
        let aabb_min = Vec3::splat(-1.0);
        let aabb_max = Vec3::splat(1.0);

        assert_eq!(aabb_surface_normal(Vec3::new(1.0, 0.0, 0.0), aabb_min, aabb_max), Vec3::X);
        assert_eq!(aabb_surface_normal(Vec3::new(0.0, -1.0, 0.0), aabb_min, aabb_max), Vec3::NEG_Y);
        assert_eq!(aabb_surface_normal(Vec3::new(0.2, 0.1, 1.0), aabb_min, aabb_max), Vec3::Z);
    }

    #[test]
    fn test_ray_new_normalizes() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0));
        assert!((ray.direction.length() - 1.0).abs() < 1e-6);
        assert!((ray.at(5.0) - Vec3::new(3.0, 0.0, 4.0)).length() < 1e-5);
    }

    #[test]
    fn test_oriented_box_axis_aligned_hit() {
        let wall = OrientedBox::from_size(Vec3::new(0.0, 2.5, -10.0), Vec3::new(10.0, 5.0, 1.0));
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::NEG_Z);

        let hit = wall.ray_intersect(&ray).expect("wall in front");
        assert!((hit.distance - 9.5).abs() < 1e-4);
        assert!((hit.normal - Vec3::Z).length() < 1e-4);
    }

    #[test]
    fn test_oriented_box_rotated_thin_side() {
        // A 10x5x1 wall turned 90 degrees about Y is 1 unit wide along X
        let wall = OrientedBox::from_size(Vec3::new(15.0, 2.5, 0.0), Vec3::new(10.0, 5.0, 1.0))
            .with_rotation(Vec3::new(0.0, FRAC_PI_2, 0.0));
        let ray = Ray::new(Vec3::new(10.0, 2.0, 0.0), Vec3::X);

        let hit = wall.ray_intersect(&ray).expect("rotated wall in the way");
        assert!((hit.distance - 4.5).abs() < 1e-3, "got {}", hit.distance);
        assert!((hit.normal - Vec3::NEG_X).length() < 1e-3);

        // Along its long side it now spans z in [-5, 5]
        let side_ray = Ray::new(Vec3::new(15.0, 2.0, 8.0), Vec3::NEG_Z);
        let side_hit = wall.ray_intersect(&side_ray).expect("long side");
        assert!((side_hit.distance - 3.0).abs() < 1e-3, "got {}", side_hit.distance);
    }

    #[test]
    fn test_contains_point_respects_rotation() {
        let wall = OrientedBox::from_size(Vec3::new(15.0, 2.5, 0.0), Vec3::new(10.0, 5.0, 1.0))
            .with_rotation(Vec3::new(0.0, FRAC_PI_2, 0.0));

        assert!(wall.contains_point(Vec3::new(15.0, 2.5, 0.0)));
        assert!(wall.contains_point(Vec3::new(15.2, 1.0, 4.5)));
        // Unrotated it would reach x = 20; turned, it is only 1 unit thick
        assert!(!wall.contains_point(Vec3::new(18.0, 2.5, 0.0)));
        assert!(!wall.contains_point(Vec3::new(15.0, 6.0, 0.0)));
    }

    #[test]
    fn test_scaled_box_shrinks() {
        let target = OrientedBox::from_size(Vec3::ZERO, Vec3::ONE);
        let small = target.scaled(0.8);
        assert!((small.half_extents - Vec3::splat(0.4)).length() < 1e-6);
        assert_eq!(small.center, target.center);
    }
}
