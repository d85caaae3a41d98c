//! Shared Types Module
//!
//! Identifiers, body tags and the small value types passed between the
//! arena, the weapon and the scene.

use std::fmt;

use glam::Vec3;

use crate::physics::{OrientedBox, Probe};

// ============================================================================
// IDENTIFIERS
// ============================================================================

/// Stable identifier of a target. Targets are repositioned, never destroyed,
/// so an id stays valid for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "target#{}", self.0)
    }
}

/// Identifier of a live muzzle flash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlashId(pub u64);

// ============================================================================
// BODY TAGS
// ============================================================================

/// What role a body plays in the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyKind {
    /// Blocks movement and shots
    Obstacle,
    /// Can be shot
    Target,
    /// Only stops shots (the ground)
    Decoration,
}

/// Which body a ray hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BodyRef {
    /// Index into the arena's wall list
    Wall(usize),
    Target(TargetId),
    Ground,
}

impl BodyRef {
    pub fn kind(&self) -> BodyKind {
        match self {
            BodyRef::Wall(_) => BodyKind::Obstacle,
            BodyRef::Target(_) => BodyKind::Target,
            BodyRef::Ground => BodyKind::Decoration,
        }
    }

    pub fn target_id(&self) -> Option<TargetId> {
        match self {
            BodyRef::Target(id) => Some(*id),
            _ => None,
        }
    }
}

/// Nearest body along a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub body: BodyRef,
    pub distance: f32,
    pub point: Vec3,
}

// ============================================================================
// TARGET
// ============================================================================

/// A floating box the player shoots at.
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub id: TargetId,
    /// Creation order; drives the oscillation speed
    pub index: usize,
    pub position: Vec3,
    /// Euler angles (XYZ, radians)
    pub rotation: Vec3,
    /// Uniform scale; dips briefly when hit
    pub scale: f32,
    /// Full edge length at scale 1
    pub size: f32,
    /// Bumped on every hit so an older restore cannot end a newer pulse
    pub pulse: u32,
}

impl Target {
    pub fn new(id: TargetId, index: usize, position: Vec3, size: f32) -> Self {
        Self {
            id,
            index,
            position,
            rotation: Vec3::ZERO,
            scale: 1.0,
            size,
            pulse: 0,
        }
    }

    /// Shrink to `scale` for a hit pulse. Returns the pulse to restore later.
    pub fn begin_pulse(&mut self, scale: f32) -> u32 {
        self.pulse = self.pulse.wrapping_add(1);
        self.scale = scale;
        self.pulse
    }

    /// Back to full scale, unless a later hit started a newer pulse.
    pub fn end_pulse(&mut self, pulse: u32) -> bool {
        if pulse != self.pulse {
            return false;
        }
        self.scale = 1.0;
        true
    }

    /// Current shootable volume.
    pub fn bounds(&self) -> OrientedBox {
        OrientedBox::from_size(self.position, Vec3::splat(self.size))
            .with_rotation(self.rotation)
            .scaled(self.scale)
    }

    pub fn probe(&self, radius: f32) -> Probe {
        Probe::new(self.position, radius)
    }

    /// Distance from the center to the bottom face at rest.
    pub fn half_height(&self) -> f32 {
        self.size * 0.5
    }
}

/// Outcome of placing or respawning a target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Where the target ended up
    pub position: Vec3,
    /// Number of candidate positions drawn (1 when the first one fit)
    pub attempts: u32,
    /// False when every attempt collided and the last draw was kept
    pub collision_free: bool,
}

/// Short-lived point light in front of the view after a shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MuzzleFlash {
    pub id: FlashId,
    pub position: Vec3,
    /// 0xRRGGBB
    pub color: u32,
    pub intensity: f32,
    pub range: f32,
}
