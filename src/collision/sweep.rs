//! Sweep shapes and hit records for collision queries.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Maximum number of hits a single sweep reports.
///
/// Contacts beyond this are silently dropped; simultaneous contact counts
/// this high only occur in degenerate geometry.
pub const MAX_SWEEP_HITS: usize = 16;

/// A single contact reported by a sweep.
///
/// `distance` is how far the shape traveled along the cast direction before
/// touching the surface. `normal` is the outward normal of the struck
/// surface, pointing back toward the moving shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepHit {
    /// Travel distance along the cast direction at the moment of contact.
    pub distance: f32,

    /// Outward surface normal at the contact point.
    pub normal: Vec2,
}

/// Shape used for collision sweeps.
///
/// Positions passed to the collision world refer to the shape's center in
/// world space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum SweepShape {
    /// A vertical capsule (pill shape).
    ///
    /// The usual choice for characters - the rounded bottom slides over
    /// small ledges and slope breaks without snagging.
    Capsule {
        /// Radius of the capsule body and end caps.
        radius: f32,
        /// Total height from the bottom of the lower cap to the top of the
        /// upper cap.
        height: f32,
    },

    /// An axis-aligned box, defined by half-extents from the center.
    Box { half_extents: Vec2 },
}

impl SweepShape {
    /// Default player capsule.
    pub const PLAYER: Self = Self::Capsule {
        radius: 0.3,
        height: 1.0,
    };

    /// Effective horizontal radius of this shape.
    pub fn radius(&self) -> f32 {
        match self {
            Self::Capsule { radius, .. } => *radius,
            Self::Box { half_extents } => half_extents.x,
        }
    }

    /// Total height of this shape.
    pub fn height(&self) -> f32 {
        match self {
            Self::Capsule { height, .. } => *height,
            Self::Box { half_extents } => half_extents.y * 2.0,
        }
    }
}

impl Default for SweepShape {
    fn default() -> Self {
        Self::PLAYER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_dimensions() {
        let capsule = SweepShape::Capsule {
            radius: 0.4,
            height: 1.8,
        };
        assert_eq!(capsule.radius(), 0.4);
        assert_eq!(capsule.height(), 1.8);

        let boxy = SweepShape::Box {
            half_extents: Vec2::new(0.5, 0.75),
        };
        assert_eq!(boxy.radius(), 0.5);
        assert_eq!(boxy.height(), 1.5);
    }
}
