//! Content flags for collision filtering.
//!
//! These flags determine which brushes a sweep collides with. A moving body
//! carries a mask; brushes whose contents don't intersect the mask are
//! skipped during the sweep.

use serde::{Deserialize, Serialize};

/// Content flags describe what type of volume a brush is.
///
/// Used to filter sweeps - physics movement ignores triggers, hazard
/// detection ignores clip brushes, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ContentFlags(pub u32);

impl ContentFlags {
    /// Empty space - nothing here.
    pub const EMPTY: Self = Self(0);

    /// Solid world geometry - ground, walls, platforms.
    pub const SOLID: Self = Self(1 << 0);

    /// Water volume - affects movement but is not solid.
    pub const WATER: Self = Self(1 << 1);

    /// Player clip - blocks player bodies but nothing else.
    pub const PLAYER_CLIP: Self = Self(1 << 2);

    /// Trigger volume - activates events when entered, never blocks.
    pub const TRIGGER: Self = Self(1 << 3);

    /// Hazard volume - deals damage on contact (spikes, lava).
    pub const HAZARD: Self = Self(1 << 4);

    /// Standard mask for player movement sweeps.
    pub const MASK_PLAYER_SOLID: Self = Self(Self::SOLID.0 | Self::PLAYER_CLIP.0);

    /// Check if these flags contain a specific flag.
    #[inline]
    pub fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check if any of the given flags are set.
    #[inline]
    pub fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    /// Combine two flag sets.
    #[inline]
    pub fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Remove flags from this set.
    #[inline]
    pub fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl std::ops::BitOr for ContentFlags {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitAnd for ContentFlags {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_flags_operations() {
        let solid = ContentFlags::SOLID;
        let water = ContentFlags::WATER;
        let combined = solid | water;

        assert!(combined.contains(solid));
        assert!(combined.contains(water));
        assert!(!combined.contains(ContentFlags::HAZARD));
        assert!(combined.intersects(solid));
        assert_eq!(combined.difference(water), solid);
    }

    #[test]
    fn test_player_mask() {
        let mask = ContentFlags::MASK_PLAYER_SOLID;
        assert!(mask.contains(ContentFlags::SOLID));
        assert!(mask.contains(ContentFlags::PLAYER_CLIP));
        assert!(!mask.contains(ContentFlags::TRIGGER));
        assert!(!mask.contains(ContentFlags::WATER));
    }
}
