//! Collision world containing all collidable geometry.
//!
//! The collision world stores brushes (boxes and convex polygons) and
//! answers swept-shape queries against them.

use glam::Vec2;
use parry2d::math::{Isometry, Point, Real, Vector};
use parry2d::query;
use parry2d::shape::{Capsule, Cuboid, Shape, SharedShape};

use super::flags::ContentFlags;
use super::sweep::{SweepHit, SweepShape};

/// A piece of collision geometry in the world.
#[derive(Clone)]
pub struct CollisionBrush {
    /// Unique identifier for this brush.
    pub id: u32,
    /// The collision shape.
    pub shape: SharedShape,
    /// Position in world space. Brush poses are translation-only; sloped
    /// surfaces are expressed as convex polygons with world-space vertices.
    pub position: Isometry<Real>,
    /// Content flags for sweep filtering.
    pub contents: ContentFlags,
}

/// The collision world containing all geometry.
///
/// Immutable during simulation stepping - levels build the world up front,
/// bodies only query it.
#[derive(Default)]
pub struct CollisionWorld {
    brushes: Vec<CollisionBrush>,
    next_id: u32,
}

impl CollisionWorld {
    /// Create an empty collision world.
    pub fn new() -> Self {
        Self {
            brushes: Vec::new(),
            next_id: 0,
        }
    }

    /// Add an axis-aligned box to the world.
    ///
    /// # Arguments
    ///
    /// * `center` - Center position of the box in world space
    /// * `half_extents` - Half-size in each axis
    /// * `contents` - Content flags for sweep filtering
    pub fn add_box(&mut self, center: Vec2, half_extents: Vec2, contents: ContentFlags) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        self.brushes.push(CollisionBrush {
            id,
            shape: SharedShape::cuboid(half_extents.x, half_extents.y),
            position: Isometry::translation(center.x, center.y),
            contents,
        });

        id
    }

    /// Add a convex polygon to the world (slopes, ramps).
    ///
    /// Vertices are given in world space. Returns `None` if the points do
    /// not form a valid convex hull.
    pub fn add_convex_polygon(&mut self, points: &[Vec2], contents: ContentFlags) -> Option<u32> {
        let parry_points: Vec<Point<Real>> =
            points.iter().map(|p| Point::new(p.x, p.y)).collect();

        let shape = SharedShape::convex_hull(&parry_points)?;

        let id = self.next_id;
        self.next_id += 1;

        self.brushes.push(CollisionBrush {
            id,
            shape,
            position: Isometry::identity(),
            contents,
        });

        Some(id)
    }

    /// Remove all collision geometry.
    pub fn clear(&mut self) {
        self.brushes.clear();
    }

    /// Get the number of collision brushes.
    pub fn brush_count(&self) -> usize {
        self.brushes.len()
    }

    /// Sweep a shape through the world.
    ///
    /// Casts `shape` from `origin` along the unit `direction` for up to
    /// `max_distance`, against every brush whose contents intersect `mask`.
    /// Hits are written into `hits` sorted by ascending distance; the count
    /// is returned. Each brush contributes at most one hit, and a brush
    /// behind another still reports its own contact - occlusion between
    /// brushes is not resolved. Contacts beyond the buffer capacity are
    /// dropped, farthest first.
    pub fn sweep(
        &self,
        shape: &SweepShape,
        origin: Vec2,
        direction: Vec2,
        max_distance: f32,
        mask: ContentFlags,
        hits: &mut [SweepHit],
    ) -> usize {
        if hits.is_empty() || direction.length_squared() < 1e-8 {
            return 0;
        }

        let pos = Isometry::translation(origin.x, origin.y);
        let cast_vel = Vector::new(direction.x, direction.y);
        let rest = Vector::zeros();

        // Concrete parry shapes live on the stack for the duration of the
        // sweep; only the enum dispatch differs per call.
        let capsule;
        let cuboid;
        let moving: &dyn Shape = match *shape {
            SweepShape::Capsule { radius, height } => {
                let half_segment = (height - 2.0 * radius).max(0.0) * 0.5;
                capsule = Capsule::new(
                    Point::new(0.0, -half_segment),
                    Point::new(0.0, half_segment),
                    radius,
                );
                &capsule
            }
            SweepShape::Box { half_extents } => {
                cuboid = Cuboid::new(Vector::new(half_extents.x, half_extents.y));
                &cuboid
            }
        };

        let mut count = 0;
        for brush in &self.brushes {
            if !mask.intersects(brush.contents) {
                continue;
            }

            let toi = match query::time_of_impact(
                &pos,
                &cast_vel,
                moving,
                &brush.position,
                &rest,
                brush.shape.as_ref(),
                max_distance,
                true,
            ) {
                Ok(Some(toi)) => toi,
                _ => continue,
            };

            // Brush poses are translation-only, so the local-frame normal is
            // already a world-space direction.
            let hit = SweepHit {
                distance: toi.toi,
                normal: Vec2::new(toi.normal2.x, toi.normal2.y),
            };

            if count == hits.len() {
                if hit.distance >= hits[count - 1].distance {
                    continue;
                }
                count -= 1;
            }

            // Insertion keeps the buffer sorted by distance.
            let mut i = count;
            while i > 0 && hits[i - 1].distance > hit.distance {
                hits[i] = hits[i - 1];
                i -= 1;
            }
            hits[i] = hit;
            count += 1;
        }

        count
    }
}

// ============================================================================
// Tests
// ============================================================================
