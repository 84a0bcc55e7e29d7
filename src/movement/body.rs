//! Kinematic movement body.
//!
//! [`MovementBody`] turns a velocity intent into a collision-respecting
//! position change, once per fixed physics step. It knows nothing about
//! jumping, dashing or input - controllers write `target_velocity` before
//! the step and read the grounded/slope state after it.
//!
//! Movement is resolved as two independent sweeps per step: the horizontal
//! component travels along the current ground plane (so running follows
//! slopes instead of being axis-aligned), then the vertical component
//! travels along world-up.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::collision::{CollisionWorld, ContentFlags, SweepHit, SweepShape, MAX_SWEEP_HITS};

/// Buffer distance kept between the body and any surface. Must be smaller
/// than the smallest traversable gap in the world.
pub const SKIN_RADIUS: f32 = 0.01;

/// Moves shorter than this are skipped entirely, so numerical noise never
/// triggers a sweep.
pub const MIN_MOVE_DISTANCE: f32 = 0.001;

/// A kinematic body moved by swept casts rather than dynamics.
///
/// One owner writes `velocity`/`target_velocity` between physics steps; the
/// body itself only consumes the target, never originates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementBody {
    /// World position of the shape's center. Mutated only by the sweep
    /// resolution.
    pub position: Vec2,

    /// Current linear velocity.
    pub velocity: Vec2,

    /// Velocity intent for the next step. The horizontal component is
    /// always applied; the vertical component only overrides when non-zero,
    /// so gravity keeps integrating during normal falls.
    pub target_velocity: Vec2,

    /// Gravity multiplier applied while falling, for a floatier rise and
    /// snappier drop.
    pub gravity_modifier: f32,

    /// Exponential decay coefficient for horizontal speed when friction is
    /// enabled; higher decays faster. Must be > 1.
    pub friction: f32,

    /// Minimum up-component of a surface normal for the surface to count as
    /// ground. 0.65 allows slopes up to roughly 49 degrees.
    pub min_ground_normal: f32,

    /// Which brush contents this body collides with.
    pub collision_mask: ContentFlags,

    shape: SweepShape,
    ground_normal: Vec2,
    grounded: bool,
    gravity_scale: f32,
    reset_requested: bool,
    friction_enabled: bool,
    #[serde(skip)]
    hit_buffer: [SweepHit; MAX_SWEEP_HITS],
}

impl MovementBody {
    /// Create a body at the given position.
    pub fn new(position: Vec2, shape: SweepShape) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            target_velocity: Vec2::ZERO,
            gravity_modifier: 1.0,
            friction: 8.0,
            min_ground_normal: 0.65,
            collision_mask: ContentFlags::MASK_PLAYER_SOLID,
            shape,
            ground_normal: Vec2::Y,
            grounded: false,
            gravity_scale: 1.0,
            reset_requested: false,
            friction_enabled: false,
            hit_buffer: [SweepHit::default(); MAX_SWEEP_HITS],
        }
    }

    /// Whether the last physics step found walkable ground.
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Outward normal of the surface the body last stood on.
    #[inline]
    pub fn ground_normal(&self) -> Vec2 {
        self.ground_normal
    }

    /// The body's sweep shape.
    #[inline]
    pub fn shape(&self) -> SweepShape {
        self.shape
    }

    /// Current gravity multiplier (0 while a dash suppresses gravity).
    #[inline]
    pub fn gravity_scale(&self) -> f32 {
        self.gravity_scale
    }

    /// Scale the gravity contribution for subsequent steps.
    pub fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale = scale;
    }

    /// Enable or disable horizontal friction decay for subsequent steps.
    pub fn set_friction_enabled(&mut self, enabled: bool) {
        self.friction_enabled = enabled;
    }

    /// Hard-stop the body on its next step: velocity and target velocity
    /// are zeroed before any decay or target blending happens.
    pub fn request_velocity_reset(&mut self) {
        self.reset_requested = true;
    }

    /// Overwrite the vertical velocity (springs, enemy stomps).
    pub fn bounce(&mut self, vertical_speed: f32) {
        self.velocity.y = vertical_speed;
    }

    /// Overwrite both velocity components.
    pub fn bounce_toward(&mut self, direction: Vec2) {
        self.velocity = direction;
    }

    /// Move instantly to `position`, discarding all motion.
    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
        self.target_velocity = Vec2::ZERO;
    }

    /// Run one fixed physics step with no contact hook.
    pub fn step(&mut self, world: &CollisionWorld, gravity: Vec2, dt: f32) {
        self.step_with(world, gravity, dt, &mut || {});
    }

    /// Run one fixed physics step.
    ///
    /// `on_contact` is invoked once per sweep pass that reported at least
    /// one hit, before the hits are resolved. Controllers use it to react
    /// to contacts (e.g. interrupting a dash) without subclassing.
    pub fn step_with(
        &mut self,
        world: &CollisionWorld,
        gravity: Vec2,
        dt: f32,
        on_contact: &mut dyn FnMut(),
    ) {
        // Falling uses the steeper gravity; rising uses plain gravity.
        let scaled = gravity * (self.gravity_scale * dt);
        if self.velocity.y < 0.0 {
            self.velocity += scaled * self.gravity_modifier;
        } else {
            self.velocity += scaled;
        }

        if self.reset_requested {
            self.velocity = Vec2::ZERO;
            self.target_velocity = Vec2::ZERO;
            self.reset_requested = false;
        } else if self.friction_enabled {
            // friction^(-dt) on a coefficient > 1 decays toward zero at a
            // rate independent of the step size.
            self.target_velocity.x = self.velocity.x * self.friction.powf(-dt);
        }

        if self.target_velocity.y != 0.0 {
            self.velocity.y = self.target_velocity.y;
        }
        self.velocity.x = self.target_velocity.x;

        self.grounded = false;

        let delta = self.velocity * dt;

        // Horizontal movement runs along the current ground plane.
        let along_ground = Vec2::new(self.ground_normal.y, -self.ground_normal.x);
        self.perform_movement(world, along_ground * delta.x, false, on_contact);

        // Vertical movement runs along world-up.
        self.perform_movement(world, Vec2::new(0.0, delta.y), true, on_contact);
    }

    /// Whether a surface normal is flat enough to stand on.
    #[inline]
    fn is_walkable(&self, normal: Vec2) -> bool {
        normal.y > self.min_ground_normal
    }

    fn perform_movement(
        &mut self,
        world: &CollisionWorld,
        move_vec: Vec2,
        vertical: bool,
        on_contact: &mut dyn FnMut(),
    ) {
        let mut distance = move_vec.length();
        if distance <= MIN_MOVE_DISTANCE {
            return;
        }
        let direction = move_vec / distance;

        let shape = self.shape;
        let count = world.sweep(
            &shape,
            self.position,
            direction,
            distance + SKIN_RADIUS,
            self.collision_mask,
            &mut self.hit_buffer,
        );

        if count > 0 {
            on_contact();
        }

        for i in 0..count {
            let hit = self.hit_buffer[i];
            let mut normal = hit.normal;

            if self.is_walkable(normal) {
                self.grounded = true;
                if vertical {
                    // Slope tracking only updates on the vertical pass, so
                    // sliding along a surface can't feed back into itself.
                    self.ground_normal = normal;
                    normal.x = 0.0;
                }
            }

            if self.grounded {
                // Remove the component of velocity pointing into the
                // surface; slows uphill movement and prevents sinking.
                let projection = self.velocity.dot(normal);
                if projection < 0.0 {
                    self.velocity -= projection * normal;
                }
            } else {
                // Airborne contact: stop horizontal drift, never yank the
                // body downward faster than it was already falling.
                self.velocity.x = 0.0;
                self.velocity.y = self.velocity.y.min(0.0);
            }

            // Stop just short of the surface, leaving the skin gap.
            distance = distance.min(hit.distance - SKIN_RADIUS);
        }

        self.position += direction * distance;
    }
}

// ============================================================================
// Tests
// ============================================================================
