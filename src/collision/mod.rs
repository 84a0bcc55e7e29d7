//! Collision detection for kinematic movement.
//!
//! This module provides swept-shape queries against static world geometry.
//!
//! # Key Types
//!
//! - [`CollisionWorld`]: The collision environment containing all geometry
//! - [`SweepShape`]: Shape used for sweeps (capsule or box)
//! - [`SweepHit`]: A single contact reported by a sweep
//!
//! # Sweeping
//!
//! A sweep casts a shape along a direction and reports every brush it would
//! touch within the given distance, sorted nearest-first. Movement code
//! shortens its travel to stop just short of the nearest surfaces rather
//! than moving first and separating after.

mod flags;
mod sweep;
mod world;

pub use flags::ContentFlags;
pub use sweep::{SweepHit, SweepShape, MAX_SWEEP_HITS};
pub use world::CollisionWorld;
