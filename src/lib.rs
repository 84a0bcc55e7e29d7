//! 2D kinematic platformer movement.
//!
//! A character-movement core that moves entities through a collidable world
//! with discrete per-step shape casts instead of a rigid-body solver, plus
//! the input-driven state machines (run, jump, dash) that turn the
//! integrator into platformer player movement.
//!
//! # Architecture
//!
//! The crate is split into two systems:
//!
//! - **Collision**: sweeps capsules/boxes through world geometry and reports
//!   ordered contacts
//! - **Movement**: a kinematic integrator ([`MovementBody`]) and a motion
//!   controller ([`PlayerController`]) layered on top of it
//!
//! Everything runs synchronously on a fixed tick: one logic step (input,
//! state machines, velocity intent) followed by one physics step (gravity,
//! sweeps, position). Rendering, audio, animation and input devices are the
//! caller's concern; the core only exchanges plain data with them.
//!
//! # Design Principles
//!
//! 1. **Kinematic, not dynamic**: no forces, no stacking, no rotation -
//!    velocity in, resolved position out
//! 2. **One writer per phase**: logic writes intent, physics writes
//!    velocity/position/grounded, so a tick needs no locking
//! 3. **Explicit state machines**: jump and dash phases are named enums with
//!    named transitions, never magic integers

pub mod collision;
pub mod movement;

// Re-export commonly used types
pub use collision::{CollisionWorld, ContentFlags, SweepHit, SweepShape, MAX_SWEEP_HITS};
pub use movement::{
    AnimationParams, DashPhase, DashState, Facing, JumpState, MovementBody, MovementConfig,
    PlayerCommand, PlayerController, PlayerEvent,
};
