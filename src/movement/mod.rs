//! Kinematic movement: integrator plus player motion controller.
//!
//! Two layers:
//!
//! - [`MovementBody`] integrates velocity and resolves movement against the
//!   collision world with per-step sweeps. It has no notion of input.
//! - [`PlayerController`] reads input, runs the jump and dash state
//!   machines, and writes a velocity intent the body realizes.
//!
//! The split keeps the integrator testable in isolation and lets other
//! entity types (enemies, moving props) reuse it without the player logic.

mod body;
mod command;
mod config;
mod controller;
mod dash;
mod events;
mod jump;

pub use body::{MovementBody, MIN_MOVE_DISTANCE, SKIN_RADIUS};
pub use command::PlayerCommand;
pub use config::MovementConfig;
pub use controller::PlayerController;
pub use dash::{DashEnd, DashPhase, DashState};
pub use events::{AnimationParams, Facing, PlayerEvent};
pub use jump::{JumpAdvance, JumpState};
