//! Controller outputs: discrete events, animation parameters, facing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Discrete notifications emitted at state-machine transitions.
///
/// Fire-and-forget: consumers route these to audio, VFX, camera shake or
/// scoring as they see fit. The controller queues them per tick; drain them
/// with [`PlayerController::drain_events`].
///
/// [`PlayerController::drain_events`]: super::PlayerController::drain_events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// The player left the ground via a jump.
    Jumped,
    /// The player touched down after being airborne.
    Landed,
    /// A dash started.
    DashStarted,
    /// A dash ended (timeout, collision or jump interrupt).
    DashEnded,
    /// The dash recharged by touching ground.
    DashReady,
}

/// Animation parameters recomputed every logic step.
///
/// Values only - driving an actual animator is the caller's job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationParams {
    /// Whether the body is standing on walkable ground.
    pub grounded: bool,

    /// Horizontal speed as a fraction of max speed, snapped to zero below
    /// 1/24 to keep idle poses still.
    pub run_fraction: f32,
}

/// Which way the character faces, derived from horizontal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Unit vector along the facing direction.
    #[inline]
    pub fn direction(self) -> Vec2 {
        match self {
            Facing::Left => Vec2::new(-1.0, 0.0),
            Facing::Right => Vec2::new(1.0, 0.0),
        }
    }
}
