//! Jump state machine.
//!
//! Five states cycled for the controller's lifetime:
//!
//! ```text
//! Grounded -> PrepareToJump -> Jumping -> InFlight -> Landed -> Grounded
//! ```
//!
//! `PrepareToJump` is entered from input handling; everything else advances
//! from the grounded flag the integrator produced on the previous physics
//! step. `Landed` exists so landing logic runs exactly once.

use serde::{Deserialize, Serialize};

use super::events::PlayerEvent;

/// The jump lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JumpState {
    /// Standing on the ground, no jump in progress.
    #[default]
    Grounded,
    /// Jump input accepted; the impulse fires on the next advance.
    PrepareToJump,
    /// Impulse applied, still reported grounded by the integrator.
    Jumping,
    /// Airborne.
    InFlight,
    /// Touched down; one-step transitional state.
    Landed,
}

/// Result of advancing the jump machine one step.
#[derive(Debug, Clone, Copy)]
pub struct JumpAdvance {
    /// State after the transition.
    pub next: JumpState,
    /// The jump impulse should be applied during velocity-intent computation
    /// this step.
    pub begin_jump: bool,
    /// Notification to emit at this transition.
    pub event: Option<PlayerEvent>,
}

impl JumpState {
    /// Advance the machine one logic step.
    ///
    /// `grounded` is the integrator's report from the previous physics step;
    /// the one-tick observation lag is intentional.
    pub fn advance(self, grounded: bool) -> JumpAdvance {
        match self {
            JumpState::Grounded => JumpAdvance {
                next: JumpState::Grounded,
                begin_jump: false,
                event: None,
            },
            JumpState::PrepareToJump => JumpAdvance {
                next: JumpState::Jumping,
                begin_jump: true,
                event: None,
            },
            JumpState::Jumping => {
                if !grounded {
                    JumpAdvance {
                        next: JumpState::InFlight,
                        begin_jump: false,
                        event: Some(PlayerEvent::Jumped),
                    }
                } else {
                    JumpAdvance {
                        next: JumpState::Jumping,
                        begin_jump: false,
                        event: None,
                    }
                }
            }
            JumpState::InFlight => {
                if grounded {
                    JumpAdvance {
                        next: JumpState::Landed,
                        begin_jump: false,
                        event: Some(PlayerEvent::Landed),
                    }
                } else {
                    JumpAdvance {
                        next: JumpState::InFlight,
                        begin_jump: false,
                        event: None,
                    }
                }
            }
            JumpState::Landed => JumpAdvance {
                next: JumpState::Grounded,
                begin_jump: false,
                event: None,
            },
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
