//! Dash state machine.
//!
//! Four phases cycled per dash:
//!
//! ```text
//! Idle -> Dashing -> Cooling -> Recovering -> Idle
//! ```
//!
//! `Cooling` is a one-step transitional phase; `Recovering` holds until the
//! body touches ground again, so a dash can only be refreshed by landing.
//! Dash input in any phase but `Idle` is ignored.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Where in the dash lifecycle the machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DashPhase {
    /// Dash available.
    #[default]
    Idle,
    /// Dash in progress; velocity intent is forced along the dash direction.
    Dashing,
    /// Dash just ended; one-step transitional phase.
    Cooling,
    /// Waiting for ground contact to refresh the dash.
    Recovering,
}

/// What the controller must do to the body when a dash ends.
#[derive(Debug, Clone, Copy)]
pub struct DashEnd {
    /// Hard-stop the body before resuming normal control. Set for dashes
    /// that were not aimed downward and did not end in a jump, so leftover
    /// dash momentum can't extend a fall.
    pub reset_velocity: bool,
}

/// Dash state machine.
///
/// Holds the dash direction and remaining time alongside the phase; both
/// are cleared when the dash ends.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DashState {
    phase: DashPhase,
    direction: Vec2,
    time_left: f32,
}

impl DashState {
    /// Create a dash machine with the dash available.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    pub fn phase(&self) -> DashPhase {
        self.phase
    }

    /// Whether a dash can be started right now.
    pub fn is_ready(&self) -> bool {
        self.phase == DashPhase::Idle
    }

    /// Whether a dash is in progress.
    pub fn is_dashing(&self) -> bool {
        self.phase == DashPhase::Dashing
    }

    /// Dash direction while dashing, `None` otherwise.
    pub fn direction(&self) -> Option<Vec2> {
        match self.phase {
            DashPhase::Dashing => Some(self.direction),
            _ => None,
        }
    }

    /// Start a dash along `direction` (assumed unit length) lasting
    /// `duration` seconds. Ignored unless the machine is idle.
    pub fn start(&mut self, direction: Vec2, duration: f32) {
        if self.phase != DashPhase::Idle {
            return;
        }
        self.phase = DashPhase::Dashing;
        self.direction = direction;
        self.time_left = duration;
    }

    /// Tick the countdown while dashing.
    ///
    /// Returns true when the countdown expired this step and the dash
    /// should end.
    pub fn tick(&mut self, dt: f32) -> bool {
        if self.phase != DashPhase::Dashing {
            return false;
        }
        self.time_left -= dt;
        self.time_left <= 0.0
    }

    /// End an active dash.
    ///
    /// `jumped` marks a dash terminated by a jump; the jump's vertical
    /// impulse then takes priority and the body is never hard-stopped.
    /// Returns `None` if no dash was active.
    pub fn end(&mut self, jumped: bool) -> Option<DashEnd> {
        if self.phase != DashPhase::Dashing {
            return None;
        }
        let reset_velocity = self.direction.y >= 0.0 && !jumped;
        self.phase = DashPhase::Cooling;
        self.direction = Vec2::ZERO;
        self.time_left = 0.0;
        Some(DashEnd { reset_velocity })
    }

    /// Advance the post-dash phases one physics step.
    ///
    /// `Recovering` returns to `Idle` only on a grounded step; `Cooling`
    /// moves to `Recovering` unconditionally. At most one transition occurs
    /// per call. Returns true when the dash became available again.
    pub fn recover(&mut self, grounded: bool) -> bool {
        match self.phase {
            DashPhase::Recovering if grounded => {
                self.phase = DashPhase::Idle;
                true
            }
            DashPhase::Cooling => {
                self.phase = DashPhase::Recovering;
                false
            }
            _ => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
