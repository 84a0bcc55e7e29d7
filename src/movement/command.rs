//! Per-tick input snapshot.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Input state for a single logic step.
///
/// The axes are continuous in roughly [-1, 1]; the buttons are
/// edge-triggered (true only on the step the press or release happened).
/// The core never polls devices - whoever owns the real input layer fills
/// one of these in per tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerCommand {
    /// Horizontal axis. Positive is right.
    pub move_x: f32,

    /// Vertical axis. Positive is up. Only used to aim dashes.
    pub move_y: f32,

    /// Jump button went down this step.
    pub jump_pressed: bool,

    /// Jump button went up this step.
    pub jump_released: bool,

    /// Dash button went down this step.
    pub dash_pressed: bool,
}

impl PlayerCommand {
    /// Check if any directional input is active.
    #[inline]
    pub fn has_move_input(&self) -> bool {
        self.move_x != 0.0 || self.move_y != 0.0
    }

    /// Raw directional input as a vector.
    #[inline]
    pub fn move_axes(&self) -> Vec2 {
        Vec2::new(self.move_x, self.move_y)
    }
}
