//! Player movement configuration.
//!
//! Everything tunable about the controller lives here. Integrator-level
//! tuning (gravity modifier, friction, slope limit) sits on the body itself
//! since it applies to any kinematic entity, not just the player.

use serde::{Deserialize, Serialize};

/// Configuration for player movement.
///
/// Values are preconditions, not validated at runtime: a non-positive
/// `max_speed` or a friction coefficient below 1 on the body produces
/// degenerate motion rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementConfig {
    /// Max horizontal speed (units/second). External impulses may exceed
    /// this; steering in the same direction won't clamp them back down.
    pub max_speed: f32,

    /// Initial vertical velocity at the start of a jump (units/second).
    pub jump_take_off_speed: f32,

    /// Multiplier applied to the takeoff speed when the jump fires.
    pub jump_modifier: f32,

    /// Factor applied to upward velocity when the jump button is released
    /// early (< 1). Smaller values cut short hops harder.
    pub jump_deceleration: f32,

    /// Speed the body is forced to while dashing (units/second).
    pub dash_speed: f32,

    /// Dash duration (seconds).
    pub dash_time: f32,

    /// End an active dash on any sweep contact. Off by default: ending the
    /// dash on every touched surface, including the ground being dashed
    /// along, interrupts dash-through-gap movement.
    pub end_dash_on_collision: bool,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            max_speed: 7.0,
            jump_take_off_speed: 7.0,
            jump_modifier: 1.5,
            jump_deceleration: 0.5,
            dash_speed: 16.0,
            dash_time: 0.2,
            end_dash_on_collision: false,
        }
    }
}

impl MovementConfig {
    /// A faster, twitchier tuning for speedrun-style movement.
    pub fn speedrunner() -> Self {
        Self {
            max_speed: 9.0,
            dash_speed: 22.0,
            dash_time: 0.15,
            ..Default::default()
        }
    }

    /// A slower tuning with a harder short-hop cut for precision platforming.
    pub fn precise() -> Self {
        Self {
            max_speed: 5.5,
            jump_deceleration: 0.3,
            dash_speed: 12.0,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MovementConfig::default();
        assert!(config.max_speed > 0.0);
        assert!(config.jump_take_off_speed > 0.0);
        assert!(config.dash_time > 0.0);
        assert!(config.jump_deceleration < 1.0);
        assert!(!config.end_dash_on_collision);
    }

    #[test]
    fn test_presets_differ() {
        let default = MovementConfig::default();
        let fast = MovementConfig::speedrunner();
        let careful = MovementConfig::precise();

        assert!(fast.max_speed > default.max_speed);
        assert!(fast.dash_time < default.dash_time);
        assert!(careful.max_speed < default.max_speed);
        assert!(careful.jump_deceleration < default.jump_deceleration);
    }
}
