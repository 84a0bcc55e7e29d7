//! Player motion controller.
//!
//! Converts per-tick input into a velocity intent for the movement body it
//! owns, and runs the jump and dash state machines. The two machines both
//! write into the same velocity intent, so priority is explicit: a dash
//! overrides normal horizontal steering, and a fresh jump terminates an
//! active dash.
//!
//! Each simulation tick is one [`logic_step`] followed by one
//! [`physics_step`], in that order. Grounded and slope state observed by the
//! logic step is whatever the previous physics step produced; the one-tick
//! lag is part of the contract.
//!
//! [`logic_step`]: PlayerController::logic_step
//! [`physics_step`]: PlayerController::physics_step

use glam::Vec2;

use crate::collision::{CollisionWorld, SweepShape};

use super::body::MovementBody;
use super::command::PlayerCommand;
use super::config::MovementConfig;
use super::dash::DashState;
use super::events::{AnimationParams, Facing, PlayerEvent};
use super::jump::JumpState;

/// Horizontal input below this doesn't change facing, so the sprite can't
/// flicker at rest.
const FACING_DEADZONE: f32 = 0.01;

/// Run fractions below this snap to zero so idle poses stay still.
const RUN_FRACTION_DEADZONE: f32 = 1.0 / 24.0;

/// Input-driven platformer movement: run, jump, dash.
///
/// # Example
///
/// ```ignore
/// let mut player = PlayerController::new(MovementConfig::default(), spawn_pos);
///
/// // Each simulation tick:
/// player.tick(&command, &world, gravity, dt);
/// for event in player.drain_events() {
///     // route to audio / VFX / camera
/// }
/// ```
#[derive(Debug)]
pub struct PlayerController {
    /// Movement tuning.
    pub config: MovementConfig,

    /// The kinematic body this controller steers.
    pub body: MovementBody,

    /// While false, all input is ignored and horizontal intent is zero
    /// (cutscenes, death).
    pub control_enabled: bool,

    jump_state: JumpState,
    jump_pending: bool,
    stop_jump: bool,
    dash: DashState,
    move_x: f32,
    facing: Facing,
    animation: AnimationParams,
    events: Vec<PlayerEvent>,
}

impl PlayerController {
    /// Create a controller with a default player capsule at `position`.
    pub fn new(config: MovementConfig, position: Vec2) -> Self {
        Self::with_body(config, MovementBody::new(position, SweepShape::PLAYER))
    }

    /// Create a controller around an existing body.
    pub fn with_body(config: MovementConfig, body: MovementBody) -> Self {
        Self {
            config,
            body,
            control_enabled: true,
            jump_state: JumpState::Grounded,
            jump_pending: false,
            stop_jump: false,
            dash: DashState::new(),
            move_x: 0.0,
            facing: Facing::default(),
            animation: AnimationParams::default(),
            events: Vec::new(),
        }
    }

    /// Current jump state.
    pub fn jump_state(&self) -> JumpState {
        self.jump_state
    }

    /// Current dash state.
    pub fn dash_state(&self) -> &DashState {
        &self.dash
    }

    /// Which way the character faces (sprite-flip intent).
    pub fn facing(&self) -> Facing {
        self.facing
    }

    /// Animation parameters from the last logic step.
    pub fn animation(&self) -> AnimationParams {
        self.animation
    }

    /// Drain the events queued since the last call.
    pub fn drain_events(&mut self) -> impl Iterator<Item = PlayerEvent> + '_ {
        self.events.drain(..)
    }

    /// Run one full simulation tick: logic, then physics.
    pub fn tick(
        &mut self,
        command: &PlayerCommand,
        world: &CollisionWorld,
        gravity: Vec2,
        dt: f32,
    ) {
        self.logic_step(command, dt);
        self.physics_step(world, gravity, dt);
    }

    /// Run the input/logic half of a tick: state machines advance and the
    /// velocity intent for the next physics step is computed.
    pub fn logic_step(&mut self, command: &PlayerCommand, dt: f32) {
        if self.dash.is_dashing() && self.dash.tick(dt) {
            self.end_dash(false);
        }

        if self.control_enabled {
            if command.dash_pressed && self.dash.is_ready() {
                let axes = command.move_axes();
                let direction = if axes == Vec2::ZERO {
                    self.facing.direction()
                } else {
                    axes.normalize()
                };
                log::debug!("dash started, direction = {direction}");
                self.body.set_gravity_scale(0.0);
                self.dash.start(direction, self.config.dash_time);
                self.events.push(PlayerEvent::DashStarted);
            }

            // A dash freezes steering; the pre-dash input keeps applying.
            if !self.dash.is_dashing() {
                self.move_x = command.move_x;
            }

            // Jump input is read even on a dash-start tick; a fresh jump
            // outranks the dash in velocity-intent computation below.
            if self.jump_state == JumpState::Grounded && command.jump_pressed {
                self.jump_state = JumpState::PrepareToJump;
            } else if command.jump_released {
                self.stop_jump = true;
            }
        } else {
            self.move_x = 0.0;
        }

        self.advance_jump_state();
        self.compute_velocity();
    }

    /// Run the physics half of a tick.
    pub fn physics_step(&mut self, world: &CollisionWorld, gravity: Vec2, dt: f32) {
        // Post-dash phases advance on the grounded state of the previous
        // step, before the body moves again.
        if self.dash.recover(self.body.is_grounded()) {
            self.events.push(PlayerEvent::DashReady);
        }

        let mut contacted = false;
        self.body.step_with(world, gravity, dt, &mut || contacted = true);

        if contacted && self.config.end_dash_on_collision && self.dash.is_dashing() {
            self.end_dash(false);
        }
    }

    fn advance_jump_state(&mut self) {
        self.jump_pending = false;
        let advance = self.jump_state.advance(self.body.is_grounded());
        if advance.begin_jump {
            self.jump_pending = true;
            self.stop_jump = false;
        }
        if let Some(event) = advance.event {
            self.events.push(event);
        }
        self.jump_state = advance.next;
    }

    /// Compute the velocity intent for the coming physics step.
    ///
    /// Priority order: jump impulse, short-hop cut, then either the dash
    /// override or normal horizontal steering.
    fn compute_velocity(&mut self) {
        if self.jump_pending && self.body.is_grounded() {
            self.body.velocity.y = self.config.jump_take_off_speed * self.config.jump_modifier;
            if self.dash.is_dashing() {
                self.end_dash(true);
            }
            self.jump_pending = false;
        } else if self.stop_jump {
            self.stop_jump = false;
            if self.body.velocity.y > 0.0 {
                self.body.velocity.y *= self.config.jump_deceleration;
            }
        }

        if self.move_x > FACING_DEADZONE {
            self.facing = Facing::Right;
        } else if self.move_x < -FACING_DEADZONE {
            self.facing = Facing::Left;
        }

        let mut run_fraction = self.body.velocity.x.abs() / self.config.max_speed;
        if run_fraction < RUN_FRACTION_DEADZONE {
            run_fraction = 0.0;
        }
        self.animation = AnimationParams {
            grounded: self.body.is_grounded(),
            run_fraction,
        };

        if let Some(direction) = self.dash.direction() {
            self.body.target_velocity = direction * self.config.dash_speed;
            self.body.set_friction_enabled(false);
            return;
        }

        self.body.set_friction_enabled(self.move_x == 0.0);

        // Same-direction input preserves externally boosted speed
        // (knockback, boost pads) instead of clamping it back to max.
        let speed = if self.move_x * self.body.velocity.x > 0.0 {
            self.config.max_speed.max(self.body.velocity.x.abs())
        } else {
            self.config.max_speed
        };
        self.body.target_velocity = Vec2::new(self.move_x * speed, 0.0);
    }

    fn end_dash(&mut self, jumped: bool) {
        let end = match self.dash.end(jumped) {
            Some(end) => end,
            None => return,
        };
        if end.reset_velocity {
            self.body.request_velocity_reset();
        }
        self.body.set_gravity_scale(1.0);
        log::debug!("dash ended, jumped = {jumped}");
        self.events.push(PlayerEvent::DashEnded);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::ContentFlags;
    use crate::movement::dash::DashPhase;

    const DT: f32 = 1.0 / 60.0;
    const GRAVITY: Vec2 = Vec2::new(0.0, -9.81);

    fn create_test_world() -> CollisionWorld {
        let mut world = CollisionWorld::new();
        // Floor with its top surface at y=0
        world.add_box(
            Vec2::new(0.0, -0.5),
            Vec2::new(50.0, 0.5),
            ContentFlags::SOLID,
        );
        world
    }

    fn test_config() -> MovementConfig {
        MovementConfig {
            jump_modifier: 1.0,
            ..Default::default()
        }
    }

    fn idle() -> PlayerCommand {
        PlayerCommand::default()
    }

    fn run(x: f32) -> PlayerCommand {
        PlayerCommand {
            move_x: x,
            ..Default::default()
        }
    }

    fn jump_press() -> PlayerCommand {
        PlayerCommand {
            jump_pressed: true,
            ..Default::default()
        }
    }

    fn jump_release() -> PlayerCommand {
        PlayerCommand {
            jump_released: true,
            ..Default::default()
        }
    }

    fn dash_press(x: f32, y: f32) -> PlayerCommand {
        PlayerCommand {
            move_x: x,
            move_y: y,
            dash_pressed: true,
            ..Default::default()
        }
    }

    /// A controller settled onto the floor, with settle events drained.
    fn grounded_player(world: &CollisionWorld) -> PlayerController {
        let mut player = PlayerController::new(test_config(), Vec2::new(0.0, 1.0));
        for _ in 0..40 {
            player.tick(&idle(), world, GRAVITY, DT);
        }
        assert!(player.body.is_grounded());
        player.drain_events().count();
        player
    }

    #[test]
    fn test_run_on_flat_ground() {
        let world = create_test_world();
        let mut player = grounded_player(&world);

        let mut last_x = player.body.position.x;
        for _ in 0..3 {
            player.tick(&run(1.0), &world, GRAVITY, DT);
            assert!(player.body.position.x > last_x);
            last_x = player.body.position.x;
            assert!(player.body.velocity.x.abs() <= player.config.max_speed + 1e-4);
            assert!(player.body.is_grounded());
        }

        // No jump or dash activity - no events
        assert_eq!(player.drain_events().count(), 0);
    }

    #[test]
    fn test_jump_takeoff_velocity() {
        let world = create_test_world();
        let mut player = grounded_player(&world);

        player.logic_step(&jump_press(), DT);
        assert_eq!(player.jump_state(), JumpState::Jumping);
        assert_eq!(player.body.velocity.y, 7.0);

        // Vertical velocity decreases every tick under gravity
        player.physics_step(&world, GRAVITY, DT);
        let mut prev = player.body.velocity.y;
        for _ in 0..5 {
            player.tick(&idle(), &world, GRAVITY, DT);
            assert!(player.body.velocity.y < prev);
            prev = player.body.velocity.y;
        }
    }

    #[test]
    fn test_jump_cycle_states_and_events() {
        let world = create_test_world();
        let mut player = grounded_player(&world);

        player.tick(&jump_press(), &world, GRAVITY, DT);
        assert_eq!(player.jump_state(), JumpState::Jumping);

        player.tick(&idle(), &world, GRAVITY, DT);
        assert_eq!(player.jump_state(), JumpState::InFlight);

        let mut landed = false;
        for _ in 0..300 {
            player.tick(&idle(), &world, GRAVITY, DT);
            if player.jump_state() == JumpState::Landed {
                landed = true;
                break;
            }
            assert_eq!(player.jump_state(), JumpState::InFlight);
        }
        assert!(landed, "player never landed");

        player.tick(&idle(), &world, GRAVITY, DT);
        assert_eq!(player.jump_state(), JumpState::Grounded);

        let events: Vec<_> = player.drain_events().collect();
        assert_eq!(events, vec![PlayerEvent::Jumped, PlayerEvent::Landed]);
    }

    #[test]
    fn test_short_hop_on_early_release() {
        let world = create_test_world();
        let mut player = grounded_player(&world);

        player.tick(&jump_press(), &world, GRAVITY, DT);
        player.tick(&idle(), &world, GRAVITY, DT);

        let before = player.body.velocity.y;
        assert!(before > 0.0);

        player.logic_step(&jump_release(), DT);
        let expected = before * player.config.jump_deceleration;
        assert!(
            (player.body.velocity.y - expected).abs() < 1e-4,
            "velocity.y = {}, expected {expected}",
            player.body.velocity.y
        );
    }

    #[test]
    fn test_jump_wins_over_dash_on_same_tick() {
        let world = create_test_world();
        let mut player = grounded_player(&world);

        let both = PlayerCommand {
            move_x: 1.0,
            jump_pressed: true,
            dash_pressed: true,
            ..Default::default()
        };
        player.logic_step(&both, DT);

        // The dash started and was immediately terminated by the jump; the
        // vertical velocity is the takeoff speed, not the dash speed.
        assert_ne!(player.dash_state().phase(), DashPhase::Dashing);
        assert_eq!(player.body.velocity.y, 7.0);

        let events: Vec<_> = player.drain_events().collect();
        assert!(events.contains(&PlayerEvent::DashStarted));
        assert!(events.contains(&PlayerEvent::DashEnded));
    }

    #[test]
    fn test_dash_full_cycle_on_ground() {
        let world = create_test_world();
        let mut player = grounded_player(&world);

        player.tick(&dash_press(1.0, 0.0), &world, GRAVITY, DT);
        assert_eq!(player.dash_state().phase(), DashPhase::Dashing);
        assert_eq!(player.body.velocity.x, player.config.dash_speed);
        assert_eq!(player.body.gravity_scale(), 0.0);
        let events: Vec<_> = player.drain_events().collect();
        assert!(events.contains(&PlayerEvent::DashStarted));

        // Countdown runs out, velocity resets, dash refreshes on the ground
        let mut ready = false;
        for _ in 0..30 {
            player.tick(&idle(), &world, GRAVITY, DT);
            if player.drain_events().any(|e| e == PlayerEvent::DashReady) {
                ready = true;
                break;
            }
        }
        assert!(ready, "dash never refreshed");
        assert_eq!(player.dash_state().phase(), DashPhase::Idle);
        assert_eq!(player.body.gravity_scale(), 1.0);
    }

    #[test]
    fn test_dash_requires_ground_to_refresh() {
        let world = create_test_world();
        let mut player = PlayerController::new(test_config(), Vec2::new(0.0, 6.0));

        // Dash while airborne
        player.tick(&dash_press(1.0, 0.0), &world, GRAVITY, DT);
        assert!(player.dash_state().is_dashing());

        // Let the dash run out mid-air
        for _ in 0..15 {
            player.tick(&idle(), &world, GRAVITY, DT);
        }
        assert_eq!(player.dash_state().phase(), DashPhase::Recovering);

        // Recovery holds for the whole fall
        let mut ticks = 0;
        while !player.body.is_grounded() {
            player.tick(&idle(), &world, GRAVITY, DT);
            assert_ne!(player.dash_state().phase(), DashPhase::Idle);
            ticks += 1;
            assert!(ticks < 600, "player never landed");
        }

        // First grounded tick refreshes the dash
        player.tick(&idle(), &world, GRAVITY, DT);
        assert_eq!(player.dash_state().phase(), DashPhase::Idle);
    }

    #[test]
    fn test_dash_neutral_stick_uses_facing() {
        let world = create_test_world();
        let mut player = grounded_player(&world);

        player.tick(&run(-1.0), &world, GRAVITY, DT);
        assert_eq!(player.facing(), Facing::Left);

        player.tick(&dash_press(0.0, 0.0), &world, GRAVITY, DT);
        assert_eq!(player.dash_state().direction(), Some(Vec2::new(-1.0, 0.0)));
        assert_eq!(player.body.velocity.x, -player.config.dash_speed);
    }

    #[test]
    fn test_dash_input_ignored_while_spent() {
        let world = create_test_world();
        let mut player = grounded_player(&world);

        player.tick(&dash_press(1.0, 0.0), &world, GRAVITY, DT);
        player.drain_events().count();

        player.tick(&dash_press(1.0, 0.0), &world, GRAVITY, DT);
        assert_eq!(player.dash_state().phase(), DashPhase::Dashing);
        assert!(player.drain_events().all(|e| e != PlayerEvent::DashStarted));
    }

    #[test]
    fn test_control_disabled_ignores_input() {
        let world = create_test_world();
        let mut player = grounded_player(&world);
        player.control_enabled = false;

        player.tick(&run(1.0), &world, GRAVITY, DT);
        assert_eq!(player.body.velocity.x, 0.0);

        player.tick(&jump_press(), &world, GRAVITY, DT);
        assert_eq!(player.jump_state(), JumpState::Grounded);
        assert!(player.body.velocity.y <= 0.0);
    }

    #[test]
    fn test_animation_params() {
        let world = create_test_world();
        let mut player = grounded_player(&world);
        assert_eq!(player.animation().run_fraction, 0.0);
        assert!(player.animation().grounded);

        player.tick(&run(1.0), &world, GRAVITY, DT);
        player.tick(&run(1.0), &world, GRAVITY, DT);
        assert!((player.animation().run_fraction - 1.0).abs() < 1e-4);
        assert!(player.animation().grounded);
    }

    #[test]
    fn test_same_direction_input_keeps_boosted_speed() {
        let world = create_test_world();
        let mut player = grounded_player(&world);

        // External impulse beyond max speed (knockback, boost pad)
        player.body.velocity.x = 12.0;
        player.logic_step(&run(1.0), DT);
        assert_eq!(player.body.target_velocity.x, 12.0);

        // Steering against it clamps to max speed
        player.logic_step(&run(-1.0), DT);
        assert_eq!(player.body.target_velocity.x, -7.0);
    }

    #[test]
    fn test_facing_deadzone() {
        let world = create_test_world();
        let mut player = grounded_player(&world);
        assert_eq!(player.facing(), Facing::Right);

        player.logic_step(&run(-0.5), DT);
        assert_eq!(player.facing(), Facing::Left);

        // Noise inside the deadzone holds the last facing
        player.logic_step(&run(0.005), DT);
        assert_eq!(player.facing(), Facing::Left);
    }
}
