//! Fixed-tick locomotion decision policy

use glam::Vec3;
use tracing::{debug, trace};

use crate::error::LocomotionError;

use super::{LocomotionBody, LocomotionConfig, LocomotionState};

/// Everything the controller needs from the host for one tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickInput {
    /// Whether the body is standing on walkable ground
    pub is_on_floor: bool,
    /// World-space movement direction, zero when there is no input
    pub move_direction: Vec3,
    /// Jump went down since the previous tick
    pub jump_pressed: bool,
    /// Jump went up since the previous tick
    pub jump_released: bool,
}

/// Player intent for a tick before floor contact is known
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MoveIntent {
    /// World-space movement direction, zero when there is no input
    pub direction: Vec3,
    /// Jump went down since the previous tick
    pub jump_pressed: bool,
    /// Jump went up since the previous tick
    pub jump_released: bool,
}

impl MoveIntent {
    /// Same direction with the jump edges dropped, for extra fixed steps in
    /// a frame whose edges were already delivered
    pub fn without_edges(self) -> Self {
        Self {
            direction: self.direction,
            ..Default::default()
        }
    }

    /// Combine with the host's floor contact
    pub fn into_tick_input(self, is_on_floor: bool) -> TickInput {
        TickInput {
            is_on_floor,
            move_direction: self.direction,
            jump_pressed: self.jump_pressed,
            jump_released: self.jump_released,
        }
    }
}

/// Turns floor contact, direction and jump edges into a velocity each tick
#[derive(Debug, Clone)]
pub struct LocomotionController {
    config: LocomotionConfig,
    state: LocomotionState,
}

impl LocomotionController {
    /// Create a controller at rest
    pub fn new(config: LocomotionConfig) -> Self {
        Self {
            config,
            state: LocomotionState::default(),
        }
    }

    /// Create a controller after validating its configuration
    pub fn try_new(config: LocomotionConfig) -> Result<Self, LocomotionError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Configuration this controller was built with
    pub fn config(&self) -> &LocomotionConfig {
        &self.config
    }

    /// Current timers and velocity
    pub fn state(&self) -> &LocomotionState {
        &self.state
    }

    /// Velocity carried into the next tick
    pub fn velocity(&self) -> Vec3 {
        self.state.velocity
    }

    /// Whether a jump would be accepted right now
    pub fn can_jump(&self) -> bool {
        self.state.coyote_remaining > 0.0
    }

    /// Whether a jump press is still remembered
    pub fn jump_buffered(&self) -> bool {
        self.state.jump_buffer_remaining > 0.0
    }

    /// Return to spawn state, keeping the configuration
    pub fn reset(&mut self) {
        self.state = LocomotionState::default();
    }

    /// Adopt the host's post-collision velocity for the next tick
    pub fn sync_velocity(&mut self, corrected: Vec3) {
        self.state.velocity = corrected;
    }

    /// Advance one fixed tick and return the velocity the host should apply.
    ///
    /// `dt` is trusted to be a small positive step.
    pub fn tick(&mut self, input: TickInput, dt: f32) -> Vec3 {
        let config = &self.config;
        let state = &mut self.state;

        if input.is_on_floor {
            if !state.on_floor {
                trace!(vertical = state.velocity.y, "landed");
            }
            state.coyote_remaining = config.coyote_time;
            // Floor contact absorbs downward speed; take-off speed survives.
            state.velocity.y = state.velocity.y.max(0.0);
        } else {
            if state.on_floor {
                trace!("left floor");
            }
            state.velocity.y -= config.gravity * dt;
            state.coyote_remaining = (state.coyote_remaining - dt).max(0.0);
        }
        state.on_floor = input.is_on_floor;

        if input.jump_pressed {
            state.jump_buffer_remaining = config.jump_buffer;
        } else {
            state.jump_buffer_remaining = (state.jump_buffer_remaining - dt).max(0.0);
        }

        if state.jump_buffer_remaining > 0.0 && state.coyote_remaining > 0.0 {
            debug!(
                on_floor = input.is_on_floor,
                coyote_remaining = state.coyote_remaining,
                "jump"
            );
            state.velocity.y = config.jump_velocity;
            state.jump_buffer_remaining = 0.0;
        }

        // Releasing early closes the coyote window; it does not cut the jump.
        if input.jump_released && state.velocity.y > 0.0 {
            if state.coyote_remaining > 0.0 {
                trace!("coyote window closed by release");
            }
            state.coyote_remaining = 0.0;
        }

        let target = Vec3::new(input.move_direction.x, 0.0, input.move_direction.z)
            * config.movement_speed;
        let steering = input.move_direction != Vec3::ZERO;

        let horizontal = if input.is_on_floor && steering {
            target
        } else {
            let t = (dt * config.blend_rate(input.is_on_floor)).clamp(0.0, 1.0);
            state.horizontal_velocity().lerp(target, t)
        };
        state.velocity.x = horizontal.x;
        state.velocity.z = horizontal.z;

        state.velocity
    }

    /// Run one tick against a host body using the two-phase contract:
    /// read the host's velocity and floor contact, tick, write the result,
    /// let the host move, then keep its corrected velocity.
    ///
    /// Returns the post-collision velocity.
    pub fn drive<B>(&mut self, body: &mut B, intent: MoveIntent, dt: f32) -> Vec3
    where
        B: LocomotionBody + ?Sized,
    {
        self.sync_velocity(body.velocity());

        let velocity = self.tick(intent.into_tick_input(body.is_on_floor()), dt);
        body.set_velocity(velocity);
        body.move_and_slide(dt);

        self.sync_velocity(body.velocity());
        self.state.velocity
    }
}

impl Default for LocomotionController {
    fn default() -> Self {
        Self::new(LocomotionConfig::default())
    }
}
