//! Locomotion tuning parameters

use serde::{Deserialize, Serialize};

use crate::error::LocomotionError;

/// Locomotion configuration. Read-only once a controller is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocomotionConfig {
    /// Horizontal speed in meters per second
    pub movement_speed: f32,
    /// Vertical speed set when a jump fires
    pub jump_velocity: f32,
    /// How long a jump press is remembered, in seconds
    pub jump_buffer: f32,
    /// How long after leaving the floor a jump is still accepted, in seconds
    pub coyote_time: f32,
    /// Downward acceleration while airborne
    pub gravity: f32,
    /// Lerp rate toward rest when grounded without input (per second)
    pub floor_deceleration: f32,
    /// Lerp rate toward the target velocity while airborne (per second)
    pub air_control: f32,
}

impl Default for LocomotionConfig {
    fn default() -> Self {
        Self {
            movement_speed: 5.0,
            jump_velocity: 4.5,
            jump_buffer: 0.2,
            coyote_time: 0.2,
            gravity: 9.8,
            floor_deceleration: 7.0,
            air_control: 3.0,
        }
    }
}

impl LocomotionConfig {
    /// Check that every parameter is finite and non-negative
    pub fn validate(&self) -> Result<(), LocomotionError> {
        let fields = [
            ("movement_speed", self.movement_speed),
            ("jump_velocity", self.jump_velocity),
            ("jump_buffer", self.jump_buffer),
            ("coyote_time", self.coyote_time),
            ("gravity", self.gravity),
            ("floor_deceleration", self.floor_deceleration),
            ("air_control", self.air_control),
        ];

        for (name, value) in fields {
            if !value.is_finite() {
                return Err(LocomotionError::NonFinite { name, value });
            }
            if value < 0.0 {
                return Err(LocomotionError::Negative { name, value });
            }
        }
        Ok(())
    }

    /// Lerp rate for horizontal velocity given floor contact
    pub fn blend_rate(&self, on_floor: bool) -> f32 {
        if on_floor {
            self.floor_deceleration
        } else {
            self.air_control
        }
    }
}
