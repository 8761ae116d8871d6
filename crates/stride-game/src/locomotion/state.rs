use glam::Vec3;

/// Per-entity locomotion state, mutated once per fixed tick.
///
/// Both timers stay at or above zero. A fired jump empties the jump buffer in
/// the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LocomotionState {
    /// Velocity carried between ticks
    pub velocity: Vec3,
    /// Seconds left during which a jump press is remembered
    pub jump_buffer_remaining: f32,
    /// Seconds left during which a jump is accepted after leaving the floor
    pub coyote_remaining: f32,
    /// Floor contact reported on the previous tick
    pub on_floor: bool,
}

impl LocomotionState {
    /// Horizontal part of the velocity
    pub fn horizontal_velocity(&self) -> Vec3 {
        Vec3::new(self.velocity.x, 0.0, self.velocity.z)
    }

    /// Vertical part of the velocity
    pub fn vertical_velocity(&self) -> f32 {
        self.velocity.y
    }
}
