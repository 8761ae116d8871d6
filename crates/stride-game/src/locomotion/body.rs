use glam::Vec3;

/// What a host body must expose to be driven by a
/// [`LocomotionController`](super::LocomotionController).
///
/// The host owns collision. `velocity` is read before a tick, written with the
/// controller's output and read again after `move_and_slide` so the
/// controller sees the post-collision value.
pub trait LocomotionBody {
    /// Floor contact as of the last move
    fn is_on_floor(&self) -> bool;

    /// Current velocity as the host sees it
    fn velocity(&self) -> Vec3;

    /// Replace the velocity before the next move
    fn set_velocity(&mut self, velocity: Vec3);

    /// Integrate the velocity against the host's collision world
    fn move_and_slide(&mut self, dt: f32);
}
