//! Camera configuration

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Camera configuration. Angles are in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Degrees of rotation per pixel of mouse motion (x = yaw, y = pitch)
    pub sensitivity: Vec2,
    /// Lowest pitch (looking down)
    pub pitch_min: f32,
    /// Highest pitch (looking up)
    pub pitch_max: f32,
    /// Enable head bob while walking
    pub head_bob: bool,
    /// Head bob frequency
    pub bob_frequency: f32,
    /// Head bob amplitude in meters
    pub bob_amplitude: f32,
    /// Field of view at rest
    pub base_fov: f32,
    /// Extra field of view per meter per second of floor speed
    pub fov_change: f32,
    /// Enable sideways head tilt while strafing
    pub tilt: bool,
    /// Roll applied while strafing
    pub tilt_amount: f32,
    /// Lerp rate for FOV and tilt (per second)
    pub smoothing_rate: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            sensitivity: Vec2::new(0.1, 0.1),
            pitch_min: -75.0,
            pitch_max: 85.0,
            head_bob: true,
            bob_frequency: 2.4,
            bob_amplitude: 0.08,
            base_fov: 75.0,
            fov_change: 1.5,
            tilt: true,
            tilt_amount: 5.0,
            smoothing_rate: 8.0,
        }
    }
}
