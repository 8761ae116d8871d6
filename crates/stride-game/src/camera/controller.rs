//! First-person camera with mouse look and movement effects

use glam::{EulerRot, Quat, Vec2, Vec3};

use crate::input::InputState;

use super::CameraConfig;

/// Everything a renderer needs to place the camera for a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Body yaw in degrees
    pub yaw: f32,
    /// Head pitch in degrees
    pub pitch: f32,
    /// Camera roll in degrees
    pub roll: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Head bob offset in head space
    pub bob_offset: Vec3,
}

/// First-person camera
pub struct FirstPersonCamera {
    /// Configuration
    pub config: CameraConfig,
    /// Body yaw in degrees
    pub yaw: f32,
    /// Head pitch in degrees
    pub pitch: f32,
    roll: f32,
    fov: f32,
    bob_time: f32,
    bob_offset: Vec3,
}

impl FirstPersonCamera {
    /// Create a new camera with default config
    pub fn new() -> Self {
        Self::with_config(CameraConfig::default())
    }

    /// Create a camera with custom config
    pub fn with_config(config: CameraConfig) -> Self {
        let fov = config.base_fov;
        Self {
            config,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            fov,
            bob_time: 0.0,
            bob_offset: Vec3::ZERO,
        }
    }

    /// Current field of view in degrees
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Current roll in degrees
    pub fn roll(&self) -> f32 {
        self.roll
    }

    /// Current head bob offset
    pub fn bob_offset(&self) -> Vec3 {
        self.bob_offset
    }

    /// Snapshot of the camera for rendering
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            yaw: self.yaw,
            pitch: self.pitch,
            roll: self.roll,
            fov: self.fov,
            bob_offset: self.bob_offset,
        }
    }

    /// Rotation of the body around +Y; used to turn input into world space
    pub fn body_rotation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw.to_radians())
    }

    /// World-space camera position for a given eye position
    pub fn eye_position(&self, eye: Vec3) -> Vec3 {
        let head = Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            0.0,
        );
        eye + head * self.bob_offset
    }

    /// Handle mouse look input
    pub fn handle_mouse_look(&mut self, mouse_delta: Vec2) {
        self.yaw -= mouse_delta.x * self.config.sensitivity.x;
        self.set_pitch(self.pitch - mouse_delta.y * self.config.sensitivity.y);
    }

    /// Set the pitch directly, clamped to the configured range
    pub fn set_pitch(&mut self, pitch: f32) {
        let max = self.config.pitch_max.max(self.config.pitch_min);
        self.pitch = pitch.clamp(self.config.pitch_min, max);
    }

    /// Per-frame update: mouse look while the cursor is captured, then effects
    pub fn update(
        &mut self,
        input: &InputState,
        velocity: Vec3,
        on_floor: bool,
        max_speed: f32,
        dt: f32,
    ) {
        if input.cursor_captured {
            self.handle_mouse_look(input.mouse_delta);
        }
        self.apply_effects(velocity, on_floor, input.strafe_axis(), max_speed, dt);
    }

    /// Head bob, speed FOV and strafe tilt
    pub fn apply_effects(
        &mut self,
        velocity: Vec3,
        on_floor: bool,
        strafe: f32,
        max_speed: f32,
        dt: f32,
    ) {
        let config = &self.config;
        let t = (dt * config.smoothing_rate).clamp(0.0, 1.0);

        if config.head_bob {
            if on_floor {
                self.bob_time += dt * velocity.length();
            }
            let phase = self.bob_time * config.bob_frequency;
            self.bob_offset = Vec3::new(
                (phase / 2.0).cos() * config.bob_amplitude,
                phase.sin() * config.bob_amplitude,
                0.0,
            );
        } else {
            self.bob_offset = Vec3::ZERO;
        }

        let floor_speed = Vec2::new(velocity.x, velocity.z).length();
        let speed_cap = (max_speed * 2.0).max(0.5);
        let target_fov = config.base_fov + config.fov_change * floor_speed.clamp(0.5, speed_cap);
        self.fov += (target_fov - self.fov) * t;

        if config.tilt {
            let side = if strafe > 0.0 {
                1.0
            } else if strafe < 0.0 {
                -1.0
            } else {
                0.0
            };
            let target_roll = -config.tilt_amount * side;
            self.roll += (target_roll - self.roll) * t;
        }
    }
}

impl Default for FirstPersonCamera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_camera_creation() {
        let camera = FirstPersonCamera::new();
        assert_eq!(camera.yaw, 0.0);
        assert_eq!(camera.pitch, 0.0);
        assert_eq!(camera.fov(), 75.0);
    }

    #[test]
    fn test_mouse_look_turns_and_clamps() {
        let mut camera = FirstPersonCamera::new();
        camera.handle_mouse_look(Vec2::new(100.0, 0.0));
        assert!((camera.yaw + 10.0).abs() < 1e-4);

        camera.handle_mouse_look(Vec2::new(0.0, -10_000.0));
        assert_eq!(camera.pitch, 85.0);

        camera.handle_mouse_look(Vec2::new(0.0, 10_000.0));
        assert_eq!(camera.pitch, -75.0);
    }

    #[test]
    fn test_mouse_look_needs_captured_cursor() {
        let mut camera = FirstPersonCamera::new();
        let mut input = InputState::new();
        input.mouse_delta = Vec2::new(50.0, 50.0);

        camera.update(&input, Vec3::ZERO, true, 5.0, DT);
        assert_eq!(camera.yaw, 0.0);

        input.cursor_captured = true;
        camera.update(&input, Vec3::ZERO, true, 5.0, DT);
        assert!(camera.yaw < 0.0);
        assert!(camera.pitch < 0.0);
    }

    #[test]
    fn test_head_bob_only_advances_when_walking() {
        let mut camera = FirstPersonCamera::new();
        camera.apply_effects(Vec3::ZERO, true, 0.0, 5.0, DT);
        let resting = camera.bob_offset();

        camera.apply_effects(Vec3::new(0.0, -3.0, 0.0), false, 0.0, 5.0, DT);
        assert_eq!(camera.bob_offset(), resting);

        camera.apply_effects(Vec3::new(5.0, 0.0, 0.0), true, 0.0, 5.0, 0.1);
        assert_ne!(camera.bob_offset(), resting);
        assert!(camera.bob_offset().y.abs() <= camera.config.bob_amplitude);
    }

    #[test]
    fn test_head_bob_disabled() {
        let mut camera = FirstPersonCamera::with_config(CameraConfig {
            head_bob: false,
            ..Default::default()
        });
        camera.apply_effects(Vec3::new(5.0, 0.0, 0.0), true, 0.0, 5.0, 0.1);
        assert_eq!(camera.bob_offset(), Vec3::ZERO);
    }

    #[test]
    fn test_fov_widens_with_speed() {
        let mut camera = FirstPersonCamera::new();
        for _ in 0..600 {
            camera.apply_effects(Vec3::new(5.0, 0.0, 0.0), true, 0.0, 5.0, DT);
        }
        assert!((camera.fov() - 82.5).abs() < 0.01);

        for _ in 0..600 {
            camera.apply_effects(Vec3::ZERO, true, 0.0, 5.0, DT);
        }
        assert!((camera.fov() - 75.75).abs() < 0.01);
    }

    #[test]
    fn test_tilt_follows_strafe_direction() {
        let mut camera = FirstPersonCamera::new();
        for _ in 0..600 {
            camera.apply_effects(Vec3::ZERO, true, 1.0, 5.0, DT);
        }
        assert!((camera.roll() + 5.0).abs() < 0.01);

        for _ in 0..600 {
            camera.apply_effects(Vec3::ZERO, true, 0.0, 5.0, DT);
        }
        assert!(camera.roll().abs() < 0.01);

        camera.apply_effects(Vec3::ZERO, true, -1.0, 5.0, DT);
        assert!(camera.roll() > 0.0);
    }

    #[test]
    fn test_body_rotation_matches_yaw() {
        let mut camera = FirstPersonCamera::new();
        camera.yaw = 90.0;
        let forward = camera.body_rotation() * Vec3::NEG_Z;
        assert!((forward - Vec3::NEG_X).length() < 1e-5);
    }
}
