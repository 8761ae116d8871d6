//! Player controller with first-person look and buffered jumping

use glam::Vec3;
use stride_physics::{KinematicBody, PhysicsWorld};
use tracing::info;

use crate::camera::{CameraConfig, FirstPersonCamera};
use crate::error::LocomotionError;
use crate::input::InputState;
use crate::locomotion::{LocomotionConfig, LocomotionController, MoveIntent};

use super::PhysicsBody;

/// Player controller handling input, locomotion, collision and camera
pub struct PlayerController {
    /// Jump/coyote timers and the movement blend
    pub locomotion: LocomotionController,
    /// Collision body
    pub body: KinematicBody,
    /// Camera rig
    pub camera: FirstPersonCamera,
}

impl PlayerController {
    /// Create a player controller with default tuning
    pub fn new() -> Self {
        Self {
            locomotion: LocomotionController::default(),
            body: KinematicBody::new(),
            camera: FirstPersonCamera::new(),
        }
    }

    /// Create a player controller with custom tuning
    pub fn with_config(
        locomotion: LocomotionConfig,
        camera: CameraConfig,
    ) -> Result<Self, LocomotionError> {
        Ok(Self {
            locomotion: LocomotionController::try_new(locomotion)?,
            body: KinematicBody::new(),
            camera: FirstPersonCamera::with_config(camera),
        })
    }

    /// Spawn the player in the world at a position
    pub fn spawn(&mut self, physics: &mut PhysicsWorld, position: Vec3) {
        self.body.spawn(physics, position);
        self.locomotion.reset();
        info!(?position, "player spawned");
    }

    /// Teleport the player, dropping velocity and jump timers
    pub fn teleport(&mut self, physics: &mut PhysicsWorld, position: Vec3) {
        self.body.set_position(physics, position);
        self.locomotion.reset();
    }

    /// Get the player's feet position
    pub fn position(&self) -> Vec3 {
        self.body.position
    }

    /// Camera position including head bob
    pub fn eye_position(&self) -> Vec3 {
        self.camera.eye_position(self.body.eye_position())
    }

    /// Post-collision velocity
    pub fn velocity(&self) -> Vec3 {
        self.body.velocity
    }

    /// Check if the player is standing on the floor
    pub fn is_on_floor(&self) -> bool {
        self.body.is_on_floor()
    }

    /// This frame's movement intent, turned by the current body yaw.
    ///
    /// When a frame runs several fixed steps, pass the intent to the first
    /// step and [`MoveIntent::without_edges`] to the rest.
    pub fn intent(&self, input: &InputState) -> MoveIntent {
        MoveIntent::from_input(input, self.camera.body_rotation())
    }

    /// Per-frame update: camera look and effects
    pub fn frame_update(&mut self, input: &InputState, dt: f32) {
        let max_speed = self.locomotion.config().movement_speed;
        self.camera
            .update(input, self.body.velocity, self.body.is_on_floor(), max_speed, dt);
    }

    /// Fixed-step update: run locomotion against the collision world
    pub fn fixed_update(&mut self, physics: &mut PhysicsWorld, intent: MoveIntent, dt: f32) -> Vec3 {
        let mut host = PhysicsBody::new(&mut self.body, physics);
        self.locomotion.drive(&mut host, intent, dt)
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{InputAction, InputHandler};

    const DT: f32 = 1.0 / 60.0;

    fn world_with_ground() -> PhysicsWorld {
        let mut world = PhysicsWorld::new();
        world.create_ground(0.0);
        world.refresh_queries();
        world
    }

    fn settle(player: &mut PlayerController, physics: &mut PhysicsWorld) {
        for _ in 0..120 {
            player.fixed_update(physics, MoveIntent::default(), DT);
        }
    }

    #[test]
    fn test_player_controller_creation() {
        let player = PlayerController::new();
        assert_eq!(player.position(), Vec3::ZERO);
        assert!(!player.is_on_floor());
    }

    #[test]
    fn test_invalid_tuning_is_rejected() {
        let config = LocomotionConfig {
            jump_velocity: -1.0,
            ..Default::default()
        };
        assert!(PlayerController::with_config(config, CameraConfig::default()).is_err());
    }

    #[test]
    fn test_player_falls_and_lands() {
        let mut physics = world_with_ground();
        let mut player = PlayerController::new();
        player.spawn(&mut physics, Vec3::new(0.0, 2.0, 0.0));

        settle(&mut player, &mut physics);

        assert!(player.is_on_floor());
        assert!(player.position().y < 0.1);
        assert_eq!(player.velocity().y, 0.0);
        assert_eq!(player.locomotion.state().coyote_remaining, 0.2);
    }

    #[test]
    fn test_settled_player_stays_grounded() {
        let mut physics = world_with_ground();
        let mut player = PlayerController::new();
        player.spawn(&mut physics, Vec3::new(0.0, 2.0, 0.0));
        settle(&mut player, &mut physics);
        let rest = player.position().y;

        for tick in 0..40 {
            let velocity = player.fixed_update(&mut physics, MoveIntent::default(), DT);
            assert!(player.is_on_floor(), "lost floor contact on tick {tick}");
            assert_eq!(velocity, Vec3::ZERO);
            assert_eq!(player.locomotion.state().coyote_remaining, 0.2);
            assert!((player.position().y - rest).abs() < 1e-3);
        }
    }

    #[test]
    fn test_walking_keeps_floor_contact() {
        let mut physics = world_with_ground();
        let mut player = PlayerController::new();
        player.spawn(&mut physics, Vec3::new(0.0, 0.5, 0.0));
        settle(&mut player, &mut physics);

        let intent = MoveIntent {
            direction: Vec3::NEG_Z,
            ..Default::default()
        };
        for tick in 0..40 {
            player.fixed_update(&mut physics, intent, DT);
            assert!(player.is_on_floor(), "lost floor contact on tick {tick}");
        }
        assert!(player.position().z < -3.0);
    }

    #[test]
    fn test_walk_forward_follows_yaw() {
        let mut physics = world_with_ground();
        let mut player = PlayerController::new();
        player.spawn(&mut physics, Vec3::new(0.0, 0.5, 0.0));
        settle(&mut player, &mut physics);

        let mut input = InputHandler::new();
        input.handle_action(InputAction::MoveForward, true);
        player.camera.yaw = 90.0;

        let start = player.position();
        for _ in 0..30 {
            let intent = player.intent(&input.state);
            player.fixed_update(&mut physics, intent, DT);
            input.end_frame();
        }

        let moved = player.position() - start;
        assert!(moved.x < -1.0);
        assert!(moved.z.abs() < 0.1);
    }

    #[test]
    fn test_teleport_resets_locomotion() {
        let mut physics = world_with_ground();
        let mut player = PlayerController::new();
        player.spawn(&mut physics, Vec3::new(0.0, 3.0, 0.0));
        player.fixed_update(&mut physics, MoveIntent::default(), DT);
        assert!(player.locomotion.velocity().y < 0.0);

        player.teleport(&mut physics, Vec3::new(10.0, 3.0, 0.0));
        assert_eq!(player.position(), Vec3::new(10.0, 3.0, 0.0));
        assert_eq!(player.locomotion.velocity(), Vec3::ZERO);
        assert_eq!(player.velocity(), Vec3::ZERO);
    }
}
