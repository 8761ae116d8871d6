//! Kinematic body using rapier3d's kinematic character controller

use glam::Vec3;
use rapier3d::control::{CharacterAutostep, CharacterLength, KinematicCharacterController};
use rapier3d::prelude::*;
use tracing::trace;

use crate::PhysicsWorld;

/// Below this per-step difference an axis counts as unobstructed
const BLOCKED_EPSILON: f32 = 1.0e-4;

/// Extra downward cast, in skin widths, while standing so the floor is still
/// found when the requested move has no downward part
const FLOOR_PROBE_SKINS: f32 = 2.0;

/// Kinematic body configuration
#[derive(Debug, Clone)]
pub struct BodyConfig {
    /// Capsule height (default: 1.8m)
    pub height: f32,
    /// Capsule radius (default: 0.4m)
    pub radius: f32,
    /// Eye height above the feet (default: 1.6m)
    pub eye_height: f32,
    /// Maximum walkable slope in degrees (default: 45)
    pub max_slope_angle: f32,
    /// Step height for climbing stairs (default: 0.25m)
    pub step_height: f32,
    /// Skin width for collision detection (default: 0.02m)
    pub skin_width: f32,
    /// Whether to snap to ground when walking down slopes
    pub snap_to_ground: bool,
    /// Maximum ground snap distance
    pub ground_snap_distance: f32,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            height: 1.8,
            radius: 0.4,
            eye_height: 1.6,
            max_slope_angle: 45.0,
            step_height: 0.25,
            skin_width: 0.02,
            snap_to_ground: true,
            ground_snap_distance: 0.2,
        }
    }
}

/// Capsule body moved with move-and-slide semantics.
///
/// `velocity` is read before a move and rewritten afterwards with the
/// post-collision value: vertical speed is dropped on landing and on ceiling
/// hits, and horizontal components blocked by walls take the speed that was
/// actually achieved.
pub struct KinematicBody {
    /// Configuration
    pub config: BodyConfig,
    /// Feet position
    pub position: Vec3,
    /// Current velocity
    pub velocity: Vec3,
    on_floor: bool,
    collider_handle: Option<ColliderHandle>,
    controller: KinematicCharacterController,
}

impl KinematicBody {
    /// Create a new body with default config
    pub fn new() -> Self {
        Self::with_config(BodyConfig::default())
    }

    /// Create a new body with custom config
    pub fn with_config(config: BodyConfig) -> Self {
        let mut controller = KinematicCharacterController::default();
        controller.max_slope_climb_angle = config.max_slope_angle.to_radians();
        controller.min_slope_slide_angle = config.max_slope_angle.to_radians();
        controller.autostep = Some(CharacterAutostep {
            max_height: CharacterLength::Absolute(config.step_height),
            min_width: CharacterLength::Relative(0.5),
            include_dynamic_bodies: true,
        });
        controller.snap_to_ground = if config.snap_to_ground {
            Some(CharacterLength::Absolute(config.ground_snap_distance))
        } else {
            None
        };
        controller.offset = CharacterLength::Absolute(config.skin_width);

        Self {
            config,
            position: Vec3::ZERO,
            velocity: Vec3::ZERO,
            on_floor: false,
            collider_handle: None,
            controller,
        }
    }

    /// Insert the body's capsule into the world with its feet at `position`
    pub fn spawn(&mut self, physics: &mut PhysicsWorld, position: Vec3) -> ColliderHandle {
        self.position = position;
        self.velocity = Vec3::ZERO;
        self.on_floor = false;

        let half_height = (self.config.height - 2.0 * self.config.radius) / 2.0;
        let center = self.center_position();
        let collider = ColliderBuilder::capsule_y(half_height.max(0.01), self.config.radius)
            .translation(vector![center.x, center.y, center.z])
            .friction(0.0)
            .restitution(0.0)
            .build();

        let handle = physics.add_static_collider(collider);
        self.collider_handle = Some(handle);
        handle
    }

    /// Move by `velocity * dt`, sliding along whatever is hit
    pub fn move_and_slide(&mut self, physics: &mut PhysicsWorld, dt: f32) {
        if dt <= 0.0 {
            return;
        }

        let desired = self.velocity * dt;
        let mut cast = desired;
        if self.on_floor && desired.y <= 0.0 {
            cast.y -= FLOOR_PROBE_SKINS * self.config.skin_width;
        }
        let Some(applied) = self.move_shape(physics, cast, dt) else {
            return;
        };

        let on_ceiling = desired.y > 0.0 && applied.y < desired.y - BLOCKED_EPSILON;

        let mut corrected = self.velocity;
        if (applied.x - desired.x).abs() > BLOCKED_EPSILON {
            corrected.x = applied.x / dt;
        }
        if (applied.z - desired.z).abs() > BLOCKED_EPSILON {
            corrected.z = applied.z / dt;
        }
        if (self.on_floor && corrected.y < 0.0) || (on_ceiling && corrected.y > 0.0) {
            corrected.y = 0.0;
        }

        trace!(
            desired = ?desired,
            applied = ?applied,
            on_floor = self.on_floor,
            "move_and_slide"
        );
        self.velocity = corrected;
    }

    fn move_shape(&mut self, physics: &mut PhysicsWorld, desired: Vec3, dt: f32) -> Option<Vec3> {
        let collider_handle = self.collider_handle?;
        let collider = physics.collider_set.get(collider_handle)?;

        let shape = collider.shape();
        let center = self.center_position();
        let current_pos = Isometry::translation(center.x, center.y, center.z);

        let movement = self.controller.move_shape(
            dt,
            &physics.rigid_body_set,
            &physics.collider_set,
            physics.query_pipeline(),
            shape,
            &current_pos,
            vector![desired.x, desired.y, desired.z],
            QueryFilter::default().exclude_collider(collider_handle),
            |_| {},
        );

        self.on_floor = movement.grounded;

        let applied = Vec3::new(
            movement.translation.x,
            movement.translation.y,
            movement.translation.z,
        );
        self.position += applied;
        self.sync_collider(physics);

        Some(applied)
    }

    /// Set the body's position directly (teleport)
    pub fn set_position(&mut self, physics: &mut PhysicsWorld, position: Vec3) {
        self.position = position;
        self.velocity = Vec3::ZERO;
        self.on_floor = false;
        self.sync_collider(physics);
    }

    fn sync_collider(&self, physics: &mut PhysicsWorld) {
        let Some(handle) = self.collider_handle else {
            return;
        };
        let center = self.center_position();
        if let Some(collider) = physics.collider_set.get_mut(handle) {
            collider.set_translation(vector![center.x, center.y, center.z]);
        }
    }

    /// Get the eye position
    pub fn eye_position(&self) -> Vec3 {
        self.position + Vec3::Y * self.config.eye_height.min(self.config.height)
    }

    /// Get the center position (middle of capsule)
    pub fn center_position(&self) -> Vec3 {
        self.position + Vec3::Y * (self.config.height / 2.0)
    }

    /// Whether the last move ended standing on walkable ground
    pub fn is_on_floor(&self) -> bool {
        self.on_floor
    }
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self::new()
    }
}
