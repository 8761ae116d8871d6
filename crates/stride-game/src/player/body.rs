use glam::Vec3;
use stride_physics::{KinematicBody, PhysicsWorld};

use crate::locomotion::LocomotionBody;

/// A [`KinematicBody`] borrowed together with the world it moves through
pub struct PhysicsBody<'a> {
    body: &'a mut KinematicBody,
    physics: &'a mut PhysicsWorld,
}

impl<'a> PhysicsBody<'a> {
    pub fn new(body: &'a mut KinematicBody, physics: &'a mut PhysicsWorld) -> Self {
        Self { body, physics }
    }
}

impl LocomotionBody for PhysicsBody<'_> {
    fn is_on_floor(&self) -> bool {
        self.body.is_on_floor()
    }

    fn velocity(&self) -> Vec3 {
        self.body.velocity
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.body.velocity = velocity;
    }

    fn move_and_slide(&mut self, dt: f32) {
        self.body.move_and_slide(self.physics, dt);
    }
}
