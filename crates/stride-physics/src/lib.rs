//! Stride Physics - host-side collision using rapier3d
//!
//! Stride does not solve collisions itself. This crate plays the host's part:
//! it owns the collider world and moves a kinematic body with
//! move-and-slide semantics, reporting floor contact and the post-collision
//! velocity back to whoever drives it.

mod kinematic_body;

pub use kinematic_body::{BodyConfig, KinematicBody};

use nalgebra::Unit;
use rapier3d::prelude::*;

/// Static collider world a kinematic body moves through
pub struct PhysicsWorld {
    /// Rigid body storage (colliders here have no parent body)
    pub rigid_body_set: RigidBodySet,
    /// Collider storage
    pub collider_set: ColliderSet,

    query_pipeline: QueryPipeline,
}

impl PhysicsWorld {
    /// Create an empty world
    pub fn new() -> Self {
        Self {
            rigid_body_set: RigidBodySet::new(),
            collider_set: ColliderSet::new(),
            query_pipeline: QueryPipeline::new(),
        }
    }

    /// Rebuild the query pipeline after colliders were added or moved
    pub fn refresh_queries(&mut self) {
        self.query_pipeline.update(&self.collider_set);
    }

    /// Query pipeline used by shape casts
    pub fn query_pipeline(&self) -> &QueryPipeline {
        &self.query_pipeline
    }

    /// Add a static collider (ground, walls, etc.)
    pub fn add_static_collider(&mut self, collider: Collider) -> ColliderHandle {
        self.collider_set.insert(collider)
    }

    /// Create an infinite ground plane at height `y`
    pub fn create_ground(&mut self, y: f32) -> ColliderHandle {
        let normal = Unit::new_normalize(vector![0.0, 1.0, 0.0]);
        let ground = ColliderBuilder::halfspace(normal)
            .translation(vector![0.0, y, 0.0])
            .friction(0.7)
            .restitution(0.0)
            .build();
        self.add_static_collider(ground)
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_creation() {
        let mut world = PhysicsWorld::new();
        let ground = world.create_ground(1.5);

        let collider = world.collider_set.get(ground).expect("ground collider");
        assert!((collider.translation().y - 1.5).abs() < 1e-6);
        assert_eq!(world.collider_set.len(), 1);
    }

    #[test]
    fn test_ground_is_visible_to_queries_after_refresh() {
        let mut world = PhysicsWorld::new();
        world.create_ground(0.0);
        world.refresh_queries();

        let ray = Ray::new(point![0.0, 10.0, 0.0], vector![0.0, -1.0, 0.0]);
        let hit = world.query_pipeline().cast_ray(
            &world.rigid_body_set,
            &world.collider_set,
            &ray,
            100.0,
            true,
            QueryFilter::default(),
        );
        let (_, toi) = hit.expect("ray should hit the ground plane");
        assert!((toi - 10.0).abs() < 0.01);
    }
}
