//! Stride Game - first-person locomotion
//!
//! Provides the locomotion controller, input mapping, the first-person camera
//! rig and a player controller that ties them to a collision body.

pub mod camera;
mod error;
pub mod input;
pub mod locomotion;
pub mod player;

pub use camera::{CameraConfig, CameraPose, FirstPersonCamera};
pub use error::LocomotionError;
pub use input::{InputAction, InputBindings, InputHandler, InputState};
pub use locomotion::{
    LocomotionBody, LocomotionConfig, LocomotionController, LocomotionState, MoveIntent,
    TickInput,
};
pub use player::{PhysicsBody, PlayerController};
