//! First-person camera rig
//!
//! Mouse look plus cosmetic effects (head bob, speed FOV, strafe tilt). The
//! rig reads locomotion output but never feeds back into it.

mod config;
mod controller;

pub use config::CameraConfig;
pub use controller::{CameraPose, FirstPersonCamera};
