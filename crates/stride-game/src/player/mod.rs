//! Player controller module
//!
//! First-person player: input, locomotion, a rapier-backed body and the
//! camera rig, wired together.

mod body;
mod controller;

pub use body::PhysicsBody;
pub use controller::PlayerController;
