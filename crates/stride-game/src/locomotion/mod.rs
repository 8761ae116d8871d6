//! Locomotion controller
//!
//! Jump buffering, coyote time and the floor/air horizontal blend. Engine
//! plumbing stays on the other side of [`LocomotionBody`] and [`MoveIntent`].

mod body;
mod config;
mod controller;
mod state;

pub use body::LocomotionBody;
pub use config::LocomotionConfig;
pub use controller::{LocomotionController, MoveIntent, TickInput};
pub use state::LocomotionState;
