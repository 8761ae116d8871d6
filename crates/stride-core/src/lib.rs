//! Stride Core - shared math and timing for the Stride workspace
//!
//! - Mathematical primitives (re-exported from glam)
//! - Game clock with a fixed-timestep accumulator

pub mod time;

pub use glam::{Quat, Vec2, Vec3};
pub use time::{GameTime, TimeConfig};
