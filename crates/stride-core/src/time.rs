//! Game clock for Stride hosts
//!
//! Converts variable frame deltas into a whole number of fixed simulation
//! steps. Locomotion runs once per fixed step; camera effects run per frame.

use serde::{Deserialize, Serialize};

/// Configuration for the game clock
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    /// How many simulated seconds pass per real second
    pub time_scale: f32,
    /// Fixed timestep for physics (in seconds)
    pub fixed_timestep: f32,
    /// Maximum delta time to prevent spiral of death
    pub max_delta_time: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            time_scale: 1.0,
            fixed_timestep: 1.0 / 60.0,
            max_delta_time: 0.25,
        }
    }
}

/// Game time tracking
#[derive(Debug, Clone, Default)]
pub struct GameTime {
    /// Configuration
    pub config: TimeConfig,
    /// Time since start in seconds
    pub total_time: f64,
    /// Delta time for this frame (clamped and scaled)
    pub delta_time: f32,
    /// Frame counter
    pub frame_count: u64,
    /// Fixed steps consumed so far
    pub fixed_step_count: u64,
    fixed_accumulator: f32,
}

impl GameTime {
    /// Create a new game time with custom config
    pub fn new(config: TimeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Advance the clock by the raw delta from the previous frame
    pub fn update(&mut self, raw_delta: f32) {
        let clamped = raw_delta.clamp(0.0, self.config.max_delta_time.max(0.0));
        self.frame_count += 1;

        self.delta_time = clamped * self.config.time_scale;
        self.total_time += self.delta_time as f64;
        self.fixed_accumulator += self.delta_time;
    }

    /// Drain the accumulator and return how many fixed steps to run this frame
    pub fn fixed_steps(&mut self) -> u32 {
        let step = self.config.fixed_timestep;
        if step <= 0.0 {
            return 0;
        }

        let mut steps = 0;
        while self.fixed_accumulator >= step {
            self.fixed_accumulator -= step;
            steps += 1;
        }
        self.fixed_step_count += steps as u64;
        steps
    }

    /// The fixed timestep in seconds
    pub fn fixed_delta(&self) -> f32 {
        self.config.fixed_timestep
    }

    /// Simulated time covered by fixed steps so far
    pub fn fixed_time(&self) -> f64 {
        self.fixed_step_count as f64 * self.config.fixed_timestep as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_time() {
        let mut time = GameTime::default();
        time.update(0.016);

        assert!(time.delta_time > 0.0);
        assert_eq!(time.frame_count, 1);
        assert!((time.total_time - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_fixed_steps_accumulate() {
        let mut time = GameTime::new(TimeConfig {
            fixed_timestep: 0.25,
            max_delta_time: 1.0,
            ..Default::default()
        });

        time.update(0.5);
        assert_eq!(time.fixed_steps(), 2);

        time.update(0.125);
        assert_eq!(time.fixed_steps(), 0);
        time.update(0.125);
        assert_eq!(time.fixed_steps(), 1);
        assert_eq!(time.fixed_step_count, 3);
        assert!((time.fixed_time() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_delta_is_clamped() {
        let mut time = GameTime::default();
        time.update(5.0);
        assert_eq!(time.delta_time, time.config.max_delta_time);

        time.update(-1.0);
        assert_eq!(time.delta_time, 0.0);
    }

    #[test]
    fn test_time_scale() {
        let mut time = GameTime::new(TimeConfig {
            time_scale: 2.0,
            ..Default::default()
        });
        time.update(0.1);
        assert!((time.delta_time - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_zero_timestep_runs_no_steps() {
        let mut time = GameTime::new(TimeConfig {
            fixed_timestep: 0.0,
            ..Default::default()
        });
        time.update(0.1);
        assert_eq!(time.fixed_steps(), 0);
    }
}
