//! Host settings with TOML persistence
//!
//! Looked up at `<config dir>/stride/settings.toml` unless a path is given.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use stride_core::TimeConfig;
use stride_game::{CameraConfig, InputAction, LocomotionConfig};
use tracing::{info, warn};

use crate::script::ScriptEvent;

/// All host settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub locomotion: LocomotionConfig,
    pub camera: CameraConfig,
    pub simulation: SimulationSettings,
    /// Scripted input played back by the headless host
    pub script: Vec<ScriptEvent>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locomotion: LocomotionConfig::default(),
            camera: CameraConfig::default(),
            simulation: SimulationSettings::default(),
            script: default_script(),
        }
    }
}

impl Settings {
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("stride"))
    }

    /// Default settings file path
    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings.
    ///
    /// An explicit path must exist and parse. The default location falls back
    /// to built-in defaults when missing or unreadable.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let settings = match path {
            Some(path) => Self::read(path)?,
            None => Self::load_default(),
        };
        settings.validate()?;
        Ok(settings)
    }

    fn load_default() -> Self {
        let Some(path) = Self::default_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match Self::read(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {:?}", path))?;
        let settings = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse settings file {:?}", path))?;
        info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Parse settings from TOML text; missing fields keep their defaults
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> anyhow::Result<()> {
        self.locomotion
            .validate()
            .context("Invalid [locomotion] settings")?;

        let sim = &self.simulation;
        let positive = [
            ("simulation.time.fixed_timestep", sim.time.fixed_timestep),
            ("simulation.time.time_scale", sim.time.time_scale),
            ("simulation.time.max_delta_time", sim.time.max_delta_time),
            ("simulation.frame_delta", sim.frame_delta),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                anyhow::bail!("{} must be positive, got {}", name, value);
            }
        }
        if let Some(event) = self.script.iter().find(|e| !(e.at >= 0.0)) {
            anyhow::bail!("script event for {:?} has invalid time {}", event.action, event.at);
        }
        Ok(())
    }

    /// Save settings to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }

        let path = dir.join("settings.toml");
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// Headless run parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Simulated seconds to run
    pub duration: f32,
    /// Frame delta fed to the clock each frame
    pub frame_delta: f32,
    /// Height above the ground at which the player spawns
    pub spawn_height: f32,
    /// Seconds between status lines
    pub report_interval: f32,
    /// Clock configuration
    pub time: TimeConfig,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            duration: 5.0,
            frame_delta: 1.0 / 60.0,
            spawn_height: 0.5,
            report_interval: 0.5,
            time: TimeConfig::default(),
        }
    }
}

fn default_script() -> Vec<ScriptEvent> {
    use InputAction::*;

    vec![
        ScriptEvent::new(0.5, MoveForward, true),
        ScriptEvent::new(1.0, Jump, true),
        ScriptEvent::new(1.1, Jump, false),
        ScriptEvent::new(2.0, MoveRight, true),
        ScriptEvent::new(2.5, MoveRight, false),
        ScriptEvent::new(3.0, MoveForward, false),
        ScriptEvent::new(3.5, Jump, true),
        ScriptEvent::new(3.55, Jump, false),
    ]
}
