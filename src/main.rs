//! Stride - headless first-person locomotion host
//!
//! Builds a collision world with a ground plane, spawns a player and plays a
//! scripted input timeline through the fixed-step loop.

mod script;
mod settings;

use std::ffi::OsStr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use glam::{Vec2, Vec3};
use stride_core::GameTime;
use stride_game::{InputHandler, PlayerController};
use stride_physics::PhysicsWorld;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use script::InputScript;
use settings::Settings;

/// Outcome of a headless run
#[derive(Debug, Clone)]
struct RunSummary {
    fixed_steps: u64,
    final_position: Vec3,
    max_height: f32,
    landings: u32,
    on_floor: bool,
}

fn run(settings: &Settings) -> Result<RunSummary> {
    let mut physics = PhysicsWorld::new();
    physics.create_ground(0.0);
    physics.refresh_queries();

    let mut player = PlayerController::with_config(
        settings.locomotion.clone(),
        settings.camera.clone(),
    )
    .context("Failed to create player")?;
    player.spawn(
        &mut physics,
        Vec3::new(0.0, settings.simulation.spawn_height, 0.0),
    );

    let mut input = InputHandler::new();
    input.set_cursor_captured(true);
    let mut script = InputScript::new(settings.script.clone());
    let mut time = GameTime::new(settings.simulation.time.clone());

    let duration = settings.simulation.duration as f64;
    let report_interval = settings.simulation.report_interval.max(f32::EPSILON) as f64;
    let mut next_report = 0.0;
    let mut was_on_floor = player.is_on_floor();
    let mut max_height = player.position().y;
    let mut landings = 0;

    while time.total_time < duration {
        time.update(settings.simulation.frame_delta);
        script.apply_until(time.total_time, &mut input);

        let intent = player.intent(&input.state);
        let steps = time.fixed_steps();
        for step in 0..steps {
            let intent = if step == 0 {
                intent
            } else {
                intent.without_edges()
            };
            let velocity = player.fixed_update(&mut physics, intent, time.fixed_delta());

            let on_floor = player.is_on_floor();
            if on_floor != was_on_floor {
                if on_floor {
                    landings += 1;
                    debug!(t = time.fixed_time(), "landed");
                } else {
                    debug!(t = time.fixed_time(), vertical = velocity.y, "airborne");
                }
                was_on_floor = on_floor;
            }
            max_height = max_height.max(player.position().y);
            debug!(?velocity, position = ?player.position(), "fixed step");
        }

        player.frame_update(&input.state, time.delta_time);

        // Jump edges wait until a fixed step has consumed them.
        input.state.mouse_delta = Vec2::ZERO;
        if steps > 0 {
            input.state.clear_edges();
        }

        if time.total_time >= next_report {
            let pose = player.camera.pose();
            info!(
                t = format_args!("{:.2}", time.total_time),
                position = ?player.position(),
                eye = ?player.eye_position(),
                velocity = ?player.velocity(),
                on_floor = player.is_on_floor(),
                fov = format_args!("{:.1}", pose.fov),
                roll = format_args!("{:.1}", pose.roll),
                "status"
            );
            next_report += report_interval;
        }
    }

    if !script.is_finished() {
        info!("Simulation ended before the input script finished");
    }

    Ok(RunSummary {
        fixed_steps: time.fixed_step_count,
        final_position: player.position(),
        max_height,
        landings,
        on_floor: player.is_on_floor(),
    })
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set subscriber");

    let arg = std::env::args_os().nth(1);
    if arg.as_deref() == Some(OsStr::new("--write-default-settings")) {
        return Settings::default().save();
    }

    let path = arg.map(PathBuf::from);
    if path.is_none() {
        if let Some(default) = Settings::default_path() {
            debug!("Looking for settings at {:?}", default);
        }
    }
    let settings = Settings::load(path.as_deref())?;

    info!("Starting Stride headless host...");
    let summary = run(&settings)?;
    info!(
        fixed_steps = summary.fixed_steps,
        final_position = ?summary.final_position,
        max_height = format_args!("{:.2}", summary.max_height),
        landings = summary.landings,
        on_floor = summary.on_floor,
        "Run complete"
    );
    Ok(())
}
