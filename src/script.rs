//! Scripted input playback for the headless host

use serde::{Deserialize, Serialize};
use stride_game::{InputAction, InputHandler};
use tracing::debug;

/// A press or release at a point in simulated time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptEvent {
    /// Seconds since start
    pub at: f32,
    pub action: InputAction,
    pub pressed: bool,
}

impl ScriptEvent {
    pub fn new(at: f32, action: InputAction, pressed: bool) -> Self {
        Self {
            at,
            action,
            pressed,
        }
    }
}

/// Plays script events into an [`InputHandler`] as time advances
pub struct InputScript {
    events: Vec<ScriptEvent>,
    cursor: usize,
}

impl InputScript {
    pub fn new(mut events: Vec<ScriptEvent>) -> Self {
        events.sort_by(|a, b| a.at.total_cmp(&b.at));
        Self { events, cursor: 0 }
    }

    /// Deliver every event due at or before `time`; returns how many fired.
    ///
    /// Compared at `f32` precision, the precision event times are written in.
    pub fn apply_until(&mut self, time: f64, input: &mut InputHandler) -> usize {
        let time = time as f32;
        let start = self.cursor;
        while let Some(event) = self.events.get(self.cursor) {
            if event.at > time {
                break;
            }
            debug!(at = event.at, action = ?event.action, pressed = event.pressed, "script");
            input.handle_action(event.action, event.pressed);
            self.cursor += 1;
        }
        self.cursor - start
    }

    /// Whether every event has been delivered
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_fire_in_time_order() {
        let mut script = InputScript::new(vec![
            ScriptEvent::new(0.2, InputAction::Jump, false),
            ScriptEvent::new(0.1, InputAction::Jump, true),
        ]);
        let mut input = InputHandler::new();

        assert_eq!(script.apply_until(0.05, &mut input), 0);

        assert_eq!(script.apply_until(0.1, &mut input), 1);
        assert!(input.state.is_just_pressed(InputAction::Jump));
        input.end_frame();

        assert_eq!(script.apply_until(1.0, &mut input), 1);
        assert!(input.state.is_just_released(InputAction::Jump));
        assert!(script.is_finished());
    }

    #[test]
    fn test_event_fires_on_the_frame_its_time_is_reached() {
        let mut script = InputScript::new(vec![ScriptEvent::new(1.1, InputAction::Jump, true)]);
        let mut input = InputHandler::new();

        // Frame clock accumulated in f64 from f32 deltas
        let mut time = 0.0f64;
        let mut frames = 0;
        while script.apply_until(time, &mut input) == 0 {
            time += (0.1f32) as f64;
            frames += 1;
            assert!(frames <= 11, "event not delivered by t={time}");
        }
        assert!(input.state.is_just_pressed(InputAction::Jump));
    }

    #[test]
    fn test_simultaneous_events_all_fire() {
        let mut script = InputScript::new(vec![
            ScriptEvent::new(0.5, InputAction::MoveForward, true),
            ScriptEvent::new(0.5, InputAction::MoveLeft, true),
        ]);
        let mut input = InputHandler::new();

        assert_eq!(script.apply_until(0.5, &mut input), 2);
        assert!(input.state.is_held(InputAction::MoveForward));
        assert!(input.state.is_held(InputAction::MoveLeft));
    }
}
