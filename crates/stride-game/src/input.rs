//! Input system with action-based mapping
//!
//! Raw window events become actions; actions become a [`MoveIntent`] once per
//! fixed tick. Press/release edges last exactly one frame.

use std::collections::{HashMap, HashSet};

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};
use tracing::debug;
use winit::event::ElementState;
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::locomotion::MoveIntent;

/// Game actions that can be triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputAction {
    /// Move forward (W by default)
    MoveForward,
    /// Move backward (S by default)
    MoveBackward,
    /// Strafe left (A by default)
    MoveLeft,
    /// Strafe right (D by default)
    MoveRight,
    /// Jump (Space by default)
    Jump,
    /// Capture or release the cursor (Escape by default)
    ToggleCursor,
}

/// Current state of all inputs for a frame
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Actions currently held down
    pub held: HashSet<InputAction>,
    /// Actions that were just pressed this frame
    pub just_pressed: HashSet<InputAction>,
    /// Actions that were just released this frame
    pub just_released: HashSet<InputAction>,
    /// Mouse movement delta for this frame, in pixels
    pub mouse_delta: Vec2,
    /// Whether the cursor is captured (invisible, locked)
    pub cursor_captured: bool,
}

impl InputState {
    /// Create a new empty input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an action is currently held
    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.contains(&action)
    }

    /// Check if an action was just pressed this frame
    pub fn is_just_pressed(&self, action: InputAction) -> bool {
        self.just_pressed.contains(&action)
    }

    /// Check if an action was just released this frame
    pub fn is_just_released(&self, action: InputAction) -> bool {
        self.just_released.contains(&action)
    }

    fn axis(&self, negative: InputAction, positive: InputAction) -> f32 {
        let value = |action| if self.is_held(action) { 1.0 } else { 0.0 };
        value(positive) - value(negative)
    }

    /// Strafe axis: -1 left, 1 right, 0 for neither or both
    pub fn strafe_axis(&self) -> f32 {
        self.axis(InputAction::MoveLeft, InputAction::MoveRight)
    }

    /// Movement axes in body space (x = right, y = backward), length at most 1
    pub fn move_vector(&self) -> Vec2 {
        let raw = Vec2::new(
            self.strafe_axis(),
            self.axis(InputAction::MoveForward, InputAction::MoveBackward),
        );
        raw.clamp_length_max(1.0)
    }

    /// Drop press/release edges once a fixed step has seen them
    pub fn clear_edges(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }

    /// Clear frame-specific data (call at end of frame)
    pub fn clear_frame(&mut self) {
        self.clear_edges();
        self.mouse_delta = Vec2::ZERO;
    }
}

impl MoveIntent {
    /// Build this tick's intent from input, rotating the movement axes by the
    /// body's facing. The direction is normalised; no input gives zero.
    pub fn from_input(input: &InputState, body_rotation: Quat) -> Self {
        let axes = input.move_vector();
        let local = Vec3::new(axes.x, 0.0, axes.y);

        Self {
            direction: (body_rotation * local).normalize_or_zero(),
            jump_pressed: input.is_just_pressed(InputAction::Jump),
            jump_released: input.is_just_released(InputAction::Jump),
        }
    }
}

/// Maps physical keys to game actions
#[derive(Debug, Clone)]
pub struct InputBindings {
    bindings: HashMap<KeyCode, InputAction>,
}

impl Default for InputBindings {
    fn default() -> Self {
        let mut bindings = Self {
            bindings: HashMap::new(),
        };

        bindings.bind(KeyCode::KeyW, InputAction::MoveForward);
        bindings.bind(KeyCode::KeyS, InputAction::MoveBackward);
        bindings.bind(KeyCode::KeyA, InputAction::MoveLeft);
        bindings.bind(KeyCode::KeyD, InputAction::MoveRight);

        // Arrow keys as alternative
        bindings.bind(KeyCode::ArrowUp, InputAction::MoveForward);
        bindings.bind(KeyCode::ArrowDown, InputAction::MoveBackward);
        bindings.bind(KeyCode::ArrowLeft, InputAction::MoveLeft);
        bindings.bind(KeyCode::ArrowRight, InputAction::MoveRight);

        bindings.bind(KeyCode::Space, InputAction::Jump);
        bindings.bind(KeyCode::Escape, InputAction::ToggleCursor);

        bindings
    }
}

impl InputBindings {
    /// Create new input bindings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a key to an action, replacing any previous binding of that key
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        if let Some(previous) = self.bindings.insert(key, action) {
            debug!(?key, ?previous, ?action, "key rebound");
        }
    }

    /// Unbind a key
    pub fn unbind(&mut self, key: KeyCode) {
        self.bindings.remove(&key);
    }

    /// Get the action for a key, if any
    pub fn get_key_action(&self, key: KeyCode) -> Option<InputAction> {
        self.bindings.get(&key).copied()
    }
}

/// Input handler that processes raw events and updates state
#[derive(Debug)]
pub struct InputHandler {
    /// Current input state
    pub state: InputState,
    /// Input bindings
    pub bindings: InputBindings,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Create a new input handler with default bindings
    pub fn new() -> Self {
        Self {
            state: InputState::new(),
            bindings: InputBindings::default(),
        }
    }

    /// Handle a keyboard event
    pub fn handle_keyboard(&mut self, physical_key: PhysicalKey, element_state: ElementState) {
        if let PhysicalKey::Code(key_code) = physical_key {
            if let Some(action) = self.bindings.get_key_action(key_code) {
                self.handle_action(action, element_state.is_pressed());
            }
        }
    }

    /// Press or release an action directly.
    ///
    /// A press while the action is already held (key repeat) is not a new edge.
    pub fn handle_action(&mut self, action: InputAction, pressed: bool) {
        if pressed {
            if self.state.held.insert(action) {
                self.state.just_pressed.insert(action);
                if action == InputAction::ToggleCursor {
                    self.set_cursor_captured(!self.state.cursor_captured);
                }
            }
        } else if self.state.held.remove(&action) {
            self.state.just_released.insert(action);
        }
    }

    /// Accumulate raw mouse motion in pixels; the camera applies sensitivity
    pub fn handle_mouse_motion(&mut self, delta: (f64, f64)) {
        if self.state.cursor_captured {
            self.state.mouse_delta += Vec2::new(delta.0 as f32, delta.1 as f32);
        }
    }

    /// Clear frame-specific input data
    pub fn end_frame(&mut self) {
        self.state.clear_frame();
    }

    /// Set cursor capture state
    pub fn set_cursor_captured(&mut self, captured: bool) {
        if self.state.cursor_captured != captured {
            debug!(captured, "cursor capture changed");
        }
        self.state.cursor_captured = captured;
    }
}
