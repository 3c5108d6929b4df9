//! Input aggregation
//!
//! Host events (keys, mouse, touch) land in [`InputState`]; once per frame
//! it is snapshotted into a [`TickInput`] that the simulation consumes.

use std::collections::HashSet;

use super::state::Paddle;
use crate::tuning::Tuning;

/// Input commands for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Pointer/touch x in playfield units, if a pointer is over the field
    pub pointer_x: Option<f32>,
}

/// Accumulated host input between frames
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<String>,
    pointer_x: Option<f32>,
}

impl InputState {
    pub fn key_down(&mut self, key: &str) {
        self.held.insert(key.to_string());
    }

    pub fn key_up(&mut self, key: &str) {
        self.held.remove(key);
    }

    /// Map a host x coordinate onto the playfield.
    ///
    /// `rect_left`/`rect_width` describe the canvas as laid out on screen;
    /// a degenerate rect is ignored.
    pub fn pointer_move(&mut self, client_x: f32, rect_left: f32, rect_width: f32, playfield_width: f32) {
        if rect_width <= 0.0 || !client_x.is_finite() {
            return;
        }
        let scale = playfield_width / rect_width;
        self.pointer_x = Some((client_x - rect_left) * scale);
    }

    pub fn pointer_leave(&mut self) {
        self.pointer_x = None;
    }

    /// Touch moves behave like a pointer
    pub fn touch_move(&mut self, client_x: f32, rect_left: f32, rect_width: f32, playfield_width: f32) {
        self.pointer_move(client_x, rect_left, rect_width, playfield_width);
    }

    pub fn touch_end(&mut self) {
        self.pointer_x = None;
    }

    /// Release everything (focus lost)
    pub fn clear(&mut self) {
        self.held.clear();
        self.pointer_x = None;
    }

    pub fn snapshot(&self) -> TickInput {
        let down = |keys: &[&str]| keys.iter().any(|k| self.held.contains(*k));
        TickInput {
            left: down(&["ArrowLeft", "a", "A"]),
            right: down(&["ArrowRight", "d", "D"]),
            pointer_x: self.pointer_x,
        }
    }
}

/// Move the paddle for one frame and clamp it inside the playfield.
///
/// A present pointer wins over keys: the paddle eases a fixed fraction of
/// the way toward centering under it, which smooths out jittery touch input.
pub fn steer_paddle(paddle: &mut Paddle, input: &TickInput, tuning: &Tuning) {
    match input.pointer_x {
        Some(px) => {
            let target_x = px - paddle.width / 2.0;
            paddle.pos.x += (target_x - paddle.pos.x) * tuning.paddle.pointer_easing;
        }
        None => {
            if input.left {
                paddle.pos.x -= tuning.paddle.key_speed;
            }
            if input.right {
                paddle.pos.x += tuning.paddle.key_speed;
            }
        }
    }
    paddle.clamp_to(tuning.playfield.width);
}
