//! Input router
//!
//! Mouse and touch events are reduced to a phase plus a client-space x
//! coordinate before they get here. Only the primary touch point is used.

use super::config::CarouselConfig;
use super::state::MotionState;
use crate::error::CarouselError;

/// A normalized input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragInput {
    /// Mouse down / touch start at client x
    Start { x: f64 },
    /// Mouse move / touch move at client x
    Move { x: f64 },
    /// Mouse up / touch end
    End,
    /// Pointer entered the wheel
    HoverEnter,
    /// Pointer left the wheel (also ends any drag)
    HoverLeave,
}

/// Apply one input event to the motion state
///
/// Events carrying a non-finite coordinate are rejected and leave the state
/// untouched; one NaN would otherwise stick in the rotation forever.
pub fn apply_input(
    state: &mut MotionState,
    config: &CarouselConfig,
    input: DragInput,
    now_ms: f64,
) -> Result<(), CarouselError> {
    match input {
        DragInput::Start { x } => drag_start(state, x, now_ms),
        DragInput::Move { x } => drag_move(state, config, x),
        DragInput::End => {
            drag_end(state);
            Ok(())
        }
        DragInput::HoverEnter => {
            state.is_hovered = true;
            Ok(())
        }
        DragInput::HoverLeave => {
            state.is_hovered = false;
            // A drag that leaves the wheel must not stay stuck
            drag_end(state);
            Ok(())
        }
    }
}

pub fn drag_start(state: &mut MotionState, x: f64, now_ms: f64) -> Result<(), CarouselError> {
    let x = finite(x)?;
    state.is_dragging = true;
    state.velocity_deg = 0.0;
    state.drag_start_x = x;
    state.rotation_at_drag_start = state.rotation_deg;
    state.last_interaction_ms = now_ms;
    Ok(())
}

/// Follow the pointer; velocity becomes the per-event rotation delta
pub fn drag_move(
    state: &mut MotionState,
    config: &CarouselConfig,
    x: f64,
) -> Result<(), CarouselError> {
    let x = finite(x)?;
    if !state.is_dragging {
        return Ok(());
    }
    let delta = x - state.drag_start_x;
    let new_rotation = state.rotation_at_drag_start + delta * config.sensitivity;
    state.velocity_deg = new_rotation - state.rotation_deg;
    state.rotation_deg = new_rotation;
    Ok(())
}

/// Release; the retained velocity seeds the settle phase
pub fn drag_end(state: &mut MotionState) {
    state.is_dragging = false;
}

fn finite(x: f64) -> Result<f64, CarouselError> {
    if x.is_finite() {
        Ok(x)
    } else {
        Err(CarouselError::NonFiniteCoordinate(x))
    }
}
