//! Per-frame physics step
//!
//! Called once per animation frame. There is no delta-time scaling: all
//! speeds are per tick, so a faster display spins the wheel faster.

use super::config::CarouselConfig;
use super::state::{MotionPhase, MotionState};
use crate::consts::*;

/// Advance the wheel by one frame and report what it did
pub fn tick(state: &mut MotionState, config: &CarouselConfig, now_ms: f64) -> MotionPhase {
    // Dragging: the input router owns rotation
    if state.is_dragging {
        return MotionPhase::Dragging;
    }

    // Hover freezes everything, velocity is kept for when it ends
    if state.is_hovered {
        return MotionPhase::Hovered;
    }

    if state.velocity_deg.abs() > VELOCITY_EPSILON {
        state.rotation_deg += state.velocity_deg;
        state.velocity_deg *= INERTIA_FRICTION;
        return MotionPhase::Settling;
    }

    if state.idle_ms(now_ms) > IDLE_TIMEOUT_MS {
        state.rotation_deg += config.autospin_speed;
        return MotionPhase::AutoSpinning;
    }

    MotionPhase::Idle
}
