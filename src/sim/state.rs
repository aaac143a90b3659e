//! Motion state of the wheel
//!
//! One `MotionState` exists per mounted carousel. Only the input router,
//! the physics tick and the projector ever look at it.

use serde::{Deserialize, Serialize};

/// What the wheel did on the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionPhase {
    /// Within the grace window after a drag, nothing moving
    Idle,
    /// Rotation follows the pointer
    Dragging,
    /// Pointer is over the wheel; rotation and velocity frozen
    Hovered,
    /// Released with residual velocity, decaying
    Settling,
    /// Constant passive spin after the idle timeout
    AutoSpinning,
}

/// Rotation, velocity and drag bookkeeping
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotionState {
    /// Wheel rotation in degrees (unbounded, never wrapped)
    pub rotation_deg: f64,
    /// Signed angular velocity in degrees per tick
    pub velocity_deg: f64,
    pub is_dragging: bool,
    /// Pointer x when the current drag started
    pub drag_start_x: f64,
    /// Rotation snapshot when the current drag started
    pub rotation_at_drag_start: f64,
    /// Timestamp (ms) of the last drag start, or of mount
    pub last_interaction_ms: f64,
    pub is_hovered: bool,
}

impl MotionState {
    /// Fresh state at mount time
    pub fn new(now_ms: f64) -> Self {
        Self {
            rotation_deg: 0.0,
            velocity_deg: 0.0,
            is_dragging: false,
            drag_start_x: 0.0,
            rotation_at_drag_start: 0.0,
            last_interaction_ms: now_ms,
            is_hovered: false,
        }
    }

    /// True when neither a drag nor a hover holds the wheel
    #[inline]
    pub fn is_free(&self) -> bool {
        !self.is_dragging && !self.is_hovered
    }

    /// Milliseconds since the last interaction
    #[inline]
    pub fn idle_ms(&self, now_ms: f64) -> f64 {
        now_ms - self.last_interaction_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_at_rest() {
        let state = MotionState::new(1_000.0);
        assert_eq!(state.rotation_deg, 0.0);
        assert_eq!(state.velocity_deg, 0.0);
        assert!(state.is_free());
        assert_eq!(state.idle_ms(1_250.0), 250.0);
    }

    #[test]
    fn test_is_free() {
        let mut state = MotionState::new(0.0);
        state.is_hovered = true;
        assert!(!state.is_free());
        state.is_hovered = false;
        state.is_dragging = true;
        assert!(!state.is_free());
    }
}
