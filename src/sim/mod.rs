//! Deterministic motion module
//!
//! All carousel motion lives here. This module must stay pure:
//! - Time is passed in, never read
//! - Speeds are per tick
//! - No rendering or platform dependencies

pub mod config;
pub mod input;
pub mod layout;
pub mod state;
pub mod tick;

pub use config::{CarouselConfig, CarouselMode};
pub use input::{DragInput, apply_input};
pub use layout::{CardLayout, CardSlot, slot_angle};
pub use state::{MotionPhase, MotionState};
pub use tick::tick;
