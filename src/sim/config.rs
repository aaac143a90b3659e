//! Mode presets for the carousel
//!
//! Every mode-dependent constant is gathered into one `CarouselConfig`
//! chosen once when the carousel is built (or relaid out).

use serde::{Deserialize, Serialize};

use crate::consts::COMPACT_BREAKPOINT_PX;

/// Layout mode, picked from the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CarouselMode {
    /// Small screens: smaller cards, faster spin, more sensitive drag
    Compact,
    #[default]
    Full,
}

impl CarouselMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CarouselMode::Compact => "compact",
            CarouselMode::Full => "full",
        }
    }

    /// Compact below the breakpoint, full at or above it
    pub fn from_viewport_width(width: f64) -> Self {
        if width < COMPACT_BREAKPOINT_PX {
            CarouselMode::Compact
        } else {
            CarouselMode::Full
        }
    }

    pub fn config(&self) -> CarouselConfig {
        CarouselConfig::for_mode(*self)
    }
}

/// Per-mode motion and geometry constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Degrees of rotation per pixel of horizontal drag
    pub sensitivity: f64,
    /// Degrees added per tick while auto-spinning
    pub autospin_speed: f64,
    /// Card size in CSS pixels
    pub card_width: f32,
    pub card_height: f32,
    /// Distance of each card from the wheel axis
    pub radius: f32,
}

impl CarouselConfig {
    pub const COMPACT: Self = Self {
        sensitivity: 0.9,
        autospin_speed: 0.15,
        card_width: 160.0,
        card_height: 210.0,
        radius: 180.0,
    };

    pub const FULL: Self = Self {
        sensitivity: 0.5,
        autospin_speed: 0.05,
        card_width: 260.0,
        card_height: 340.0,
        radius: 360.0,
    };

    pub fn for_mode(mode: CarouselMode) -> Self {
        match mode {
            CarouselMode::Compact => Self::COMPACT,
            CarouselMode::Full => Self::FULL,
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self::FULL
    }
}
