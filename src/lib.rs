//! Spin Carousel - an inertial 3D rotation carousel
//!
//! Core modules:
//! - `sim`: Deterministic motion model (drag, inertia, auto-spin, card layout)
//! - `renderer`: Projection of the wheel into per-card transforms, image fallback
//! - `platform`: Animation loop handle
//! - `settings`: Persisted UI preferences (theme)

pub mod carousel;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use carousel::{Carousel, CarouselOptions};
pub use error::CarouselError;
pub use settings::{Settings, Theme};

/// Carousel tuning constants
pub mod consts {
    /// Velocity multiplier applied every tick while settling
    pub const INERTIA_FRICTION: f64 = 0.95;
    /// Velocities at or below this magnitude no longer move the wheel
    pub const VELOCITY_EPSILON: f64 = 0.01;
    /// Time after the last drag start before auto-spin may kick in
    pub const IDLE_TIMEOUT_MS: f64 = 300.0;

    /// Viewports narrower than this use the compact preset
    pub const COMPACT_BREAKPOINT_PX: f64 = 768.0;
    /// CSS perspective of the stage
    pub const STAGE_PERSPECTIVE_PX: f32 = 2000.0;
    /// Stage height as a multiple of the card height
    pub const STAGE_HEIGHT_FACTOR: f32 = 1.4;

    /// Built-in images shown when the page supplies none
    pub const DEFAULT_IMAGES: [&str; 6] = [
        "https://i.pinimg.com/736x/9f/09/45/9f0945103fc6158cb16e1828a2665b5c.jpg",
        "https://i.pinimg.com/1200x/6e/4c/39/6e4c394783c731f261f295e7ffd1deed.jpg",
        "https://i.pinimg.com/1200x/1e/0c/1c/1e0c1c9c868bf07b4c27a275fb3087af.jpg",
        "https://i.pinimg.com/736x/30/91/09/3091098a15810ddbbd58d5e007bc7207.jpg",
        "https://i.pinimg.com/736x/07/cf/4a/07cf4a3a6f4144b4c7ac8e2ec5978dc1.jpg",
        "https://i.pinimg.com/736x/5d/bf/f2/5dbff2b4c0fdcb9815e989f0db386f95.jpg",
    ];
}

/// Wrap an angle in degrees to [0, 360)
///
/// Rotation itself is never wrapped; this is only used when handing an
/// angle to single precision math.
#[inline]
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}
