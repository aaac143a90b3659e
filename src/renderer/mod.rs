//! Render projection module
//!
//! Produces per-card transforms for whatever surface draws the cards
//! (the DOM in the browser build). Nothing here draws directly.

pub mod assets;
pub mod projector;

pub use assets::{CardImages, FALLBACK_IMAGE};
pub use projector::{CardTransform, project, wheel_css};
