//! Carousel component
//!
//! Owns the motion state, the active config and the card layout. Input
//! events, the per-frame tick and the projection all go through here, so
//! nothing else ever mutates the motion state.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_IMAGES, STAGE_HEIGHT_FACTOR, STAGE_PERSPECTIVE_PX};
use crate::error::CarouselError;
use crate::renderer::{CardImages, CardTransform, project, wheel_css};
use crate::sim::{
    CardLayout, CarouselConfig, CarouselMode, DragInput, MotionPhase, MotionState, apply_input,
    tick,
};

fn default_images() -> Vec<String> {
    DEFAULT_IMAGES.iter().map(|s| s.to_string()).collect()
}

/// Construction options, usually read from the mount element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselOptions {
    /// Card image sources, in wheel order
    #[serde(default = "default_images")]
    pub images: Vec<String>,
    /// Force a mode instead of following the viewport width
    #[serde(default)]
    pub mode: Option<CarouselMode>,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            images: default_images(),
            mode: None,
        }
    }
}

impl CarouselOptions {
    pub fn from_json(json: &str) -> Result<Self, CarouselError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Mode for a viewport, honouring the override
    pub fn mode_for(&self, viewport_width: f64) -> CarouselMode {
        self.mode
            .unwrap_or_else(|| CarouselMode::from_viewport_width(viewport_width))
    }
}

/// An inertial rotation carousel
#[derive(Debug, Clone)]
pub struct Carousel {
    motion: MotionState,
    phase: MotionPhase,
    mode: CarouselMode,
    config: CarouselConfig,
    layout: CardLayout,
    images: CardImages,
    mode_override: Option<CarouselMode>,
}

impl Carousel {
    pub fn new(options: &CarouselOptions, viewport_width: f64, now_ms: f64) -> Self {
        let mode = options.mode_for(viewport_width);
        let config = mode.config();
        let layout = CardLayout::new(&options.images, &config);
        log::info!(
            "Carousel mounted: {} cards, {} mode",
            layout.len(),
            mode.as_str()
        );

        Self {
            motion: MotionState::new(now_ms),
            phase: MotionPhase::Idle,
            mode,
            config,
            layout,
            images: CardImages::new(&options.images),
            mode_override: options.mode,
        }
    }

    /// Route one input event into the motion state
    pub fn handle_input(&mut self, input: DragInput, now_ms: f64) -> Result<(), CarouselError> {
        apply_input(&mut self.motion, &self.config, input, now_ms)
    }

    pub fn drag_start(&mut self, x: f64, now_ms: f64) -> Result<(), CarouselError> {
        self.handle_input(DragInput::Start { x }, now_ms)
    }

    pub fn drag_move(&mut self, x: f64, now_ms: f64) -> Result<(), CarouselError> {
        self.handle_input(DragInput::Move { x }, now_ms)
    }

    pub fn drag_end(&mut self, now_ms: f64) {
        // End carries no coordinate and cannot fail
        let _ = self.handle_input(DragInput::End, now_ms);
    }

    pub fn hover_enter(&mut self, now_ms: f64) {
        let _ = self.handle_input(DragInput::HoverEnter, now_ms);
    }

    pub fn hover_leave(&mut self, now_ms: f64) {
        let _ = self.handle_input(DragInput::HoverLeave, now_ms);
    }

    /// Advance one animation frame
    pub fn tick(&mut self, now_ms: f64) -> MotionPhase {
        let phase = tick(&mut self.motion, &self.config, now_ms);
        if phase != self.phase {
            log::debug!("Carousel {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
        phase
    }

    /// Per-card transforms for the current rotation
    pub fn transforms(&self) -> Vec<CardTransform> {
        project(self.motion.rotation_deg, &self.layout)
    }

    /// CSS transform for the wheel element
    pub fn wheel_css(&self) -> String {
        wheel_css(self.motion.rotation_deg)
    }

    /// Re-evaluate the mode for a new viewport width.
    ///
    /// Returns true when the mode changed and the layout was rebuilt. The
    /// motion state carries over untouched.
    pub fn resize(&mut self, viewport_width: f64) -> bool {
        let mode = self
            .mode_override
            .unwrap_or_else(|| CarouselMode::from_viewport_width(viewport_width));
        if mode == self.mode {
            return false;
        }
        self.mode = mode;
        self.config = mode.config();
        self.layout = CardLayout::new(self.images.sources(), &self.config);
        log::info!("Carousel relayout: {} mode", mode.as_str());
        true
    }

    /// Record an image load failure; the card switches to the placeholder
    pub fn mark_image_failed(&mut self, index: usize) -> bool {
        self.images.mark_failed(index)
    }

    /// Image to display for a card (placeholder after a failure)
    pub fn image_source(&self, index: usize) -> Option<&str> {
        self.images.resolve(index)
    }

    /// Stage (perspective container) size in CSS pixels
    pub fn stage_size(&self) -> (f32, f32) {
        (
            self.config.radius * 2.0,
            self.config.card_height * STAGE_HEIGHT_FACTOR,
        )
    }

    pub fn perspective(&self) -> f32 {
        STAGE_PERSPECTIVE_PX
    }

    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    pub fn phase(&self) -> MotionPhase {
        self.phase
    }

    pub fn mode(&self) -> CarouselMode {
        self.mode
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn layout(&self) -> &CardLayout {
        &self.layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::FALLBACK_IMAGE;

    fn options(images: &[&str]) -> CarouselOptions {
        CarouselOptions {
            images: images.iter().map(|s| s.to_string()).collect(),
            mode: None,
        }
    }

    #[test]
    fn test_default_options() {
        let opts = CarouselOptions::from_json("{}").unwrap();
        assert_eq!(opts.images.len(), 6);
        assert_eq!(opts.mode, None);
        assert_eq!(opts, CarouselOptions::default());
    }

    #[test]
    fn test_options_json() {
        let opts =
            CarouselOptions::from_json(r#"{"images": ["a.png", "b.png"], "mode": "compact"}"#)
                .unwrap();
        assert_eq!(opts.images, vec!["a.png", "b.png"]);
        assert_eq!(opts.mode_for(1920.0), CarouselMode::Compact);

        let err = CarouselOptions::from_json("{\"images\": 3}").unwrap_err();
        assert!(matches!(err, CarouselError::InvalidOptions(_)));
    }

    #[test]
    fn test_mode_from_viewport() {
        let c = Carousel::new(&options(&["a"]), 400.0, 0.0);
        assert_eq!(c.mode(), CarouselMode::Compact);
        assert_eq!(c.config().sensitivity, 0.9);
        assert_eq!(c.stage_size(), (360.0, 210.0 * 1.4));

        let c = Carousel::new(&options(&["a"]), 1280.0, 0.0);
        assert_eq!(c.mode(), CarouselMode::Full);
        assert_eq!(c.stage_size().0, 720.0);
    }

    #[test]
    fn test_drag_fling_hover_cycle() {
        let mut c = Carousel::new(&CarouselOptions::default(), 1280.0, 0.0);
        c.hover_enter(10.0);
        c.drag_start(500.0, 10.0).unwrap();
        c.drag_move(540.0, 20.0).unwrap();
        assert_eq!(c.tick(20.0), MotionPhase::Dragging);
        assert_eq!(c.motion().rotation_deg, 20.0);

        c.drag_end(30.0);
        // Still hovered, so the fling waits
        assert_eq!(c.tick(40.0), MotionPhase::Hovered);
        assert_eq!(c.motion().rotation_deg, 20.0);

        c.hover_leave(50.0);
        assert_eq!(c.tick(60.0), MotionPhase::Settling);
        assert_eq!(c.motion().rotation_deg, 40.0);
        assert_eq!(c.phase(), MotionPhase::Settling);
    }

    #[test]
    fn test_bad_coordinate_does_not_poison_rotation() {
        let mut c = Carousel::new(&CarouselOptions::default(), 1280.0, 0.0);
        c.drag_start(0.0, 0.0).unwrap();
        assert!(c.drag_move(f64::NAN, 1.0).is_err());
        c.drag_end(2.0);
        for t in 0..100 {
            c.tick(1_000.0 + t as f64);
        }
        assert!(c.motion().rotation_deg.is_finite());
        assert!(c.transforms().iter().all(|t| t.angle_deg.is_finite()));
    }

    #[test]
    fn test_resize_keeps_motion() {
        let mut c = Carousel::new(&options(&["a", "b", "c"]), 1280.0, 0.0);
        c.drag_start(0.0, 0.0).unwrap();
        c.drag_move(100.0, 1.0).unwrap();
        c.drag_end(2.0);
        let rotation = c.motion().rotation_deg;
        let velocity = c.motion().velocity_deg;

        assert!(!c.resize(1000.0));
        assert!(c.resize(500.0));
        assert_eq!(c.mode(), CarouselMode::Compact);
        assert_eq!(c.layout().radius, 180.0);
        assert_eq!(c.layout().len(), 3);
        assert_eq!(c.motion().rotation_deg, rotation);
        assert_eq!(c.motion().velocity_deg, velocity);
    }

    #[test]
    fn test_resize_respects_override() {
        let opts = CarouselOptions {
            images: vec!["a".into()],
            mode: Some(CarouselMode::Full),
        };
        let mut c = Carousel::new(&opts, 300.0, 0.0);
        assert_eq!(c.mode(), CarouselMode::Full);
        assert!(!c.resize(200.0));
    }

    #[test]
    fn test_image_failure_isolated() {
        let mut c = Carousel::new(&options(&["a", "b", "c"]), 1280.0, 0.0);
        let before = c.transforms();
        assert!(c.mark_image_failed(2));
        assert_eq!(c.image_source(2), Some(FALLBACK_IMAGE));
        assert_eq!(c.image_source(0), Some("a"));
        assert_eq!(c.transforms(), before);
    }

    #[test]
    fn test_degenerate_layouts() {
        let mut c = Carousel::new(&options(&[]), 1280.0, 0.0);
        assert!(c.transforms().is_empty());
        c.tick(1_000.0);

        let c = Carousel::new(&options(&["solo"]), 1280.0, 0.0);
        assert_eq!(c.transforms()[0].slot_deg, 0.0);
    }
}
