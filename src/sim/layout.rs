//! Card placement around the wheel
//!
//! Cards sit evenly spaced on a cylinder: card `i` of `n` is at
//! `i * 360 / n` degrees. The layout is a pure function of the image list
//! and the active config, rebuilt only when either changes.

use serde::{Deserialize, Serialize};

use super::config::CarouselConfig;

/// One card slot on the wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardSlot {
    pub image_source: String,
    /// Fixed placement angle around the wheel (degrees)
    pub angle_deg: f64,
}

/// Ordered card slots plus the geometry they are drawn with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardLayout {
    pub cards: Vec<CardSlot>,
    pub radius: f32,
    pub card_width: f32,
    pub card_height: f32,
}

impl CardLayout {
    pub fn new<S: AsRef<str>>(sources: &[S], config: &CarouselConfig) -> Self {
        let count = sources.len();
        let cards = sources
            .iter()
            .enumerate()
            .map(|(i, src)| CardSlot {
                image_source: src.as_ref().to_string(),
                angle_deg: slot_angle(i, count),
            })
            .collect();

        Self {
            cards,
            radius: config.radius,
            card_width: config.card_width,
            card_height: config.card_height,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Placement angle of card `index` out of `count`
#[inline]
pub fn slot_angle(index: usize, count: usize) -> f64 {
    if count <= 1 {
        return 0.0;
    }
    (index as f64 * 360.0) / count as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_cards_evenly_spaced() {
        let sources = ["a", "b", "c", "d", "e", "f"];
        let layout = CardLayout::new(&sources, &CarouselConfig::FULL);
        let angles: Vec<f64> = layout.cards.iter().map(|c| c.angle_deg).collect();
        assert_eq!(angles, vec![0.0, 60.0, 120.0, 180.0, 240.0, 300.0]);
        let names: Vec<&str> = layout.cards.iter().map(|c| c.image_source.as_str()).collect();
        assert_eq!(names, sources);
    }

    #[test]
    fn test_single_card_at_zero() {
        let layout = CardLayout::new(&["only"], &CarouselConfig::FULL);
        assert_eq!(layout.len(), 1);
        assert_eq!(layout.cards[0].angle_deg, 0.0);
    }

    #[test]
    fn test_empty_layout() {
        let sources: [&str; 0] = [];
        let layout = CardLayout::new(&sources, &CarouselConfig::COMPACT);
        assert!(layout.is_empty());
    }

    #[test]
    fn test_geometry_follows_config() {
        let layout = CardLayout::new(&["a", "b"], &CarouselConfig::COMPACT);
        assert_eq!(layout.radius, 180.0);
        assert_eq!((layout.card_width, layout.card_height), (160.0, 210.0));
        assert_eq!(layout.cards[1].angle_deg, 180.0);
    }
}
