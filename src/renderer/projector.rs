//! Wheel projection
//!
//! Turns the wheel rotation plus the card layout into one 3D transform per
//! card: rotate the wheel about Y, rotate to the card's slot, then push the
//! card out along Z by the radius. Pure and idempotent; safe to call every
//! frame.

use glam::{Mat4, Vec3};

use crate::sim::CardLayout;
use crate::wrap_degrees;

/// Transform of a single card for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    /// Index into the layout
    pub index: usize,
    /// Card slot angle (fixed, degrees)
    pub slot_deg: f64,
    /// Wheel rotation plus slot angle (degrees, unwrapped)
    pub angle_deg: f64,
    /// Push-out distance along the card's local Z
    pub radius: f32,
}

impl CardTransform {
    /// Combined rotation-then-translation matrix
    pub fn matrix(&self) -> Mat4 {
        let angle = wrap_degrees(self.angle_deg).to_radians() as f32;
        Mat4::from_rotation_y(angle) * Mat4::from_translation(Vec3::new(0.0, 0.0, self.radius))
    }

    /// Card centre in wheel space (Z toward the viewer)
    pub fn position(&self) -> Vec3 {
        self.matrix().transform_point3(Vec3::ZERO)
    }

    /// 1.0 when facing the viewer, -1.0 when facing away
    pub fn facing(&self) -> f32 {
        (wrap_degrees(self.angle_deg).to_radians() as f32).cos()
    }

    /// CSS for the card inside a rotated wheel element (slot only)
    pub fn slot_css(&self) -> String {
        format!("rotateY({}deg) translateZ({}px)", self.slot_deg, self.radius)
    }

    /// CSS for the full transform, wheel rotation included
    pub fn matrix3d_css(&self) -> String {
        let m = self.matrix().to_cols_array();
        let parts: Vec<String> = m.iter().map(|v| v.to_string()).collect();
        format!("matrix3d({})", parts.join(", "))
    }
}

/// Project every card in the layout for the given wheel rotation
pub fn project(rotation_deg: f64, layout: &CardLayout) -> Vec<CardTransform> {
    layout
        .cards
        .iter()
        .enumerate()
        .map(|(index, card)| CardTransform {
            index,
            slot_deg: card.angle_deg,
            angle_deg: rotation_deg + card.angle_deg,
            radius: layout.radius,
        })
        .collect()
}

/// CSS for the wheel element
pub fn wheel_css(rotation_deg: f64) -> String {
    format!("rotateY({}deg)", rotation_deg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::CarouselConfig;
    use proptest::prelude::*;

    fn six() -> CardLayout {
        CardLayout::new(&["a", "b", "c", "d", "e", "f"], &CarouselConfig::FULL)
    }

    #[test]
    fn test_project_adds_rotation() {
        let transforms = project(15.0, &six());
        assert_eq!(transforms.len(), 6);
        assert_eq!(transforms[0].angle_deg, 15.0);
        assert_eq!(transforms[2].angle_deg, 135.0);
        assert_eq!(transforms[2].slot_deg, 120.0);
        assert!(transforms.iter().all(|t| t.radius == 360.0));
    }

    #[test]
    fn test_front_card_position() {
        let transforms = project(0.0, &six());
        let front = transforms[0].position();
        assert!(front.x.abs() < 1e-3);
        assert!((front.z - 360.0).abs() < 1e-3);
        assert!((transforms[0].facing() - 1.0).abs() < 1e-6);
        assert!((transforms[3].facing() + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_quarter_turn_moves_card_to_side() {
        let layout = CardLayout::new(&["a"], &CarouselConfig::COMPACT);
        let t = project(90.0, &layout)[0];
        let pos = t.position();
        assert!((pos.x - 180.0).abs() < 1e-3);
        assert!(pos.z.abs() < 1e-3);
    }

    #[test]
    fn test_large_rotation_wraps_for_matrix() {
        let layout = six();
        let a = project(30.0, &layout)[1].position();
        let b = project(30.0 + 360.0 * 1000.0, &layout)[1].position();
        assert!((a - b).length() < 1e-2);
    }

    #[test]
    fn test_css() {
        let transforms = project(0.0, &six());
        assert_eq!(transforms[1].slot_css(), "rotateY(60deg) translateZ(360px)");
        assert_eq!(wheel_css(-12.5), "rotateY(-12.5deg)");
        assert!(transforms[0].matrix3d_css().starts_with("matrix3d("));
    }

    #[test]
    fn test_matrix_matches_wheel_then_slot() {
        let layout = six();
        let t = project(25.0, &layout)[2];
        let nested = Mat4::from_rotation_y(25.0f32.to_radians())
            * Mat4::from_rotation_y(120.0f32.to_radians())
            * Mat4::from_translation(Vec3::new(0.0, 0.0, 360.0));
        assert!(t.matrix().abs_diff_eq(nested, 1e-3));

        let css = t.matrix3d_css();
        let values: Vec<f32> = css
            .trim_start_matches("matrix3d(")
            .trim_end_matches(')')
            .split(", ")
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(values.len(), 16);
        assert_eq!(values.as_slice(), t.matrix().to_cols_array().as_slice());
    }

    #[test]
    fn test_empty_layout_projects_nothing() {
        let sources: [&str; 0] = [];
        let layout = CardLayout::new(&sources, &CarouselConfig::FULL);
        assert!(project(45.0, &layout).is_empty());
    }

    proptest! {
        #[test]
        fn prop_projection_is_idempotent(rotation in -1.0e6f64..1.0e6) {
            let layout = six();
            let first = project(rotation, &layout);
            let second = project(rotation, &layout);
            prop_assert_eq!(first, second);
        }
    }
}
