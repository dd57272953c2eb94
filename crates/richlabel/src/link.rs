//! Tappable link regions reported by the renderer.

use richlabel_core::geometry::{Pos, Rect};

use crate::color::Color;

/// One interactive span of rendered text, in bitmap pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinkMeta {
    /// Background behind the span in its normal state, `0xAARRGGBB`.
    pub normal_bg: u32,
    /// Background while the span is pressed, `0xAARRGGBB`.
    pub selected_bg: u32,
    /// Caller-assigned identifier for the span.
    pub tag: i32,
    pub bounds: Rect<f32>,
}

impl LinkMeta {
    pub fn normal_color(&self) -> Color {
        Color::from_argb(self.normal_bg)
    }

    pub fn selected_color(&self) -> Color {
        Color::from_argb(self.selected_bg)
    }

    pub fn contains(&self, point: Pos<f32>) -> bool {
        self.bounds.contains(point)
    }
}

/// First region containing `point`, in delivery order.
pub fn hit_test(links: &[LinkMeta], point: Pos<f32>) -> Option<&LinkMeta> {
    links.iter().find(|link| link.contains(point))
}
