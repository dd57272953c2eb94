//! Render request model.
//!
//! A [`RenderRequest`] carries everything the remote renderer needs for one
//! bitmap: the text, the box to lay it out in, the font and every style
//! parameter. Unset fields take the defaults documented on each builder.

use richlabel_core::math::Vec2;

use crate::color::Color;

/// Nine-way alignment mask understood by the renderer.
///
/// The raw value packs the vertical component in the high nibble
/// (1 top, 2 bottom, 3 center) and the horizontal one in the low nibble
/// (1 left, 2 right, 3 center).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlign {
    #[default]
    Center,
    Top,
    TopRight,
    Right,
    BottomRight,
    Bottom,
    BottomLeft,
    Left,
    TopLeft,
}

impl TextAlign {
    pub const ALL: [TextAlign; 9] = [
        TextAlign::Center,
        TextAlign::Top,
        TextAlign::TopRight,
        TextAlign::Right,
        TextAlign::BottomRight,
        TextAlign::Bottom,
        TextAlign::BottomLeft,
        TextAlign::Left,
        TextAlign::TopLeft,
    ];

    pub fn to_raw(self) -> i32 {
        match self {
            TextAlign::Center => 0x33,
            TextAlign::Top => 0x13,
            TextAlign::TopRight => 0x12,
            TextAlign::Right => 0x32,
            TextAlign::BottomRight => 0x22,
            TextAlign::Bottom => 0x23,
            TextAlign::BottomLeft => 0x21,
            TextAlign::Left => 0x31,
            TextAlign::TopLeft => 0x11,
        }
    }

    pub fn from_raw(raw: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|align| align.to_raw() == raw)
    }
}

/// Drop shadow drawn behind the glyphs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    /// Offset in engine coordinates (positive Y is up).
    pub offset: Vec2,
    pub color: Color,
    /// Blur radius, 0 for a hard edge.
    pub blur: f32,
}

/// Outline stroked around the glyphs. Alpha of `color` is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
}

/// One rich-text render request.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub text: String,
    /// Layout box width in pixels, 0 for unbounded.
    pub width: u32,
    /// Layout box height in pixels, 0 to size the bitmap to the text.
    pub height: u32,
    pub align: TextAlign,
    /// Font name or path, resolved through the bridge's file resolver.
    pub font: String,
    pub font_size: f32,
    /// Fill tint. Only the RGB channels cross the boundary.
    pub fill: Color,
    pub shadow: Option<Shadow>,
    pub stroke: Option<Stroke>,
    /// Only report dimensions, no pixels.
    pub size_only: bool,
    /// Overrides the bridge's device content scale factor.
    pub content_scale: Option<f32>,
}

impl RenderRequest {
    /// Request with white fill, centered, no shadow or stroke, unbounded box.
    pub fn new(text: impl Into<String>, font: impl Into<String>, font_size: f32) -> Self {
        Self {
            text: text.into(),
            width: 0,
            height: 0,
            align: TextAlign::Center,
            font: font.into(),
            font_size,
            fill: Color::WHITE,
            shadow: None,
            stroke: None,
            size_only: false,
            content_scale: None,
        }
    }

    pub fn with_bounds(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Hard-edged shadow.
    pub fn with_shadow(self, offset: Vec2, color: Color) -> Self {
        self.with_shadow_blurred(offset, 0.0, color)
    }

    pub fn with_shadow_blurred(mut self, offset: Vec2, blur: f32, color: Color) -> Self {
        self.shadow = Some(Shadow {
            offset,
            color,
            blur,
        });
        self
    }

    pub fn with_stroke(mut self, color: Color, width: f32) -> Self {
        self.stroke = Some(Stroke { color, width });
        self
    }

    pub fn size_only(mut self) -> Self {
        self.size_only = true;
        self
    }

    pub fn with_content_scale(mut self, scale: f32) -> Self {
        self.content_scale = Some(scale);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let request = RenderRequest::new("Hi", "a.ttf", 12.0);
        assert_eq!(request.align, TextAlign::Center);
        assert_eq!(request.fill, Color::WHITE);
        assert!(request.shadow.is_none());
        assert!(request.stroke.is_none());
        assert!(!request.size_only);
        assert_eq!(request.content_scale, None);
        assert_eq!((request.width, request.height), (0, 0));
    }

    #[test]
    fn test_builder_sets_effects() {
        let request = RenderRequest::new("Hi", "a.ttf", 12.0)
            .with_bounds(100, 50)
            .with_shadow_blurred(Vec2::new(1.0, 2.0), 3.0, Color::BLACK)
            .with_stroke(Color::rgb(1.0, 0.0, 0.0), 2.0);

        assert_eq!((request.width, request.height), (100, 50));
        let shadow = request.shadow.unwrap();
        assert_eq!(shadow.offset, Vec2::new(1.0, 2.0));
        assert_eq!(shadow.blur, 3.0);
        assert_eq!(request.stroke.unwrap().width, 2.0);
    }

    #[test]
    fn test_align_raw_values() {
        assert_eq!(TextAlign::Center.to_raw(), 0x33);
        assert_eq!(TextAlign::TopLeft.to_raw(), 0x11);
        assert_eq!(TextAlign::BottomRight.to_raw(), 0x22);
        for align in TextAlign::ALL {
            assert_eq!(TextAlign::from_raw(align.to_raw()), Some(align));
        }
        assert_eq!(TextAlign::from_raw(0x44), None);
    }
}
