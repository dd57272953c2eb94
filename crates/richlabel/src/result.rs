use richlabel_core::geometry::Size;
use richlabel_core::math::Vec2;

use crate::link::LinkMeta;

/// Bitmap produced by one render request.
///
/// Owns its pixel buffer outright. Pixels are 8-bit RGBA with
/// premultiplied alpha, `width * height * 4` bytes, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderResult {
    pub(crate) size: Size<u32>,
    pub(crate) pixels: Option<Vec<u8>>,
    pub(crate) links: Vec<LinkMeta>,
    pub(crate) padding: Vec2,
}

impl RenderResult {
    pub fn width(&self) -> u32 {
        self.size.width
    }

    pub fn height(&self) -> u32 {
        self.size.height
    }

    pub fn size(&self) -> Size<u32> {
        self.size
    }

    /// `None` for size-only requests.
    pub fn pixels(&self) -> Option<&[u8]> {
        self.pixels.as_deref()
    }

    pub fn into_pixels(self) -> Option<Vec<u8>> {
        self.pixels
    }

    /// Link regions in delivery order.
    pub fn links(&self) -> &[LinkMeta] {
        &self.links
    }

    /// Extra margin added by shadow and stroke.
    pub fn padding(&self) -> Vec2 {
        self.padding
    }

    pub fn has_alpha(&self) -> bool {
        true
    }

    pub fn is_premultiplied(&self) -> bool {
        true
    }

    pub fn bits_per_component(&self) -> u32 {
        8
    }
}
