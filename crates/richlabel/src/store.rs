//! Staging slot for results pushed back by the renderer.
//!
//! The renderer cannot return a bitmap from its entry point, so it calls
//! back into [`RenderStore`] while the request is still in flight. The bridge
//! owns one store per instance and keeps it locked for the whole request;
//! a [`CallbackScope`] lends it to the transport for the duration of one call.

use richlabel_core::geometry::{Rect, Size};
use richlabel_core::math::Vec2;

use crate::boundary::RendererCallbacks;
use crate::link::LinkMeta;
use crate::pixel;
use crate::resolve::FileResolver;

/// What the renderer delivered for one request, moved out of the store.
#[derive(Debug, Default)]
pub struct Delivered {
    /// `None` when no bitmap callback arrived.
    pub size: Option<Size<u32>>,
    /// Pixels in engine channel order, `width * height * 4` bytes.
    pub pixels: Option<Vec<u8>>,
    pub links: Vec<LinkMeta>,
    pub padding: Vec2,
}

/// Single-slot result store.
#[derive(Debug, Default)]
pub struct RenderStore {
    size: Option<Size<u32>>,
    pixels: Option<Vec<u8>>,
    links: Vec<LinkMeta>,
    padding: Vec2,
}

impl RenderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear link regions and padding. Bitmap and dimensions are left alone.
    pub fn reset(&mut self) {
        self.links.clear();
        self.padding = Vec2::ZERO;
    }

    /// Record dimensions and, when present, copy and convert the pixels.
    ///
    /// A buffer whose length is not exactly `width * height * 4` is dropped.
    /// Either way the previous buffer is released.
    pub fn deliver_bitmap(&mut self, width: i32, height: i32, pixels: Option<&[u8]>) {
        let size = Size::new(clamp_dimension(width, "width"), clamp_dimension(height, "height"));
        self.size = Some(size);
        self.pixels = None;

        let Some(raw) = pixels else {
            tracing::trace!("bitmap delivered without pixels: {}x{}", size.width, size.height);
            return;
        };

        let Some(len) = size.area().and_then(|area| area.checked_mul(4)) else {
            tracing::warn!(
                "bitmap {}x{} is too large to address, dropping it",
                size.width,
                size.height
            );
            return;
        };
        if raw.len() != len {
            tracing::warn!(
                "bitmap {}x{} needs {} bytes but {} were delivered, dropping it",
                size.width,
                size.height,
                len,
                raw.len()
            );
            return;
        }

        let mut buffer = raw.to_vec();
        pixel::convert_inbound(&mut buffer);
        tracing::trace!("bitmap delivered: {}x{}", size.width, size.height);
        self.pixels = Some(buffer);
    }

    /// Append one link region. No dedup, no reordering.
    pub fn deliver_link_meta(&mut self, meta: LinkMeta) {
        self.links.push(meta);
    }

    /// Last write wins.
    pub fn deliver_padding(&mut self, x: f32, y: f32) {
        self.padding = Vec2::new(x, y);
    }

    pub fn size(&self) -> Option<Size<u32>> {
        self.size
    }

    pub fn pixels(&self) -> Option<&[u8]> {
        self.pixels.as_deref()
    }

    pub fn links(&self) -> &[LinkMeta] {
        &self.links
    }

    pub fn padding(&self) -> Vec2 {
        self.padding
    }

    /// Move everything out, leaving the slot empty.
    pub fn take(&mut self) -> Delivered {
        Delivered {
            size: self.size.take(),
            pixels: self.pixels.take(),
            links: std::mem::take(&mut self.links),
            padding: std::mem::replace(&mut self.padding, Vec2::ZERO),
        }
    }
}

fn clamp_dimension(value: i32, name: &str) -> u32 {
    u32::try_from(value).unwrap_or_else(|_| {
        tracing::warn!("renderer reported negative {} {}, using 0", name, value);
        0
    })
}

/// Request-scoped view handed to the transport as its callback surface.
pub struct CallbackScope<'a> {
    store: &'a mut RenderStore,
    resolver: &'a dyn FileResolver,
}

impl<'a> CallbackScope<'a> {
    pub fn new(store: &'a mut RenderStore, resolver: &'a dyn FileResolver) -> Self {
        Self { store, resolver }
    }
}

impl RendererCallbacks for CallbackScope<'_> {
    fn reset(&mut self) {
        self.store.reset();
    }

    fn deliver_bitmap(&mut self, width: i32, height: i32, pixels: Option<&[u8]>) {
        self.store.deliver_bitmap(width, height, pixels);
    }

    fn deliver_link_meta(
        &mut self,
        normal_bg: i32,
        selected_bg: i32,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        tag: i32,
    ) {
        self.store.deliver_link_meta(LinkMeta {
            normal_bg: normal_bg as u32,
            selected_bg: selected_bg as u32,
            tag,
            bounds: Rect::new(x, y, width, height),
        });
    }

    fn deliver_padding(&mut self, x: f32, y: f32) {
        self.store.deliver_padding(x, y);
    }

    fn resolve_path(&self, name: &str) -> String {
        self.resolver.full_path_for_filename(name)
    }
}
