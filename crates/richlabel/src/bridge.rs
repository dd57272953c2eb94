//! Request marshaling between the engine and the remote renderer.

use parking_lot::Mutex;
use richlabel_core::geometry::Size;
use richlabel_core::math::Vec2;
use richlabel_core::profiling::{profile_function, profile_scope};

use crate::boundary::{CallBoundary, LocalString, RenderArgs};
use crate::color::Color;
use crate::config::BridgeConfig;
use crate::error::{BridgeResult, RenderError};
use crate::pixel;
use crate::request::{RenderRequest, Shadow, Stroke, TextAlign};
use crate::resolve::{FileResolver, strip_asset_prefix};
use crate::result::RenderResult;
use crate::store::{CallbackScope, Delivered, RenderStore};

/// Renders rich text through a [`CallBoundary`].
///
/// Results come back through a single [`RenderStore`] slot. The slot stays
/// locked from the moment a request starts until its result has been moved
/// out, so requests on one bridge run strictly one after another; a second
/// thread calling in blocks until the first request is done.
///
/// # Example
///
/// ```ignore
/// use richlabel::{RichLabelBridge, RenderRequest, SearchPathResolver};
///
/// let resolver = SearchPathResolver::new().with_search_path("assets");
/// let bridge = RichLabelBridge::new(boundary, resolver);
/// let image = bridge.render_rich_text(&RenderRequest::new("Hello", "fonts/a.ttf", 24.0))?;
/// upload(image.width(), image.height(), image.pixels().unwrap());
/// ```
pub struct RichLabelBridge<B, R> {
    boundary: B,
    resolver: R,
    config: BridgeConfig,
    store: Mutex<RenderStore>,
}

impl<B, R> RichLabelBridge<B, R>
where
    B: CallBoundary,
    R: FileResolver,
{
    pub fn new(boundary: B, resolver: R) -> Self {
        Self::with_config(boundary, resolver, BridgeConfig::default())
    }

    pub fn with_config(boundary: B, resolver: R, config: BridgeConfig) -> Self {
        Self {
            boundary,
            resolver,
            config,
            store: Mutex::new(RenderStore::new()),
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn boundary(&self) -> &B {
        &self.boundary
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Render `request` to an RGBA bitmap.
    ///
    /// For size-only requests the result carries dimensions but no pixels.
    pub fn render_rich_text(&self, request: &RenderRequest) -> BridgeResult<RenderResult> {
        profile_function!();

        let delivered = self.round_trip(request)?;
        let size = delivered.size.ok_or(RenderError::NoData)?;

        let pixels = if request.size_only {
            None
        } else {
            let mut pixels = delivered.pixels.ok_or(RenderError::NoData)?;
            pixel::swap_alpha_channel(&mut pixels);
            Some(pixels)
        };

        tracing::debug!(
            "rendered {}x{} bitmap with {} link regions",
            size.width,
            size.height,
            delivered.links.len()
        );

        Ok(RenderResult {
            size,
            pixels,
            links: delivered.links,
            padding: delivered.padding,
        })
    }

    /// Render without shadow or stroke, white fill.
    pub fn render_plain(
        &self,
        text: &str,
        width: u32,
        height: u32,
        align: TextAlign,
        font: &str,
        font_size: f32,
    ) -> BridgeResult<RenderResult> {
        let request = RenderRequest::new(text, font, font_size)
            .with_bounds(width, height)
            .with_align(align);
        self.render_rich_text(&request)
    }

    /// Measure the bitmap size `text` would render to.
    ///
    /// Returns `(0, 0)` when measuring fails for any reason, so a zero size
    /// means "unknown", not "empty".
    pub fn measure(
        &self,
        text: &str,
        font: &str,
        font_size: f32,
        max_width: u32,
        shadow_offset: Vec2,
        stroke_size: f32,
    ) -> Size<u32> {
        profile_function!();

        let mut request = RenderRequest::new(text, font, font_size)
            .with_bounds(max_width, 0)
            .with_align(TextAlign::Center)
            .with_fill(Color::TRANSPARENT)
            .size_only();
        if shadow_offset != Vec2::ZERO {
            request.shadow = Some(Shadow {
                offset: shadow_offset,
                color: Color::TRANSPARENT,
                blur: 0.0,
            });
        }
        if stroke_size != 0.0 {
            request.stroke = Some(Stroke {
                color: Color::TRANSPARENT,
                width: stroke_size,
            });
        }

        match self.round_trip(&request) {
            Ok(Delivered { size: Some(size), .. }) => size,
            Ok(_) => {
                tracing::debug!("measure of {:?}: renderer reported no size", text);
                Size::zero()
            }
            Err(e) => {
                tracing::debug!("measure of {:?} failed: {}", text, e);
                Size::zero()
            }
        }
    }

    /// Lock the slot, make the call, and move whatever was delivered out.
    fn round_trip(&self, request: &RenderRequest) -> BridgeResult<Delivered> {
        if request.text.is_empty() {
            return Err(RenderError::InvalidInput("text is empty".to_string()));
        }

        let mut store = self.store.lock();
        store.take();
        store.reset();

        let result = self.invoke(&mut store, request);
        let delivered = store.take();
        result.map(|()| delivered)
    }

    fn invoke(&self, store: &mut RenderStore, request: &RenderRequest) -> BridgeResult<()> {
        let config = &self.config;
        let method = self
            .boundary
            .lookup_static_method(
                &config.entry_class,
                &config.entry_method,
                &config.entry_signature,
            )
            .map_err(|e| {
                tracing::error!(
                    "failed to resolve {}.{}{}: {}",
                    config.entry_class,
                    config.entry_method,
                    config.entry_signature,
                    e
                );
                RenderError::BindingUnavailable {
                    class: config.entry_class.clone(),
                    method: config.entry_method.clone(),
                    signature: config.entry_signature.clone(),
                    reason: e.message,
                }
            })?;

        let font_path = self.resolve_font(&request.font);

        let text = LocalString::new(&self.boundary, &request.text)?;
        let font = LocalString::new(&self.boundary, &font_path)?;

        let args = self.marshal(request, &text, &font);
        let values = args.to_values();

        tracing::trace!(
            "calling renderer: font={:?} size={} box={}x{} size_only={}",
            font_path,
            args.font_size,
            args.max_width,
            args.max_height,
            args.size_only
        );

        profile_scope!("renderer_call");
        let mut scope = CallbackScope::new(store, &self.resolver);
        self.boundary.call_static_void(method, &values, &mut scope)?;
        Ok(())
    }

    /// Resolve a font reference and strip the package marker from it.
    fn resolve_font(&self, font: &str) -> String {
        let full = self.resolver.full_path_for_filename(font);
        strip_asset_prefix(&full, &self.config.asset_prefix).to_string()
    }

    fn marshal(
        &self,
        request: &RenderRequest,
        text: &LocalString<'_, B>,
        font: &LocalString<'_, B>,
    ) -> RenderArgs {
        let shadow = request.shadow.unwrap_or(Shadow {
            offset: Vec2::ZERO,
            color: Color::TRANSPARENT,
            blur: 0.0,
        });
        let stroke = request.stroke.unwrap_or(Stroke {
            color: Color::TRANSPARENT,
            width: 0.0,
        });

        RenderArgs {
            text: text.handle(),
            font_path: font.handle(),
            font_size: request.font_size as i32,
            tint: request.fill.rgb_array(),
            align: request.align.to_raw(),
            max_width: to_wire_dimension(request.width),
            max_height: to_wire_dimension(request.height),
            shadow: request.shadow.is_some(),
            shadow_dx: shadow.offset.x,
            // Engine Y points up, the renderer's points down.
            shadow_dy: -shadow.offset.y,
            shadow_color: shadow.color.to_argb() as i32,
            shadow_blur: shadow.blur,
            stroke: request.stroke.is_some(),
            stroke_color: stroke.color.rgb_array(),
            stroke_size: stroke.width,
            content_scale: request
                .content_scale
                .unwrap_or(self.config.content_scale_factor),
            size_only: request.size_only,
        }
    }
}

fn to_wire_dimension(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}
