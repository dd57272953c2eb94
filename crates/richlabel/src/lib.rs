//! Richlabel - rich-text bitmaps from a remote renderer
//!
//! The glyph rasterization and layout happen on the far side of a call
//! boundary. This crate marshals the request across, collects what the
//! renderer pushes back through callbacks, and fixes up the pixel format:
//!
//! - [`RichLabelBridge`] builds the argument list and drives the call
//! - [`RenderStore`] receives the bitmap, link regions and padding
//! - [`pixel`] reorders 32-bit pixels between the two channel orders
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use richlabel::{Color, RenderRequest, RichLabelBridge, SearchPathResolver, Vec2};
//!
//! let resolver = SearchPathResolver::new().with_search_path("assets");
//! let bridge = RichLabelBridge::new(my_boundary, resolver);
//!
//! let request = RenderRequest::new("Tap <a>here</a>", "fonts/body.ttf", 18.0)
//!     .with_bounds(320, 0)
//!     .with_shadow(Vec2::new(1.0, -1.0), Color::BLACK);
//!
//! let image = bridge.render_rich_text(&request)?;
//! for link in image.links() {
//!     println!("link {} at {:?}", link.tag, link.bounds);
//! }
//! ```

pub mod boundary;
pub mod bridge;
pub mod color;
pub mod config;
pub mod error;
pub mod link;
pub mod pixel;
pub mod request;
pub mod resolve;
pub mod result;
pub mod store;

pub use boundary::{
    BoundaryValue, CallBoundary, LocalString, MethodId, RENDER_ARG_COUNT, RENDER_CLASS,
    RENDER_METHOD, RENDER_SIGNATURE, RenderArgs, RendererCallbacks, StringHandle,
};
pub use bridge::RichLabelBridge;
pub use color::Color;
pub use config::BridgeConfig;
pub use error::{BoundaryError, BridgeResult, RenderError};
pub use link::{LinkMeta, hit_test};
pub use request::{RenderRequest, Shadow, Stroke, TextAlign};
pub use resolve::{
    ASSET_PREFIX, FileResolver, IdentityResolver, SearchPathResolver, strip_asset_prefix,
};
pub use result::RenderResult;
pub use store::{CallbackScope, Delivered, RenderStore};

pub use richlabel_core::geometry::{Pos, Rect, Size};
pub use richlabel_core::math::Vec2;
