//! Test utilities for richlabel.
//!
//! - [`MockBoundary`] - scripted stand-in for the remote renderer that
//!   records every boundary call
//! - [`MockFileResolver`] - table-driven file resolver that records lookups
//!
//! # Example
//!
//! ```rust
//! use richlabel::{RenderRequest, RichLabelBridge};
//! use richlabel_test_utils::{MockBoundary, MockFileResolver};
//!
//! let boundary = MockBoundary::with_renderer(|_call, callbacks| {
//!     callbacks.deliver_bitmap(2, 1, Some(&[0; 8]));
//!     Ok(())
//! });
//! let bridge = RichLabelBridge::new(boundary, MockFileResolver::new());
//!
//! let image = bridge
//!     .render_rich_text(&RenderRequest::new("Hi", "a.ttf", 12.0))
//!     .unwrap();
//! assert_eq!(image.width(), 2);
//! assert_eq!(bridge.boundary().live_strings(), 0);
//! ```

pub mod mock_boundary;
pub mod mock_resolver;

pub use mock_boundary::*;
pub use mock_resolver::*;
