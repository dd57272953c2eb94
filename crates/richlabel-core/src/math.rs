//! Vector math re-exported from [`glam`].
//!
//! Only the 2D types are used across the bridge: shadow offsets and
//! shadow/stroke padding are plain `Vec2` values.
//!
//! ```
//! use richlabel_core::math::Vec2;
//!
//! let offset = Vec2::new(2.0, 5.0);
//! assert_eq!(offset.y, 5.0);
//! ```

pub use glam::{vec2, Vec2};
