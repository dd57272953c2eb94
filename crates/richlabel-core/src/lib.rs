//! Richlabel Core
//!
//! Shared plumbing for the richlabel crates: logging setup, profiling hooks,
//! and the small geometry types used to describe bitmap dimensions and
//! link regions.

pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
