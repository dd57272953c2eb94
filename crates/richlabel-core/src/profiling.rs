//! Profiling scopes backed by `puffin`.
//!
//! With the `profiling` feature disabled the scope macros expand to nothing,
//! so call sites never need their own `cfg` guards.

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

#[cfg(feature = "profiling")]
static PROFILING_SERVER: std::sync::OnceLock<puffin_http::Server> = std::sync::OnceLock::new();

/// Turn scope collection on and expose it to `puffin_viewer` at `addr`.
///
/// ```no_run
/// richlabel_core::profiling::serve("127.0.0.1:8585");
/// ```
#[cfg(feature = "profiling")]
pub fn serve(addr: &str) {
    puffin::set_scopes_on(true);
    match puffin_http::Server::new(addr) {
        Ok(server) => {
            tracing::info!("puffin server listening on {}", addr);
            let _ = PROFILING_SERVER.set(server);
        }
        Err(e) => tracing::error!("failed to start puffin server on {}: {}", addr, e),
    }
}

/// Close the current profiling frame.
#[cfg(feature = "profiling")]
#[inline]
pub fn new_frame() {
    puffin::GlobalProfiler::lock().new_frame();
}

#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_function {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_scope {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "profiling"))]
pub use crate::{profile_function, profile_scope};

#[cfg(not(feature = "profiling"))]
pub fn serve(_addr: &str) {
    tracing::debug!("profiling feature disabled, not starting puffin server");
}

#[cfg(not(feature = "profiling"))]
#[inline]
pub fn new_frame() {}
