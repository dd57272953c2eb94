use std::fmt;

/// Errors that can occur while rendering rich text through the bridge.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The request was rejected before crossing the boundary.
    InvalidInput(String),

    /// The remote render entry point could not be resolved.
    BindingUnavailable {
        class: String,
        method: String,
        signature: String,
        reason: String,
    },

    /// The renderer returned without delivering a bitmap.
    NoData,

    /// The boundary call itself failed.
    Boundary(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidInput(msg) => write!(f, "Invalid render request: {}", msg),
            RenderError::BindingUnavailable {
                class,
                method,
                signature,
                reason,
            } => write!(
                f,
                "Render entry point {}.{}{} unavailable: {}",
                class, method, signature, reason
            ),
            RenderError::NoData => write!(f, "Renderer returned without delivering a bitmap"),
            RenderError::Boundary(msg) => write!(f, "Boundary call failed: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<BoundaryError> for RenderError {
    fn from(err: BoundaryError) -> Self {
        RenderError::Boundary(err.message)
    }
}

/// Failure reported by a [`CallBoundary`](crate::boundary::CallBoundary) implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryError {
    pub message: String,
}

impl BoundaryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for BoundaryError {}

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, RenderError>;
