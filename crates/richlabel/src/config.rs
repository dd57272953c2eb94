use crate::boundary::{RENDER_CLASS, RENDER_METHOD, RENDER_SIGNATURE};
use crate::resolve::ASSET_PREFIX;

/// Configuration for a [`RichLabelBridge`](crate::RichLabelBridge).
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    /// Class holding the render entry point.
    pub entry_class: String,
    pub entry_method: String,
    pub entry_signature: String,
    /// Prefix stripped from resolved font paths. Empty disables stripping.
    pub asset_prefix: String,
    /// Device content scale, used when a request does not carry its own.
    pub content_scale_factor: f32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        BridgeConfig {
            entry_class: RENDER_CLASS.to_string(),
            entry_method: RENDER_METHOD.to_string(),
            entry_signature: RENDER_SIGNATURE.to_string(),
            asset_prefix: ASSET_PREFIX.to_string(),
            content_scale_factor: 1.0,
        }
    }
}

impl BridgeConfig {
    pub fn with_content_scale_factor(mut self, scale: f32) -> Self {
        self.content_scale_factor = scale;
        self
    }

    pub fn with_entry_point(
        mut self,
        class: impl Into<String>,
        method: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        self.entry_class = class.into();
        self.entry_method = method.into();
        self.entry_signature = signature.into();
        self
    }

    pub fn with_asset_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.asset_prefix = prefix.into();
        self
    }
}
