use std::collections::HashMap;

use parking_lot::Mutex;
use richlabel::FileResolver;

/// File resolver backed by a lookup table.
///
/// Names missing from the table resolve to themselves.
#[derive(Debug, Default)]
pub struct MockFileResolver {
    paths: HashMap<String, String>,
    lookups: Mutex<Vec<String>>,
}

impl MockFileResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_path(mut self, name: impl Into<String>, full_path: impl Into<String>) -> Self {
        self.paths.insert(name.into(), full_path.into());
        self
    }

    /// Names looked up so far, in order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().clone()
    }
}

impl FileResolver for MockFileResolver {
    fn full_path_for_filename(&self, name: &str) -> String {
        self.lookups.lock().push(name.to_string());
        self.paths
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }
}
