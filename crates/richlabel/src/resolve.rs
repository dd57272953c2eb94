//! Font path resolution.
//!
//! The engine looks names up against its search paths, and the result may
//! be relative to the application package (`assets/fonts/a.ttf`). The
//! renderer wants package-relative paths without that marker, so the bridge
//! strips it before crossing the boundary.

use std::path::{Path, PathBuf};

/// Marker prefix for files shipped inside the application package.
pub const ASSET_PREFIX: &str = "assets/";

/// Resolves a file name to a full path.
pub trait FileResolver {
    /// Never fails: unknown names come back unchanged.
    fn full_path_for_filename(&self, name: &str) -> String;
}

impl<F> FileResolver for F
where
    F: Fn(&str) -> String,
{
    fn full_path_for_filename(&self, name: &str) -> String {
        self(name)
    }
}

/// Resolver that returns every name as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityResolver;

impl FileResolver for IdentityResolver {
    fn full_path_for_filename(&self, name: &str) -> String {
        name.to_string()
    }
}

/// Looks a name up in an ordered list of directories.
///
/// The first directory containing the file wins. Absolute names and names
/// that exist nowhere are returned unchanged, matching the engine's lookup
/// where an unresolved name is treated as a system font name.
#[derive(Debug, Clone, Default)]
pub struct SearchPathResolver {
    search_paths: Vec<PathBuf>,
}

impl SearchPathResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    pub fn add_search_path(&mut self, path: impl Into<PathBuf>) {
        self.search_paths.push(path.into());
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }
}

impl FileResolver for SearchPathResolver {
    fn full_path_for_filename(&self, name: &str) -> String {
        if name.is_empty() || Path::new(name).is_absolute() {
            return name.to_string();
        }

        for dir in &self.search_paths {
            let candidate = dir.join(name);
            if candidate.is_file() {
                tracing::trace!("resolved '{}' to {}", name, candidate.display());
                return candidate.to_string_lossy().into_owned();
            }
        }

        tracing::trace!("'{}' not found in {} search paths", name, self.search_paths.len());
        name.to_string()
    }
}

/// Drop a leading `prefix` from `path`, leaving other paths untouched.
pub fn strip_asset_prefix<'a>(path: &'a str, prefix: &str) -> &'a str {
    path.strip_prefix(prefix).unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_asset_prefix() {
        assert_eq!(strip_asset_prefix("assets/foo.ttf", ASSET_PREFIX), "foo.ttf");
        assert_eq!(strip_asset_prefix("assets/fonts/foo.ttf", ASSET_PREFIX), "fonts/foo.ttf");
        assert_eq!(strip_asset_prefix("/sdcard/foo.ttf", ASSET_PREFIX), "/sdcard/foo.ttf");
        assert_eq!(strip_asset_prefix("my/assets/foo.ttf", ASSET_PREFIX), "my/assets/foo.ttf");
        assert_eq!(strip_asset_prefix("Arial", ASSET_PREFIX), "Arial");
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |name: &str| format!("assets/{}", name);
        assert_eq!(resolver.full_path_for_filename("a.ttf"), "assets/a.ttf");
    }

    #[test]
    fn test_search_path_resolver_first_hit_wins() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        std::fs::write(second.path().join("a.ttf"), b"font").unwrap();
        std::fs::write(second.path().join("b.ttf"), b"font").unwrap();
        std::fs::write(first.path().join("b.ttf"), b"font").unwrap();

        let resolver = SearchPathResolver::new()
            .with_search_path(first.path())
            .with_search_path(second.path());

        assert_eq!(
            resolver.full_path_for_filename("a.ttf"),
            second.path().join("a.ttf").to_string_lossy()
        );
        assert_eq!(
            resolver.full_path_for_filename("b.ttf"),
            first.path().join("b.ttf").to_string_lossy()
        );
    }

    #[test]
    fn test_search_path_resolver_passes_unknown_names() {
        let dir = tempfile::tempdir().unwrap();
        let resolver = SearchPathResolver::new().with_search_path(dir.path());
        assert_eq!(resolver.full_path_for_filename("Helvetica"), "Helvetica");
        assert_eq!(resolver.full_path_for_filename(""), "");
    }

    #[test]
    fn test_search_path_resolver_skips_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("fonts")).unwrap();
        let resolver = SearchPathResolver::new().with_search_path(dir.path());
        assert_eq!(resolver.full_path_for_filename("fonts"), "fonts");
    }
}
