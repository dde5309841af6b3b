//! Catalog configuration for application shells.
//!
//! # Responsibility
//! - Hold the document location, image directory and log level.
//! - Resolve overrides from environment variables on request.
//! - Build the matching `ProjectSource` for a location.
//!
//! # Invariants
//! - Core services never read the environment; only `from_env` does.
//! - Blank overrides are ignored and the default is kept.

use crate::catalog::normalize::NormalizeOptions;
use crate::catalog::source::{
    BoxedProjectSource, FileProjectSource, HttpProjectSource, TransportError,
};
use crate::logging::default_log_level;

/// Relative location of the projects document.
pub const DEFAULT_DATA_LOCATION: &str = "data/projects.json";
/// Directory prefix for computed project image paths.
pub const DEFAULT_IMAGE_DIR: &str = "media/images/";

pub const DATA_LOCATION_ENV: &str = "PORTFOLIO_DATA_PATH";
pub const IMAGE_DIR_ENV: &str = "PORTFOLIO_IMAGE_DIR";
pub const LOG_LEVEL_ENV: &str = "PORTFOLIO_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// File path, or `http(s)://` URL, of the projects document.
    pub data_location: String,
    pub image_dir: String,
    pub log_level: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_location: DEFAULT_DATA_LOCATION.to_string(),
            image_dir: DEFAULT_IMAGE_DIR.to_string(),
            log_level: default_log_level().to_string(),
        }
    }
}

impl CatalogConfig {
    /// Reads overrides from `PORTFOLIO_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves overrides through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let resolve = |key: &str, default: String| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty())
                .unwrap_or(default)
        };

        Self {
            data_location: resolve(DATA_LOCATION_ENV, defaults.data_location),
            image_dir: resolve(IMAGE_DIR_ENV, defaults.image_dir),
            log_level: resolve(LOG_LEVEL_ENV, defaults.log_level),
        }
    }

    /// Whether the document is fetched over HTTP.
    pub fn is_remote(&self) -> bool {
        let location = self.data_location.to_ascii_lowercase();
        location.starts_with("http://") || location.starts_with("https://")
    }

    pub fn normalize_options(&self) -> NormalizeOptions {
        NormalizeOptions {
            image_dir: self.image_dir.clone(),
        }
    }

    /// Builds an HTTP or file source for `data_location`.
    ///
    /// # Errors
    /// - Returns `TransportError` when the HTTP client cannot be created.
    pub fn build_source(&self) -> Result<BoxedProjectSource, TransportError> {
        if self.is_remote() {
            let source = HttpProjectSource::new(self.data_location.clone())?;
            return Ok(Box::new(source));
        }
        Ok(Box::new(FileProjectSource::new(&self.data_location)))
    }
}

#[cfg(test)]
mod tests {
    use super::{
        CatalogConfig, DATA_LOCATION_ENV, DEFAULT_DATA_LOCATION, DEFAULT_IMAGE_DIR,
        IMAGE_DIR_ENV,
    };
    use crate::catalog::source::ProjectSource;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_without_overrides() {
        let config = CatalogConfig::from_lookup(|_| None);
        assert_eq!(config.data_location, DEFAULT_DATA_LOCATION);
        assert_eq!(config.image_dir, DEFAULT_IMAGE_DIR);
        assert!(!config.is_remote());
    }

    #[test]
    fn blank_overrides_are_ignored() {
        let config = CatalogConfig::from_lookup(lookup_from(&[
            (DATA_LOCATION_ENV, "   "),
            (IMAGE_DIR_ENV, " assets/img "),
        ]));
        assert_eq!(config.data_location, DEFAULT_DATA_LOCATION);
        assert_eq!(config.image_dir, "assets/img");
    }

    #[test]
    fn http_locations_build_remote_sources() {
        let config = CatalogConfig::from_lookup(lookup_from(&[(
            DATA_LOCATION_ENV,
            "HTTPS://example.com/data/projects.json",
        )]));
        assert!(config.is_remote());
        let source = config.build_source().expect("http source");
        assert_eq!(source.location(), "HTTPS://example.com/data/projects.json");
    }

    #[test]
    fn file_locations_build_file_sources() {
        let config = CatalogConfig::default();
        let source = config.build_source().expect("file source");
        assert_eq!(source.location(), DEFAULT_DATA_LOCATION);
    }
}
