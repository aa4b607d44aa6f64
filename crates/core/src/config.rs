//! Widget configuration.
//!
//! The browser has no environment variables, so configuration arrives as a
//! JSON options string from the host page. Every field is optional.
//!
//! # Options
//!
//! - `regions.input` - Text input id (default: `shop-search-input`)
//! - `regions.submit` - Submit control id (default: `shop-search-btn`)
//! - `regions.results` - Results container id (default: `shop-search-results`)
//! - `regions.lastSearch` - Last-search note id (default: `shop-search-last`)
//! - `storageKey` - Persistent store key (default: `lastSearch`)
//! - `logLevel` - Tracing filter directive (default: `info`)

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid widget options: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid option {0}: {1}")]
    InvalidValue(String, String),
}

/// Ids of the page regions the widget binds to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegionIds {
    /// Text input control
    pub input: String,
    /// Submit control
    pub submit: String,
    /// Results output container
    pub results: String,
    /// Optional last-search display element
    pub last_search: String,
}

impl Default for RegionIds {
    fn default() -> Self {
        Self {
            input: "shop-search-input".to_string(),
            submit: "shop-search-btn".to_string(),
            results: "shop-search-results".to_string(),
            last_search: "shop-search-last".to_string(),
        }
    }
}

/// Shop search widget configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Page regions
    pub regions: RegionIds,
    /// Key the last search is persisted under
    pub storage_key: String,
    /// Tracing filter directive, e.g. `debug` or `shop_search_core=trace`
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            regions: RegionIds::default(),
            storage_key: "lastSearch".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Load configuration from a JSON options string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the JSON is malformed or a region id or the
    /// storage key is blank.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every id and the storage key are non-blank.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the first blank field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("regions.input", &self.regions.input),
            ("regions.submit", &self.regions.submit),
            ("regions.results", &self.regions.results),
            ("regions.lastSearch", &self.regions.last_search),
            ("storageKey", &self.storage_key),
        ];

        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    name.to_string(),
                    "must not be blank".to_string(),
                ));
            }
        }

        Ok(())
    }
}
