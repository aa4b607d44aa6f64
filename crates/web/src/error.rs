//! Errors raised while binding the widget to the page.
//!
//! None of these reach the page user; the binding logs them and the widget
//! stays inert.

use thiserror::Error;

/// Error type produced by the browser binding.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WebError {
    /// The DOM APIs are not accessible (e.g., when executed outside of a browser).
    #[error("DOM is not available")]
    DomUnavailable,
    /// The element bound as the text input is not an `<input>`.
    #[error("element `{0}` is not an input element")]
    NotAnInput(String),
    /// The widget options or catalog could not be loaded.
    #[error("invalid widget setup: {0}")]
    Setup(String),
    /// Wrapper around JavaScript exceptions.
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<shop_search_core::ConfigError> for WebError {
    fn from(value: shop_search_core::ConfigError) -> Self {
        Self::Setup(value.to_string())
    }
}

impl From<shop_search_core::CatalogError> for WebError {
    fn from(value: shop_search_core::CatalogError) -> Self {
        Self::Setup(value.to_string())
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for WebError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        value
            .as_string()
            .map_or_else(|| Self::Js(format!("{value:?}")), Self::Js)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_web_error_display() {
        assert_eq!(WebError::DomUnavailable.to_string(), "DOM is not available");
        assert_eq!(
            WebError::NotAnInput("shop-search-input".to_string()).to_string(),
            "element `shop-search-input` is not an input element"
        );
    }

    #[test]
    fn test_setup_errors_convert() {
        let config_err = shop_search_core::WidgetConfig::from_json("{").unwrap_err();
        assert!(matches!(WebError::from(config_err), WebError::Setup(_)));

        let catalog_err = shop_search_core::Catalog::from_json("nope").unwrap_err();
        assert!(matches!(WebError::from(catalog_err), WebError::Setup(_)));
    }
}
