//! Options and catalog handed over by the host page.

use shop_search_core::{Catalog, WidgetConfig};

use crate::error::WebError;

/// Parse the optional JSON options and catalog passed to `mountShopSearch`.
///
/// Missing arguments fall back to the defaults and the builtin catalog.
///
/// # Errors
///
/// Returns [`WebError::Setup`] if either document fails to load.
pub fn load_setup(
    options: Option<&str>,
    catalog: Option<&str>,
) -> Result<(WidgetConfig, Catalog), WebError> {
    let config = options
        .map(WidgetConfig::from_json)
        .transpose()?
        .unwrap_or_default();
    let catalog = catalog
        .map(Catalog::from_json)
        .transpose()?
        .unwrap_or_else(Catalog::builtin);
    Ok((config, catalog))
}
