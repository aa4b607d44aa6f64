//! Results markup.
//!
//! Templates live in `templates/shops/`. Askama's own escaping is disabled;
//! every data-sourced or user-influenced value goes through the
//! `escape_minimal` filter instead, which escapes `&`, `<` and `>` only.

use askama::Template;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::filters;
use crate::search::SearchOutcome;
use crate::types::Shop;

/// Rendering failed inside a template.
#[derive(Debug, Error)]
#[error("template rendering failed: {0}")]
pub struct RenderError(#[from] askama::Error);

/// Landing view: every shop, no header.
#[derive(Template)]
#[template(path = "shops/catalog.html", escape = "none")]
pub struct CatalogTemplate<'a> {
    pub shops: &'a [Shop],
}

/// One or more matches, with a count header inside a live region.
#[derive(Template)]
#[template(path = "shops/results.html", escape = "none")]
pub struct ResultsTemplate<'a, 'b> {
    pub shops: &'b [&'a Shop],
}

/// A valid query with no matches.
#[derive(Template)]
#[template(path = "shops/no_results.html", escape = "none")]
pub struct NoResultsTemplate<'a> {
    pub query: &'a str,
}

/// Validation prompt for an empty query.
#[derive(Template)]
#[template(path = "shops/empty_query.html", escape = "none")]
pub struct EmptyQueryTemplate;

/// Render the full catalog for the landing view.
///
/// # Errors
///
/// Returns [`RenderError`] if the template fails to render.
pub fn render_catalog(catalog: &Catalog) -> Result<String, RenderError> {
    Ok(CatalogTemplate {
        shops: catalog.shops(),
    }
    .render()?)
}

/// Render the markup for a search outcome.
///
/// # Errors
///
/// Returns [`RenderError`] if the template fails to render.
pub fn render_outcome(outcome: &SearchOutcome<'_>) -> Result<String, RenderError> {
    let html = match outcome {
        SearchOutcome::EmptyQuery => EmptyQueryTemplate.render()?,
        SearchOutcome::NoMatches { query } => NoResultsTemplate {
            query: query.as_str(),
        }
        .render()?,
        SearchOutcome::Matches { shops, .. } => ResultsTemplate {
            shops: shops.as_slice(),
        }
        .render()?,
    };
    Ok(html)
}

/// Text for the last-search note; blank when nothing was searched.
#[must_use]
pub fn last_search_note(last: &str) -> String {
    if last.is_empty() {
        String::new()
    } else {
        format!("Last search: {last}")
    }
}
