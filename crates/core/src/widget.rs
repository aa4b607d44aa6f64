//! The mounted shop search widget.
//!
//! A widget is built once per page from the located [`Regions`], renders the
//! landing grid immediately, and then handles every search trigger through
//! [`ShopSearchWidget::search`]. It owns its catalog and last-search store;
//! there is no ambient global state.

use tracing::instrument;

use crate::catalog::Catalog;
use crate::config::RegionIds;
use crate::render;
use crate::search::{self, SearchOutcome};
use crate::store::{KeyValueStore, LastSearch};
use crate::types::ShopId;

/// A page region the widget writes into.
pub trait Region {
    /// Replace the region's markup.
    fn set_html(&self, html: &str);

    /// Replace the region's text content.
    fn set_text(&self, text: &str);
}

/// The page regions the widget binds to.
#[derive(Debug, Clone)]
pub struct Regions<R> {
    pub input: R,
    pub submit: R,
    pub results: R,
    pub last_note: Option<R>,
}

impl<R> Regions<R> {
    /// Look up every region by id.
    ///
    /// Returns `None` when the input, submit control or results container is
    /// missing; the widget then stays inactive.
    pub fn locate(ids: &RegionIds, mut lookup: impl FnMut(&str) -> Option<R>) -> Option<Self> {
        let input = lookup(&ids.input);
        let submit = lookup(&ids.submit);
        let results = lookup(&ids.results);

        let (Some(input), Some(submit), Some(results)) = (input, submit, results) else {
            tracing::debug!(
                input = %ids.input,
                submit = %ids.submit,
                results = %ids.results,
                "Shop search regions missing, widget disabled"
            );
            return None;
        };

        Some(Self {
            input,
            submit,
            results,
            last_note: lookup(&ids.last_search),
        })
    }
}

/// Shop search over a fixed catalog, rendering into a results region.
#[derive(Debug)]
pub struct ShopSearchWidget<S, R> {
    catalog: Catalog,
    last_search: LastSearch<S>,
    results: R,
    last_note: Option<R>,
}

impl<S: KeyValueStore, R: Region> ShopSearchWidget<S, R> {
    /// Build the widget without touching any region.
    ///
    /// Call [`Self::show_landing`] once the triggers are wired.
    pub const fn new(
        catalog: Catalog,
        last_search: LastSearch<S>,
        results: R,
        last_note: Option<R>,
    ) -> Self {
        Self {
            catalog,
            last_search,
            results,
            last_note,
        }
    }

    /// Mount the widget: render the full catalog and the last-search note.
    #[instrument(skip_all, fields(shops = catalog.len()))]
    pub fn mount(
        catalog: Catalog,
        last_search: LastSearch<S>,
        results: R,
        last_note: Option<R>,
    ) -> Self {
        let widget = Self::new(catalog, last_search, results, last_note);
        widget.show_landing();
        widget
    }

    /// Render the landing grid and the last-search note.
    pub fn show_landing(&self) {
        match render::render_catalog(&self.catalog) {
            Ok(html) => self.results.set_html(&html),
            Err(e) => tracing::error!(error = %e, "Failed to render catalog"),
        }

        if let Some(note) = &self.last_note {
            note.set_text(&render::last_search_note(&self.last_search.load()));
        }

        tracing::info!("Shop search mounted");
    }

    /// Run a search for `raw` and render the outcome.
    ///
    /// Returns the ids of the matching shops (empty for an empty query or no
    /// matches).
    #[instrument(skip(self))]
    pub fn search(&mut self, raw: &str) -> Vec<ShopId> {
        let outcome = search::evaluate(&self.catalog, raw);

        self.last_search.save(outcome.persisted_value());

        match render::render_outcome(&outcome) {
            Ok(html) => self.results.set_html(&html),
            Err(e) => tracing::error!(error = %e, "Failed to render search results"),
        }

        if let SearchOutcome::Matches { shops, .. } = &outcome {
            tracing::debug!(matches = shops.len(), "Rendered search results");
        }

        outcome.ids()
    }

    /// The catalog being searched.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The persisted last search.
    #[must_use]
    pub const fn last_search(&self) -> &LastSearch<S> {
        &self.last_search
    }

    /// The results region.
    #[must_use]
    pub const fn results(&self) -> &R {
        &self.results
    }
}
