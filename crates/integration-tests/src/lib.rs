//! Integration tests for the shop search widget.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shop-search-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `widget_scenarios` - Mount and search flows against fake page regions
//! - `filter_properties` - Property tests of filtering over generated catalogs
//!
//! The fixtures here stand in for the browser: [`PageRegion`] records what the
//! widget writes and [`TestPage`] mounts a widget over an in-memory store.

use std::cell::RefCell;
use std::rc::Rc;

use shop_search_core::{
    Catalog, LastSearch, MemoryStore, Region, RegionIds, Regions, ShopSearchWidget,
};

/// A fake DOM region. Clones share contents, like element handles do.
#[derive(Debug, Clone, Default)]
pub struct PageRegion {
    html: Rc<RefCell<String>>,
    text: Rc<RefCell<String>>,
}

impl PageRegion {
    /// Create a region with initial text, e.g. stale server-rendered content.
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let region = Self::default();
        *region.text.borrow_mut() = text.to_string();
        region
    }

    /// The markup last written.
    #[must_use]
    pub fn html(&self) -> String {
        self.html.borrow().clone()
    }

    /// The text content last written.
    #[must_use]
    pub fn text(&self) -> String {
        self.text.borrow().clone()
    }
}

impl Region for PageRegion {
    fn set_html(&self, html: &str) {
        *self.html.borrow_mut() = html.to_string();
    }

    fn set_text(&self, text: &str) {
        *self.text.borrow_mut() = text.to_string();
    }
}

/// A page with the widget's regions, some of which may be absent.
#[derive(Debug, Clone)]
pub struct TestPage {
    pub ids: RegionIds,
    pub present: Vec<String>,
    pub results: PageRegion,
    pub note: PageRegion,
}

impl TestPage {
    /// A page containing every region.
    #[must_use]
    pub fn complete() -> Self {
        let ids = RegionIds::default();
        let present = vec![
            ids.input.clone(),
            ids.submit.clone(),
            ids.results.clone(),
            ids.last_search.clone(),
        ];
        Self {
            ids,
            present,
            results: PageRegion::default(),
            note: PageRegion::with_text("stale"),
        }
    }

    /// Remove a region from the page.
    #[must_use]
    pub fn without(mut self, id: &str) -> Self {
        self.present.retain(|present| present != id);
        self
    }

    /// Locate regions the way the browser binding does.
    #[must_use]
    pub fn locate(&self) -> Option<Regions<PageRegion>> {
        Regions::locate(&self.ids, |id| {
            if !self.present.iter().any(|present| present == id) {
                return None;
            }
            Some(if id == self.ids.results {
                self.results.clone()
            } else if id == self.ids.last_search {
                self.note.clone()
            } else {
                PageRegion::default()
            })
        })
    }

    /// Locate regions and mount a widget, or `None` if the page is incomplete.
    #[must_use]
    pub fn mount(
        &self,
        catalog: Catalog,
        store: MemoryStore,
    ) -> Option<ShopSearchWidget<MemoryStore, PageRegion>> {
        let regions = self.locate()?;
        Some(ShopSearchWidget::mount(
            catalog,
            LastSearch::new(store, "lastSearch"),
            regions.results,
            regions.last_note,
        ))
    }
}

/// Build a catalog from `(id, name, address, tags)` tuples.
///
/// # Panics
///
/// Panics if the records do not form a valid catalog.
#[must_use]
#[allow(clippy::expect_used)]
pub fn catalog_of(records: &[(&str, &str, &str, &[&str])]) -> Catalog {
    let shops: Vec<serde_json::Value> = records
        .iter()
        .map(|(id, name, address, tags)| {
            serde_json::json!({
                "id": id,
                "name": name,
                "address": address,
                "tags": tags,
                "link": format!("{id}.html"),
                "img": format!("assets/{id}.jpg"),
            })
        })
        .collect();
    Catalog::from_json(&serde_json::Value::Array(shops).to_string()).expect("valid test catalog")
}
