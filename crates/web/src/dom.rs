use shop_search_core::{KeyValueStore, Region, RegionIds, Regions, StoreError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, Storage};

use crate::error::WebError;

/// A DOM element the widget writes into.
#[derive(Debug, Clone)]
pub struct ElementRegion(Element);

impl ElementRegion {
    /// Returns the underlying element.
    #[must_use]
    pub const fn element(&self) -> &Element {
        &self.0
    }

    /// Converts the region into the text input it is expected to be.
    pub fn into_input(self, id: &str) -> Result<HtmlInputElement, WebError> {
        self.0
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| WebError::NotAnInput(id.to_string()))
    }
}

impl From<Element> for ElementRegion {
    fn from(element: Element) -> Self {
        Self(element)
    }
}

impl Region for ElementRegion {
    fn set_html(&self, html: &str) {
        self.0.set_inner_html(html);
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }
}

/// Returns the page's document.
pub fn document() -> Result<Document, WebError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or(WebError::DomUnavailable)
}

/// Looks up the widget's regions by id.
pub fn locate_regions(document: &Document, ids: &RegionIds) -> Option<Regions<ElementRegion>> {
    Regions::locate(ids, |id| document.get_element_by_id(id).map(ElementRegion))
}

/// [`KeyValueStore`] over `window.localStorage`.
///
/// Storage can be missing or blocked (private browsing, sandboxed frames);
/// every operation then reports [`StoreError::Unavailable`].
#[derive(Debug, Clone)]
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    /// Opens the window's local storage.
    #[must_use]
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|window| match window.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!(error = %js_message(&e), "localStorage is blocked");
                None
            }
        });
        Self { storage }
    }

    fn storage(&self) -> Result<&Storage, StoreError> {
        self.storage
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("localStorage is not accessible".to_string()))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage()?
            .get_item(key)
            .map_err(|e| StoreError::Backend(js_message(&e)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| StoreError::Backend(js_message(&e)))
    }
}

fn js_message(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}
