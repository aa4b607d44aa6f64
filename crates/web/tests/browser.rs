//! Browser tests for the DOM binding.
//!
//! Run with `wasm-pack test --headless --firefox crates/web --no-default-features`.

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used)]

use shop_search_core::{KeyValueStore, Region};
use shop_search_web::{ElementRegion, LocalStorage, mount_shop_search};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, HtmlElement, HtmlInputElement, KeyboardEvent, KeyboardEventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn build_page(prefix: &str, with_note: bool) {
    let body = document().body().unwrap();
    let mut html = format!(
        r#"<input id="{prefix}-input"><button id="{prefix}-btn">Search</button><div id="{prefix}-results"></div>"#
    );
    if with_note {
        html.push_str(&format!(r#"<p id="{prefix}-last">stale</p>"#));
    }
    body.set_inner_html(&html);
}

fn options(prefix: &str) -> String {
    format!(
        r#"{{"regions": {{"input": "{prefix}-input", "submit": "{prefix}-btn", "results": "{prefix}-results", "lastSearch": "{prefix}-last"}}, "storageKey": "{prefix}.lastSearch"}}"#
    )
}

fn results_html(prefix: &str) -> String {
    document()
        .get_element_by_id(&format!("{prefix}-results"))
        .unwrap()
        .inner_html()
}

#[wasm_bindgen_test]
fn local_storage_roundtrip() {
    let mut store = LocalStorage::open();
    store.set("shop-search-test", "boba").unwrap();
    assert_eq!(
        store.get("shop-search-test").unwrap().as_deref(),
        Some("boba")
    );
}

#[wasm_bindgen_test]
fn element_region_writes_markup_and_text() {
    let element = document().create_element("div").unwrap();
    let region = ElementRegion::from(element.clone());
    region.set_html("<p>hi</p>");
    assert_eq!(element.inner_html(), "<p>hi</p>");
    region.set_text("<p>hi</p>");
    assert_eq!(element.text_content().as_deref(), Some("<p>hi</p>"));
}

// Mounting claims the page, so a single test walks the whole flow.
#[wasm_bindgen_test]
fn mount_and_search_flow() {
    // Missing regions: inert, and the page stays unclaimed.
    document().body().unwrap().set_inner_html("");
    assert!(!mount_shop_search(Some(options("absent")), None));

    // Input region that is not an <input>: rejected before anything renders,
    // and the page stays unclaimed.
    document().body().unwrap().set_inner_html(
        r#"<div id="bad-input"></div><button id="bad-btn"></button><div id="bad-results"></div>"#,
    );
    assert!(!mount_shop_search(Some(options("bad")), None));
    assert_eq!(results_html("bad"), "");

    build_page("flow", true);
    assert!(mount_shop_search(Some(options("flow")), None));
    assert!(results_html("flow").contains("Romanteac Bubble Tea"));

    let note = document().get_element_by_id("flow-last").unwrap();
    assert_eq!(note.text_content().as_deref(), Some(""));

    let input: HtmlInputElement = document()
        .get_element_by_id("flow-input")
        .unwrap()
        .dyn_into()
        .unwrap();
    input.set_value("boba");
    let button: HtmlElement = document()
        .get_element_by_id("flow-btn")
        .unwrap()
        .dyn_into()
        .unwrap();
    button.click();
    assert!(results_html("flow").contains("Found 3 result(s):"));

    input.set_value("Crossgates");
    let init = KeyboardEventInit::new();
    init.set_key("Enter");
    init.set_cancelable(true);
    let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
    input.dispatch_event(&event).unwrap();
    assert!(event.default_prevented());
    assert!(results_html("flow").contains("Found 1 result(s):"));

    let stored = LocalStorage::open().get("flow.lastSearch").unwrap();
    assert_eq!(stored.as_deref(), Some("crossgates"));

    // Second mount on the same page is ignored.
    assert!(!mount_shop_search(Some(options("flow")), None));
}
