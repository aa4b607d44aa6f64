//! `wasm-bindgen` exports: page-ready mounting and event wiring.

use std::cell::RefCell;
use std::rc::Rc;

use shop_search_core::{Catalog, LastSearch, ShopSearchWidget, WidgetConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Event, HtmlInputElement, KeyboardEvent};

use crate::dom::{self, ElementRegion, LocalStorage};
use crate::error::WebError;
use crate::logging;
use crate::setup::load_setup;
use crate::trigger::{MountGuard, Trigger};

type Widget = ShopSearchWidget<LocalStorage, ElementRegion>;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();

    #[cfg(feature = "auto-mount")]
    auto_mount();
}

/// Mount the shop search widget.
///
/// `options` is a JSON object of widget options and `catalog` a JSON array of
/// shops; either may be omitted. Returns `true` if the widget activated, and
/// `false` if the page lacks the required regions, a widget is already
/// mounted, or the arguments are invalid (logged to the console).
#[wasm_bindgen(js_name = mountShopSearch)]
#[must_use]
pub fn mount_shop_search(options: Option<String>, catalog: Option<String>) -> bool {
    match load_setup(options.as_deref(), catalog.as_deref()) {
        Ok((config, catalog)) => mount_or_log(&config, catalog),
        Err(e) => {
            logging::init(&WidgetConfig::default().log_level);
            tracing::error!(error = %e, "Shop search not mounted");
            false
        }
    }
}

#[cfg(feature = "auto-mount")]
fn auto_mount() {
    let scheduled = when_ready(|| {
        mount_or_log(&WidgetConfig::default(), Catalog::builtin());
    });

    if let Err(e) = scheduled {
        logging::init(&WidgetConfig::default().log_level);
        tracing::warn!(error = %e, "Shop search auto-mount skipped");
    }
}

/// Run `f` once the document has been parsed.
#[cfg(feature = "auto-mount")]
fn when_ready(f: impl FnOnce() + 'static) -> Result<(), WebError> {
    use web_sys::DocumentReadyState;

    let document = dom::document()?;

    if !matches!(document.ready_state(), DocumentReadyState::Loading) {
        f();
        return Ok(());
    }

    let on_ready = Closure::once_into_js(move |_event: Event| f());
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())?;
    Ok(())
}

fn mount_or_log(config: &WidgetConfig, catalog: Catalog) -> bool {
    logging::init(&config.log_level);

    if !MountGuard::claim() {
        tracing::warn!("Shop search already mounted on this page");
        return false;
    }

    // Nothing on the page has changed until `prepare` succeeds, so only its
    // failures give the page back.
    let prepared = match prepare(config, catalog) {
        Ok(Some(prepared)) => prepared,
        Ok(None) => {
            MountGuard::release();
            return false;
        }
        Err(e) => {
            MountGuard::release();
            tracing::error!(error = %e, "Failed to mount shop search");
            return false;
        }
    };

    match activate(prepared) {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(error = %e, "Failed to wire shop search triggers");
            false
        }
    }
}

/// A widget bound to its regions, not yet visible or wired.
struct Prepared {
    widget: Rc<RefCell<Widget>>,
    input: HtmlInputElement,
    submit: ElementRegion,
}

#[tracing::instrument(skip_all, fields(results = %config.regions.results))]
fn prepare(config: &WidgetConfig, catalog: Catalog) -> Result<Option<Prepared>, WebError> {
    let document = dom::document()?;

    let Some(regions) = dom::locate_regions(&document, &config.regions) else {
        return Ok(None);
    };

    let input = regions.input.into_input(&config.regions.input)?;

    let last_search = LastSearch::new(LocalStorage::open(), config.storage_key.clone());
    let widget = ShopSearchWidget::new(catalog, last_search, regions.results, regions.last_note);

    Ok(Some(Prepared {
        widget: Rc::new(RefCell::new(widget)),
        input,
        submit: regions.submit,
    }))
}

/// Wire both triggers, then show the landing grid.
fn activate(prepared: Prepared) -> Result<(), WebError> {
    let Prepared {
        widget,
        input,
        submit,
    } = prepared;

    attach_click(&submit, &input, &widget)?;
    attach_enter(&input, &widget)?;

    widget.borrow().show_landing();
    Ok(())
}

fn run_search(widget: &RefCell<Widget>, input: &HtmlInputElement, trigger: Trigger) {
    let raw = input.value();
    let matches = widget.borrow_mut().search(&raw).len();
    tracing::debug!(trigger = trigger.as_str(), matches, "Search triggered");
}

fn attach_click(
    submit: &ElementRegion,
    input: &HtmlInputElement,
    widget: &Rc<RefCell<Widget>>,
) -> Result<(), WebError> {
    let input = input.clone();
    let widget = Rc::clone(widget);
    let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        run_search(&widget, &input, Trigger::Click);
    });

    submit
        .element()
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;

    // Listeners stay attached for the life of the page.
    on_click.forget();
    Ok(())
}

fn attach_enter(input: &HtmlInputElement, widget: &Rc<RefCell<Widget>>) -> Result<(), WebError> {
    let target = input.clone();
    let widget = Rc::clone(widget);
    let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if let Some(trigger) = Trigger::from_key(&event.key()) {
            event.prevent_default();
            run_search(&widget, &target, trigger);
        }
    });

    input.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())?;

    on_keydown.forget();
    Ok(())
}
