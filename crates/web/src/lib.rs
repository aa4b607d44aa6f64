#![cfg_attr(not(test), forbid(unsafe_code))]

//! Browser binding for the shop search widget.
//!
//! The widget logic lives in `shop-search-core`; this crate only:
//! - locates the page regions and reads the text input,
//! - attaches the click and Enter-key triggers,
//! - persists the last search in `window.localStorage`,
//! - forwards `tracing` output to the browser console.
//!
//! With the default `auto-mount` feature the widget mounts itself with
//! default options once the document is ready. Hosts that need other region
//! ids or their own catalog disable the feature and call `mountShopSearch`.

mod error;
mod setup;
mod trigger;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod logging;
#[cfg(target_arch = "wasm32")]
mod wasm;

pub use error::WebError;
pub use setup::load_setup;
pub use trigger::{MountGuard, Trigger};

#[cfg(target_arch = "wasm32")]
pub use dom::{ElementRegion, LocalStorage};
#[cfg(target_arch = "wasm32")]
pub use wasm::mount_shop_search;
