//! Shop Search Core - catalog filtering and result rendering.
//!
//! This crate contains everything the shop search widget does that does not
//! need a browser:
//! - `types` - Shop records and their type-safe identifiers
//! - `catalog` - The fixed, ordered list of shops (builtin or loaded from JSON)
//! - `search` - Query normalization and substring filtering
//! - `render` - Askama templates producing the results markup
//! - `store` - Key-value persistence of the last submitted query
//! - `config` - Region ids, storage key and log level
//! - `widget` - The mounted widget tying the pieces together
//!
//! # Architecture
//!
//! The browser binding (`shop-search-web`) only locates DOM elements, wires
//! event listeners and implements [`KeyValueStore`] over `localStorage`. All
//! behavior lives here behind the [`Region`] and [`KeyValueStore`] traits so
//! it can be tested without a DOM.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
mod filters;
pub mod render;
pub mod search;
pub mod store;
pub mod types;
pub mod widget;

pub use catalog::{Catalog, CatalogError};
pub use config::{ConfigError, RegionIds, WidgetConfig};
pub use render::RenderError;
pub use search::{QueryError, SearchOutcome, SearchQuery};
pub use store::{KeyValueStore, LastSearch, MemoryStore, StoreError};
pub use types::*;
pub use widget::{Region, Regions, ShopSearchWidget};
