//! Core types for the shop search widget.

pub mod id;
pub mod shop;

pub use id::{ShopId, ShopIdError};
pub use shop::Shop;
