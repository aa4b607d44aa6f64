//! Shop record type.

use serde::{Deserialize, Serialize};

use super::ShopId;

/// A single shop in the catalog.
///
/// Records are immutable once the catalog is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Shop {
    /// Unique identifier.
    pub id: ShopId,
    /// Display name.
    pub name: String,
    /// Street address or venue.
    pub address: String,
    /// Free-form tags, searched alongside name and address.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Destination URL of the shop's detail page.
    pub link: String,
    /// Image URL shown on the result card.
    pub img: String,
}

impl Shop {
    /// Returns the lowercase text searched for this shop.
    ///
    /// Name, address and tags joined by single spaces.
    #[must_use]
    pub fn haystack(&self) -> String {
        let mut hay = String::with_capacity(
            self.name.len()
                + self.address.len()
                + self.tags.iter().map(|t| t.len() + 1).sum::<usize>()
                + 1,
        );
        hay.push_str(&self.name);
        hay.push(' ');
        hay.push_str(&self.address);
        hay.push(' ');
        hay.push_str(&self.tags.join(" "));
        hay.to_lowercase()
    }
}
