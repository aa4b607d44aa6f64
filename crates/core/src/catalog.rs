//! The fixed, ordered list of shops the widget searches.
//!
//! Insertion order is display order: the landing view and every result list
//! follow it. Catalogs are immutable once built.

use std::collections::HashSet;

use thiserror::Error;

use crate::types::{Shop, ShopId};

/// Errors building a [`Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The JSON document could not be parsed into shop records.
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share the same id.
    #[error("duplicate shop id: {0}")]
    DuplicateId(ShopId),
}

/// An ordered, immutable sequence of shops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    shops: Vec<Shop>,
}

impl Catalog {
    /// Build a catalog from records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two records share an id.
    pub fn new(shops: Vec<Shop>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(shops.len());
        for shop in &shops {
            if !seen.insert(&shop.id) {
                return Err(CatalogError::DuplicateId(shop.id.clone()));
            }
        }
        Ok(Self { shops })
    }

    /// Load a catalog from a JSON array of shop objects.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON or invalid ids, and
    /// [`CatalogError::DuplicateId`] for repeated ids.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let shops: Vec<Shop> = serde_json::from_str(json)?;
        let catalog = Self::new(shops)?;
        tracing::debug!(shops = catalog.len(), "Loaded catalog from JSON");
        Ok(catalog)
    }

    /// The catalog embedded in the widget.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            shops: vec![
                builtin_shop(
                    "short-and-stout",
                    "Short and Stout Tea Lounge",
                    "1736 Western Ave, Albany, NY",
                    &["Premium", "Tea", "Boba"],
                    "shop-detail.html",
                    "assets/short-and-stout.jpg",
                ),
                builtin_shop(
                    "eggcellent",
                    "Eggcellent",
                    "1475 Western Ave, Albany, NY",
                    &["Breakfast", "Boba", "Student-friendly"],
                    "eggcellent-detail.html",
                    "assets/eggcellent.jpg",
                ),
                builtin_shop(
                    "gongcha",
                    "Gong Cha",
                    "1232 Western Ave, Albany, NY",
                    &["Chain", "Customizable"],
                    "gongcha-detail.html",
                    "assets/gongcha-1.jpg",
                ),
                builtin_shop(
                    "berryandberry",
                    "Berry & Berry",
                    "Crossgates Mall, Albany, NY",
                    &["Smoothies", "Boba"],
                    "berryandberry-detail.html",
                    "assets/berryandberry-1.jpg",
                ),
                builtin_shop(
                    "romanteac",
                    "Romanteac Bubble Tea",
                    "260 Osborne Rd, Albany, NY",
                    &["Fruit Tea", "Milk Tea"],
                    "romanteac-detail.html",
                    "assets/romanteac-1.jpg",
                ),
            ],
        }
    }

    /// All shops in display order.
    #[must_use]
    pub fn shops(&self) -> &[Shop] {
        &self.shops
    }

    /// Iterate over shops in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Shop> {
        self.shops.iter()
    }

    /// Look up a shop by id.
    #[must_use]
    pub fn get(&self, id: &ShopId) -> Option<&Shop> {
        self.shops.iter().find(|shop| &shop.id == id)
    }

    /// Number of shops.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shops.len()
    }

    /// Whether the catalog has no shops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shops.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Shop;
    type IntoIter = std::slice::Iter<'a, Shop>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn builtin_shop(
    id: &'static str,
    name: &str,
    address: &str,
    tags: &[&str],
    link: &str,
    img: &str,
) -> Shop {
    Shop {
        id: ShopId::from_static(id),
        name: name.to_string(),
        address: address.to_string(),
        tags: tags.iter().map(ToString::to_string).collect(),
        link: link.to_string(),
        img: img.to_string(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            [
                "short-and-stout",
                "eggcellent",
                "gongcha",
                "berryandberry",
                "romanteac"
            ]
        );
    }

    #[test]
    fn test_builtin_ids_are_valid_and_unique() {
        let catalog = Catalog::builtin();
        for shop in &catalog {
            assert!(ShopId::parse(shop.id.as_str()).is_ok());
        }
        assert!(Catalog::new(catalog.shops().to_vec()).is_ok());
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::builtin();
        let id = ShopId::parse("berryandberry").unwrap();
        let shop = catalog.get(&id).unwrap();
        assert_eq!(shop.name, "Berry & Berry");
        assert_eq!(shop.address, "Crossgates Mall, Albany, NY");

        let missing = ShopId::parse("nope").unwrap();
        assert!(catalog.get(&missing).is_none());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": "a", "name": "A", "address": "1 St", "tags": ["x"], "link": "a.html", "img": "a.jpg"},
            {"id": "b", "name": "B", "address": "2 St", "tags": [], "link": "b.html", "img": "b.jpg"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.shops().get(1).unwrap().name, "B");
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = r#"[
            {"id": "a", "name": "A", "address": "1 St", "link": "a.html", "img": "a.jpg"},
            {"id": "a", "name": "A2", "address": "2 St", "link": "b.html", "img": "b.jpg"}
        ]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateId(id)) if id.as_str() == "a"
        ));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"[{"id": "Bad Id", "name": "", "address": "", "link": "", "img": ""}]"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
    }
}
