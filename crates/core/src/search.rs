//! Query normalization and catalog filtering.
//!
//! Matching is plain substring containment of the normalized query within a
//! shop's haystack (see [`Shop::haystack`]). There is no tokenization,
//! ranking or fuzzy matching, and results always keep catalog order.

use core::fmt;

use tracing::instrument;

use crate::catalog::Catalog;
use crate::types::{Shop, ShopId};

/// Errors that can occur when parsing a [`SearchQuery`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Nothing left after trimming whitespace.
    #[error("search query cannot be empty")]
    Empty,
}

/// A normalized search query: trimmed and lowercased, never empty.
///
/// ```
/// use shop_search_core::SearchQuery;
///
/// let query = SearchQuery::parse("  Crossgates ").unwrap();
/// assert_eq!(query.as_str(), "crossgates");
///
/// assert!(SearchQuery::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Normalize raw input from the text field.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Empty`] if the input is empty or whitespace-only.
    /// A byte order mark counts as whitespace.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        let normalized = raw
            .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
            .to_lowercase();
        if normalized.is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(Self(normalized))
    }

    /// Returns the normalized query.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `shop` matches this query.
    #[must_use]
    pub fn matches(&self, shop: &Shop) -> bool {
        shop.haystack().contains(self.0.as_str())
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for SearchQuery {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Every shop in `catalog` matching `query`, in catalog order.
#[must_use]
pub fn filter<'a>(catalog: &'a Catalog, query: &SearchQuery) -> Vec<&'a Shop> {
    catalog.iter().filter(|shop| query.matches(shop)).collect()
}

/// The result of a single search attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// The query was empty after normalization.
    EmptyQuery,
    /// A valid query that matched nothing.
    NoMatches {
        /// The normalized query.
        query: SearchQuery,
    },
    /// A valid query with at least one match.
    Matches {
        /// The normalized query.
        query: SearchQuery,
        /// Matching shops in catalog order.
        shops: Vec<&'a Shop>,
    },
}

impl SearchOutcome<'_> {
    /// The value stored as last-search for this outcome.
    ///
    /// An empty query is persisted as `""`.
    #[must_use]
    pub fn persisted_value(&self) -> &str {
        match self {
            Self::EmptyQuery => "",
            Self::NoMatches { query } | Self::Matches { query, .. } => query.as_str(),
        }
    }

    /// Matching shops, empty unless [`SearchOutcome::Matches`].
    #[must_use]
    pub fn shops(&self) -> &[&Shop] {
        match self {
            Self::Matches { shops, .. } => shops,
            Self::EmptyQuery | Self::NoMatches { .. } => &[],
        }
    }

    /// Ids of the matching shops, in order.
    #[must_use]
    pub fn ids(&self) -> Vec<ShopId> {
        self.shops().iter().map(|shop| shop.id.clone()).collect()
    }
}

/// Normalize `raw` and filter `catalog` with it.
#[instrument(skip(catalog), fields(catalog_len = catalog.len()))]
pub fn evaluate<'a>(catalog: &'a Catalog, raw: &str) -> SearchOutcome<'a> {
    let Ok(query) = SearchQuery::parse(raw) else {
        tracing::debug!("Empty search query");
        return SearchOutcome::EmptyQuery;
    };

    let shops = filter(catalog, &query);
    tracing::debug!(query = %query, matches = shops.len(), "Search evaluated");

    if shops.is_empty() {
        SearchOutcome::NoMatches { query }
    } else {
        SearchOutcome::Matches { query, shops }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn ids(outcome: &SearchOutcome<'_>) -> Vec<String> {
        outcome.ids().into_iter().map(String::from).collect()
    }

    #[test]
    fn test_parse_normalizes() {
        assert_eq!(SearchQuery::parse("  BoBa\t").unwrap().as_str(), "boba");
    }

    #[test]
    fn test_parse_empty_and_whitespace() {
        assert_eq!(SearchQuery::parse(""), Err(QueryError::Empty));
        assert_eq!(SearchQuery::parse("   "), Err(QueryError::Empty));
        assert_eq!(SearchQuery::parse("\n\t "), Err(QueryError::Empty));
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        assert_eq!(SearchQuery::parse("\u{feff}"), Err(QueryError::Empty));
        assert_eq!(
            SearchQuery::parse("\u{feff} Boba\u{feff}").unwrap().as_str(),
            "boba"
        );

        let catalog = Catalog::builtin();
        let outcome = evaluate(&catalog, "\u{feff}");
        assert_eq!(outcome, SearchOutcome::EmptyQuery);
        assert_eq!(outcome.persisted_value(), "");
    }

    #[test]
    fn test_boba_matches_three_in_catalog_order() {
        let catalog = Catalog::builtin();
        let outcome = evaluate(&catalog, "boba");
        assert_eq!(
            ids(&outcome),
            ["short-and-stout", "eggcellent", "berryandberry"]
        );
    }

    #[test]
    fn test_address_match_is_case_insensitive() {
        let catalog = Catalog::builtin();
        let outcome = evaluate(&catalog, "Crossgates");
        assert_eq!(ids(&outcome), ["berryandberry"]);
        assert_eq!(outcome.persisted_value(), "crossgates");
    }

    #[test]
    fn test_match_spans_field_boundary() {
        // "Tea Lounge 1736" crosses the name/address join.
        let catalog = Catalog::builtin();
        let outcome = evaluate(&catalog, "lounge 1736");
        assert_eq!(ids(&outcome), ["short-and-stout"]);
    }

    #[test]
    fn test_multi_word_tag() {
        let catalog = Catalog::builtin();
        let outcome = evaluate(&catalog, "milk tea");
        assert_eq!(ids(&outcome), ["romanteac"]);
    }

    #[test]
    fn test_no_matches() {
        let catalog = Catalog::builtin();
        let outcome = evaluate(&catalog, "zzz-none");
        assert!(matches!(
            &outcome,
            SearchOutcome::NoMatches { query } if query.as_str() == "zzz-none"
        ));
        assert!(outcome.shops().is_empty());
    }

    #[test]
    fn test_empty_query_outcome() {
        let catalog = Catalog::builtin();
        let outcome = evaluate(&catalog, "   ");
        assert_eq!(outcome, SearchOutcome::EmptyQuery);
        assert_eq!(outcome.persisted_value(), "");
    }

    #[test]
    fn test_common_substring_matches_everything() {
        let catalog = Catalog::builtin();
        let outcome = evaluate(&catalog, "albany");
        assert_eq!(outcome.shops().len(), catalog.len());
    }
}
