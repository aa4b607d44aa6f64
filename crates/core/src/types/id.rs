//! Shop identifier type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ShopId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ShopIdError {
    /// The input string is empty.
    #[error("shop id cannot be empty")]
    Empty,
    /// The input string is too long.
    #[error("shop id must be at most {max} characters")]
    TooLong {
        /// Maximum allowed length.
        max: usize,
    },
    /// The input contains a character outside `[a-z0-9-]`.
    #[error("shop id contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// A unique, slug-style shop identifier such as `short-and-stout`.
///
/// ## Constraints
///
/// - Length: 1-64 characters
/// - Only ASCII lowercase letters, digits and `-`
///
/// ## Examples
///
/// ```
/// use shop_search_core::ShopId;
///
/// assert!(ShopId::parse("berryandberry").is_ok());
/// assert!(ShopId::parse("short-and-stout").is_ok());
///
/// assert!(ShopId::parse("").is_err());
/// assert!(ShopId::parse("Gong Cha").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct ShopId(String);

impl ShopId {
    /// Maximum length of a shop id.
    pub const MAX_LENGTH: usize = 64;

    /// Parse a `ShopId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, longer than 64 characters, or
    /// contains anything other than lowercase ASCII letters, digits and `-`.
    pub fn parse(s: &str) -> Result<Self, ShopIdError> {
        if s.is_empty() {
            return Err(ShopIdError::Empty);
        }

        if s.len() > Self::MAX_LENGTH {
            return Err(ShopIdError::TooLong {
                max: Self::MAX_LENGTH,
            });
        }

        if let Some(bad) = s
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(ShopIdError::InvalidCharacter(bad));
        }

        Ok(Self(s.to_owned()))
    }

    /// Wraps a compile-time id without validation.
    ///
    /// Only used for the builtin catalog, whose ids are checked by tests.
    pub(crate) fn from_static(s: &'static str) -> Self {
        debug_assert!(Self::parse(s).is_ok(), "invalid builtin shop id {s:?}");
        Self(s.to_owned())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ShopId {
    type Err = ShopIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ShopId {
    type Error = ShopIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ShopId> for String {
    fn from(id: ShopId) -> Self {
        id.0
    }
}

impl AsRef<str> for ShopId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
