//! Newtype IDs for type-safe record references.
//!
//! Product ids are opaque catalog strings; contact ids are numeric and derived
//! from the submission timestamp.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductIdError {
    /// The input string is empty.
    #[error("product id cannot be empty")]
    Empty,
}

/// A catalog product identifier.
///
/// Unique within one stored list (wishlist or cart), not globally. Comparison
/// is exact: no trimming or case folding.
///
/// ```
/// use lush_petals_core::ProductId;
///
/// assert!(ProductId::parse("p1").is_ok());
/// assert!(ProductId::parse("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Parse a `ProductId` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ProductIdError::Empty`] if the input is empty.
    pub fn parse(s: &str) -> Result<Self, ProductIdError> {
        if s.is_empty() {
            return Err(ProductIdError::Empty);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Identifier of a stored contact submission.
///
/// Derived from the submission time in milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(i64);

impl ContactId {
    /// Create a new ID from an i64 value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    #[must_use]
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Allocate an id for a submission made at `timestamp_millis`.
    ///
    /// Two submissions within the same millisecond would collide, so the id
    /// is bumped past `latest` when needed. The result is always positive.
    #[must_use]
    pub fn allocate(timestamp_millis: i64, latest: Option<Self>) -> Self {
        let floor = latest.map_or(1, |id| id.0.saturating_add(1));
        Self(timestamp_millis.max(floor))
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ContactId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<ContactId> for i64 {
    fn from(id: ContactId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_rejects_empty() {
        assert_eq!(ProductId::parse(""), Err(ProductIdError::Empty));
    }

    #[test]
    fn test_product_id_is_exact() {
        let id = ProductId::parse(" p1 ").unwrap();
        assert_eq!(id.as_str(), " p1 ");
        assert_ne!(id, ProductId::parse("p1").unwrap());
    }

    #[test]
    fn test_product_id_serializes_as_plain_string() {
        let id = ProductId::parse("p1").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p1\"");
    }

    #[test]
    fn test_contact_id_uses_timestamp_when_fresh() {
        let id = ContactId::allocate(1_700_000_000_000, None);
        assert_eq!(id.as_i64(), 1_700_000_000_000);
    }

    #[test]
    fn test_contact_id_bumps_past_latest() {
        let latest = ContactId::new(1_700_000_000_000);
        let id = ContactId::allocate(1_700_000_000_000, Some(latest));
        assert_eq!(id.as_i64(), 1_700_000_000_001);

        // A clock that moved backwards still yields a fresh id.
        let id = ContactId::allocate(5, Some(latest));
        assert!(id > latest);
    }

    #[test]
    fn test_contact_id_is_positive() {
        assert!(ContactId::allocate(0, None).as_i64() > 0);
        assert!(ContactId::allocate(-42, None).as_i64() > 0);
    }
}
