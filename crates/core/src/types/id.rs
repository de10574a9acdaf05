//! Newtype ID for type-safe product references.
//!
//! Catalog entries are keyed by human-readable slugs (e.g. `game-elden`),
//! so the wrapper holds a `String` rather than a numeric id. Wrapping it
//! keeps product ids from being mixed up with other strings such as
//! category names or search queries.

use serde::{Deserialize, Serialize};

/// A product's identity key.
///
/// Equality on `ProductId` is the cart's notion of line identity: at most
/// one cart line exists per id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an id from a catalog slug.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_display_matches_slug() {
        let id = ProductId::new("game-hades");
        assert_eq!(id.to_string(), "game-hades");
        assert_eq!(id.as_str(), "game-hades");
    }

    #[test]
    fn test_product_id_serde_transparent() {
        let id = ProductId::new("game-celeste");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"game-celeste\"");

        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
