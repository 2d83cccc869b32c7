//! Catalog record types.

use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// Identifier the remote store assigns to a guide row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GuideId(pub i64);

impl From<i64> for GuideId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<GuideId> for i64 {
    fn from(id: GuideId) -> Self {
        id.0
    }
}

impl std::fmt::Display for GuideId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Open field set supplied by callers when creating or updating a guide.
pub type GuideFields = serde_json::Map<String, serde_json::Value>;

/// A catalog guide as the store returns it.
///
/// `id` and `created` are assigned by the store; everything else is the
/// open content field set (title, body, category reference, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GuideId>,
    /// Creation timestamp as the store sent it; kept opaque, never parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<serde_json::Value>,
    #[serde(flatten)]
    pub fields: GuideFields,
}

/// A taxonomy entry. `title` is the only caller-supplied field; categories
/// are append-only once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
}

/// Outcome of a list read.
///
/// List reads never propagate an error: a browsing page must render even
/// when the store is down. The failure is carried here instead of being
/// masked, so callers can tell "no rows exist" from "fetch failed".
#[derive(Debug)]
pub enum Listing<T> {
    /// The store answered; rows exactly as returned.
    Available(Vec<T>),
    /// The store could not be read.
    Unavailable(StoreError),
}

impl<T> Listing<T> {
    /// Rows when available, an empty slice otherwise.
    pub fn rows(&self) -> &[T] {
        match self {
            Listing::Available(rows) => rows,
            Listing::Unavailable(_) => &[],
        }
    }

    /// Degrade-to-empty view: rows when available, an empty vector otherwise.
    pub fn into_rows(self) -> Vec<T> {
        match self {
            Listing::Available(rows) => rows,
            Listing::Unavailable(_) => Vec::new(),
        }
    }

    /// The read failure, if the store could not be reached.
    pub fn failure(&self) -> Option<&StoreError> {
        match self {
            Listing::Available(_) => None,
            Listing::Unavailable(e) => Some(e),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Listing::Available(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ErrorDetail;
    use serde_json::json;

    #[test]
    fn test_guide_decodes_open_fields() {
        let guide: Guide = serde_json::from_value(json!({
            "id": 3,
            "created": "2026-01-15T10:00:00Z",
            "title": "Push day",
            "category": "fuerza"
        }))
        .unwrap();

        assert_eq!(guide.id, Some(GuideId(3)));
        assert_eq!(guide.created, Some(json!("2026-01-15T10:00:00Z")));
        assert_eq!(guide.fields.get("title"), Some(&json!("Push day")));
        assert_eq!(guide.fields.get("category"), Some(&json!("fuerza")));
    }

    #[test]
    fn test_guide_tolerates_missing_server_fields() {
        let guide: Guide = serde_json::from_value(json!({ "title": "Draft" })).unwrap();
        assert!(guide.id.is_none());
        assert!(guide.created.is_none());
    }

    #[test]
    fn test_listing_degrades_to_empty() {
        let listing: Listing<Guide> =
            Listing::Unavailable(StoreError::Backend(ErrorDetail::from_message("down")));
        assert!(!listing.is_available());
        assert!(listing.failure().is_some());
        assert!(listing.rows().is_empty());
        assert!(listing.into_rows().is_empty());
    }

    #[test]
    fn test_listing_available_rows() {
        let listing = Listing::Available(vec![1, 2, 3]);
        assert!(listing.is_available());
        assert!(listing.failure().is_none());
        assert_eq!(listing.into_rows(), vec![1, 2, 3]);
    }
}
