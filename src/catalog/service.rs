//! Catalog data-access operations.
//!
//! # Responsibilities
//! - Translate guide/category intents into store calls
//! - Strip server-assigned fields from update payloads
//! - Apply the display ordering for guide listings
//! - Apply the error policy: writes signal, list reads degrade
//!
//! # Design Decisions
//! - Writes return `StoreResult` so a silently-failed submission cannot
//!   mislead the user; list reads return `Listing` and log the diagnostic,
//!   so a browsing page never hard-fails. This asymmetry is the contract.
//! - The store handle is injected at construction; the service owns no
//!   other state.

use std::sync::Arc;

use serde_json::Value;

use crate::catalog::types::{Category, Guide, GuideFields, GuideId, Listing};
use crate::store::{OrderBy, StoreClient, StoreResult};

const GUIDES_TABLE: &str = "guides";
const CATEGORIES_TABLE: &str = "categories";

/// Data-access layer for the guide and category resources.
#[derive(Debug, Clone)]
pub struct CatalogService {
    store: Arc<StoreClient>,
}

impl CatalogService {
    pub fn new(store: Arc<StoreClient>) -> Self {
        Self { store }
    }

    /// Insert one guide with the caller's fields as supplied.
    ///
    /// Errors are fatal to the submission attempt; nothing is retried.
    pub async fn create_guide(&self, fields: &GuideFields) -> StoreResult<()> {
        self.store
            .insert(GUIDES_TABLE, &Value::Object(fields.clone()))
            .await
    }

    /// All guides, newest first (`created` descending).
    ///
    /// Never returns an error to propagate: a failed fetch is logged and
    /// reported as [`Listing::Unavailable`].
    pub async fn get_guides(&self) -> Listing<Guide> {
        let order = OrderBy::descending("created");
        match self.store.select_all(GUIDES_TABLE, Some(&order)).await {
            Ok(rows) => Listing::Available(rows),
            Err(e) => {
                tracing::error!(table = GUIDES_TABLE, error = %e, "failed to fetch guides");
                Listing::Unavailable(e)
            }
        }
    }

    /// Insert one category and return the created record.
    ///
    /// `None` means the store accepted the insert but returned no row;
    /// callers must treat that as "creation did not visibly succeed".
    pub async fn create_category(&self, title: &str) -> StoreResult<Option<Category>> {
        let row = serde_json::json!({ "title": title });
        let mut created: Vec<Category> = self
            .store
            .insert_returning(CATEGORIES_TABLE, &row)
            .await?;
        if created.is_empty() {
            return Ok(None);
        }
        Ok(Some(created.remove(0)))
    }

    /// All categories, in whatever order the store returns them.
    pub async fn get_categories(&self) -> Listing<Category> {
        match self.store.select_all(CATEGORIES_TABLE, None).await {
            Ok(rows) => Listing::Available(rows),
            Err(e) => {
                tracing::error!(table = CATEGORIES_TABLE, error = %e, "failed to fetch categories");
                Listing::Unavailable(e)
            }
        }
    }

    /// Update the guide identified by `id` with the supplied fields.
    ///
    /// The update either fully applies or errors; there is no
    /// partial-success signaling.
    pub async fn update_guide(&self, id: GuideId, fields: &GuideFields) -> StoreResult<()> {
        let payload = sanitized_update(fields);
        self.store
            .update_by_id(GUIDES_TABLE, id.0, &Value::Object(payload))
            .await
    }

    /// Delete the guide identified by `id`. Immediate and irreversible
    /// from this layer's perspective.
    pub async fn delete_guide(&self, id: GuideId) -> StoreResult<()> {
        self.store.delete_by_id(GUIDES_TABLE, id.0).await
    }
}

/// Server-assigned identity and creation timestamp must never reach an
/// update payload, even when the caller's map carries them.
fn sanitized_update(fields: &GuideFields) -> GuideFields {
    let mut payload = fields.clone();
    payload.remove("id");
    payload.remove("created");
    payload
}
