//! Remote store HTTP client.
//!
//! # Responsibilities
//! - Issue table-qualified insert/select/update/delete requests
//! - Authenticate every request (API key + bearer header)
//! - Normalize responses: 2xx with rows, or the store's error payload
//! - Tag each request with an ID for tracing and count outcomes
//!
//! # Design Decisions
//! - One call, one request: no retries, no failover, no coalescing.
//!   Transient failures surface immediately to the calling layer.
//! - All backend rejections are uniform `ErrorDetail` payloads; the client
//!   does not distinguish validation from authorization failures.
//! - The client is a handle meant to be constructed once from config and
//!   injected into the services that need it.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use url::Url;
use uuid::Uuid;

use crate::config::schema::StoreConfig;
use crate::observability::metrics;
use crate::store::error::{ErrorDetail, StoreError, StoreResult};

/// Ordering clause for select calls.
#[derive(Debug, Clone)]
pub struct OrderBy {
    pub column: String,
    pub descending: bool,
}

impl OrderBy {
    /// Order by `column`, newest-style (descending).
    pub fn descending(column: &str) -> Self {
        Self {
            column: column.to_string(),
            descending: true,
        }
    }

    fn to_query(&self) -> String {
        let direction = if self.descending { "desc" } else { "asc" };
        format!("{}.{}", self.column, direction)
    }
}

/// HTTP client for the remote store's REST surface.
#[derive(Clone)]
pub struct StoreClient {
    client: reqwest::Client,
    base_url: Url,
    timeout_secs: u64,
}

impl StoreClient {
    /// Create a client from configuration.
    ///
    /// The API key is installed as a default header so every request is
    /// authenticated without the call sites carrying credentials around.
    pub fn new(config: &StoreConfig) -> StoreResult<Self> {
        let base_url: Url = config.url.parse().map_err(|e: url::ParseError| {
            StoreError::InvalidUrl {
                url: config.url.clone(),
                reason: e.to_string(),
            }
        })?;
        if base_url.cannot_be_a_base() {
            return Err(StoreError::InvalidUrl {
                url: config.url.clone(),
                reason: "not a base URL".to_string(),
            });
        }

        let mut headers = HeaderMap::new();
        let mut api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| StoreError::InvalidApiKey)?;
        api_key.set_sensitive(true);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|_| StoreError::InvalidApiKey)?;
        bearer.set_sensitive(true);
        headers.insert("apikey", api_key);
        headers.insert(AUTHORIZATION, bearer);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url,
            timeout_secs: config.timeout_secs,
        })
    }

    /// Insert rows into `table`, discarding the created representation.
    pub async fn insert(&self, table: &str, row: &serde_json::Value) -> StoreResult<()> {
        let url = self.table_url(table);
        let request = self
            .client
            .post(url)
            .header("Prefer", "return=minimal")
            .json(&[row]);
        self.execute(request, table, "insert").await?;
        Ok(())
    }

    /// Insert rows into `table` and return the created rows.
    pub async fn insert_returning<T: DeserializeOwned>(
        &self,
        table: &str,
        row: &serde_json::Value,
    ) -> StoreResult<Vec<T>> {
        let url = self.table_url(table);
        let request = self
            .client
            .post(url)
            .header("Prefer", "return=representation")
            .json(&[row]);
        let body = self.execute(request, table, "insert").await?;
        decode_rows(&body)
    }

    /// Select every row of `table`, optionally ordered.
    pub async fn select_all<T: DeserializeOwned>(
        &self,
        table: &str,
        order: Option<&OrderBy>,
    ) -> StoreResult<Vec<T>> {
        let mut url = self.table_url(table);
        url.query_pairs_mut().append_pair("select", "*");
        if let Some(order) = order {
            url.query_pairs_mut().append_pair("order", &order.to_query());
        }
        let body = self.execute(self.client.get(url), table, "select").await?;
        decode_rows(&body)
    }

    /// Update the row of `table` whose `id` equals the given value.
    pub async fn update_by_id(
        &self,
        table: &str,
        id: i64,
        payload: &serde_json::Value,
    ) -> StoreResult<()> {
        let mut url = self.table_url(table);
        url.query_pairs_mut()
            .append_pair("id", &format!("eq.{}", id));
        let request = self
            .client
            .patch(url)
            .header("Prefer", "return=minimal")
            .json(payload);
        self.execute(request, table, "update").await?;
        Ok(())
    }

    /// Delete the row of `table` whose `id` equals the given value.
    pub async fn delete_by_id(&self, table: &str, id: i64) -> StoreResult<()> {
        let mut url = self.table_url(table);
        url.query_pairs_mut()
            .append_pair("id", &format!("eq.{}", id));
        self.execute(self.client.delete(url), table, "delete").await?;
        Ok(())
    }

    fn table_url(&self, table: &str) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejected cannot-be-a-base URLs, so segments are available.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(table);
        }
        url
    }

    /// Send one request and normalize the outcome.
    ///
    /// Returns the raw response body on 2xx; decodes the store's error
    /// payload otherwise. Exactly one request goes out per call.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
        table: &str,
        op: &'static str,
    ) -> StoreResult<String> {
        let request_id = Uuid::new_v4();
        let started = Instant::now();

        let response = request
            .header("x-request-id", request_id.to_string())
            .send()
            .await;

        match response {
            Ok(response) => {
                let status = response.status();
                let body = response.text().await?;
                if status.is_success() {
                    metrics::record_store_call(table, op, "ok", started);
                    tracing::debug!(
                        request_id = %request_id,
                        table,
                        op,
                        status = %status,
                        "store call succeeded"
                    );
                    Ok(body)
                } else {
                    let detail = serde_json::from_str::<ErrorDetail>(&body).unwrap_or_else(|_| {
                        if body.trim().is_empty() {
                            ErrorDetail::from_message(status.to_string())
                        } else {
                            ErrorDetail::from_message(body.clone())
                        }
                    });
                    metrics::record_store_call(table, op, "rejected", started);
                    tracing::debug!(
                        request_id = %request_id,
                        table,
                        op,
                        status = %status,
                        error = %detail,
                        "store rejected call"
                    );
                    Err(StoreError::Backend(detail))
                }
            }
            Err(e) => {
                metrics::record_store_call(table, op, "transport_error", started);
                tracing::debug!(
                    request_id = %request_id,
                    table,
                    op,
                    error = %e,
                    "store call failed in transport"
                );
                Err(StoreError::Transport(e))
            }
        }
    }
}

impl std::fmt::Debug for StoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreClient")
            .field("base_url", &self.base_url.as_str())
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

fn decode_rows<T: DeserializeOwned>(body: &str) -> StoreResult<Vec<T>> {
    // An empty body counts as zero rows, not as malformed JSON.
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(body).map_err(|e| StoreError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(url: &str) -> StoreConfig {
        StoreConfig {
            url: url.to_string(),
            api_key: "test-key".to_string(),
            timeout_secs: 5,
        }
    }

    #[test]
    fn test_client_rejects_bad_url() {
        let result = StoreClient::new(&test_config("not a url"));
        assert!(matches!(result, Err(StoreError::InvalidUrl { .. })));

        let result = StoreClient::new(&test_config("mailto:someone"));
        assert!(matches!(result, Err(StoreError::InvalidUrl { .. })));
    }

    #[test]
    fn test_client_rejects_unsendable_api_key() {
        let mut config = test_config("http://localhost:54321/rest/v1");
        config.api_key = "line\nbreak".to_string();
        let result = StoreClient::new(&config);
        assert!(matches!(result, Err(StoreError::InvalidApiKey)));
    }

    #[test]
    fn test_table_url_appends_segment() {
        let client = StoreClient::new(&test_config("http://localhost:54321/rest/v1")).unwrap();
        assert_eq!(
            client.table_url("guides").as_str(),
            "http://localhost:54321/rest/v1/guides"
        );

        // A trailing slash on the base must not produce a double slash.
        let client = StoreClient::new(&test_config("http://localhost:54321/rest/v1/")).unwrap();
        assert_eq!(
            client.table_url("categories").as_str(),
            "http://localhost:54321/rest/v1/categories"
        );
    }

    #[test]
    fn test_order_by_query() {
        assert_eq!(OrderBy::descending("created").to_query(), "created.desc");
        let ascending = OrderBy {
            column: "title".to_string(),
            descending: false,
        };
        assert_eq!(ascending.to_query(), "title.asc");
    }

    #[test]
    fn test_decode_rows_empty_body() {
        let rows: Vec<serde_json::Value> = decode_rows("").unwrap();
        assert!(rows.is_empty());
        let rows: Vec<serde_json::Value> = decode_rows("  \n").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_decode_rows_malformed_body() {
        let result: StoreResult<Vec<serde_json::Value>> = decode_rows("{not json");
        assert!(matches!(result, Err(StoreError::Decode(_))));
    }
}
