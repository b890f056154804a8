//! HTTP client for the people catalog.
//!
//! Wraps the catalog's listing and detail endpoints using [`reqwest`].
//! There is no retry: the first failed request fails the whole call.

use std::time::Duration;

use futures::{StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;

use crate::messages::{PeoplePage, PersonDetail, PersonProperties};

/// Public SWAPI mirror used when no base URL is configured.
pub const DEFAULT_BASE_URL: &str = "https://www.swapi.tech/api";

/// Number of people requested per listing page.
pub const DEFAULT_PAGE_LIMIT: u32 = 30;

/// Maximum number of detail requests in flight at once.
const DETAIL_CONCURRENCY: usize = 4;

/// Errors from the catalog client.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog returned a non-2xx status code.
    #[error("Catalog returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The body was not the expected JSON shape (e.g. a missing field).
    #[error("Unexpected payload from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Client for a single catalog deployment.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a client with its own connection pool and per-request timeout.
    ///
    /// * `base_url` - API root, e.g. `https://www.swapi.tech/api`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch one listing page: `GET {base}/people?page={page}&limit={limit}`.
    pub async fn fetch_people_page(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<PeoplePage, CatalogError> {
        let url = format!("{}/people?page={page}&limit={limit}", self.base_url);
        self.get_json(&url).await
    }

    /// Fetch a person's detail record from the URL given in its summary.
    pub async fn fetch_person(&self, url: &str) -> Result<PersonProperties, CatalogError> {
        let detail: PersonDetail = self.get_json(url).await?;
        Ok(detail.result.properties)
    }

    /// Fetch a listing page and then every detail record on it.
    ///
    /// Returns the names in listing order. Any failed request or malformed
    /// record aborts the whole page.
    pub async fn fetch_people_names(
        &self,
        page: u32,
        limit: u32,
    ) -> Result<Vec<String>, CatalogError> {
        let listing = self.fetch_people_page(page, limit).await?;
        tracing::debug!(
            page,
            limit,
            count = listing.results.len(),
            "Fetched catalog people listing",
        );

        futures::stream::iter(listing.results)
            .map(|summary| async move { self.fetch_person(&summary.url).await })
            .buffered(DETAIL_CONCURRENCY)
            .map_ok(|person| person.name)
            .try_collect()
            .await
    }

    // ---- private helpers ----

    /// GET `url`, require a 2xx status and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|source| CatalogError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use axum::extract::{Path, State};
    use axum::http::StatusCode;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    const NAMES: [&str; 3] = ["Luke Skywalker", "C-3PO", "R2-D2"];

    /// Serve a fake catalog on an ephemeral port and return its base URL.
    ///
    /// Person `broken_uid`, if set, answers with a detail record that has
    /// no `name`.
    async fn spawn_catalog(broken_uid: Option<usize>) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());

        let app = Router::new()
            .route("/people", get(list_people))
            .route("/people/{uid}", get(person_detail))
            .with_state((base.clone(), broken_uid));

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        base
    }

    async fn list_people(State((base, _)): State<(String, Option<usize>)>) -> Json<Value> {
        let results: Vec<Value> = NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| {
                json!({"uid": (i + 1).to_string(), "name": name, "url": format!("{base}/people/{}", i + 1)})
            })
            .collect();
        Json(json!({"total_records": NAMES.len(), "results": results}))
    }

    async fn person_detail(
        State((_, broken)): State<(String, Option<usize>)>,
        Path(uid): Path<usize>,
    ) -> Result<Json<Value>, StatusCode> {
        if uid == 0 || uid > NAMES.len() {
            return Err(StatusCode::NOT_FOUND);
        }
        if broken == Some(uid) {
            return Ok(Json(json!({"result": {"properties": {"gender": "n/a"}}})));
        }
        Ok(Json(
            json!({"result": {"uid": uid.to_string(), "properties": {"name": NAMES[uid - 1]}}}),
        ))
    }

    fn client(base: &str) -> CatalogClient {
        CatalogClient::new(base, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let c = CatalogClient::with_client(reqwest::Client::new(), "http://catalog.test/api/");
        assert_eq!(c.base_url(), "http://catalog.test/api");
    }

    #[tokio::test]
    async fn fetch_people_names_preserves_listing_order() {
        let base = spawn_catalog(None).await;
        let names = client(&base).fetch_people_names(1, 30).await.unwrap();
        assert_eq!(names, NAMES.to_vec());
    }

    #[tokio::test]
    async fn fetch_people_names_fails_on_malformed_detail() {
        let base = spawn_catalog(Some(2)).await;
        let err = client(&base).fetch_people_names(1, 30).await.unwrap_err();
        assert_matches!(err, CatalogError::Decode { url, .. } if url.ends_with("/people/2"));
    }

    #[tokio::test]
    async fn fetch_person_reports_http_status() {
        let base = spawn_catalog(None).await;
        let err = client(&base)
            .fetch_person(&format!("{base}/people/99"))
            .await
            .unwrap_err();
        assert_matches!(err, CatalogError::Status { status: 404, .. });
    }

    #[tokio::test]
    async fn unreachable_catalog_is_request_error() {
        // Bind then drop to get a port nothing is listening on.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = client(&format!("http://{addr}"))
            .fetch_people_page(1, 30)
            .await
            .unwrap_err();
        assert_matches!(err, CatalogError::Request(_));
    }
}
