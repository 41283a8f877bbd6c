//! Catalog Client
//!
//! Read-only access to a DummyJSON-style product catalog. Every failure is
//! classified into [`CatalogError`]:
//!
//! - failure status → `RemoteService { status: Some(code) }` (404 on a named
//!   id or category → `NotFound`)
//! - no response at all (refused, reset, DNS, timeout) → `Connectivity`
//! - anything else (body read, malformed JSON) → `RemoteService { status: None }`

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::config::CatalogClientConfig;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{ProductPage, RawProduct};

/// Read operations against the remote catalog
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// First page of the default listing, up to `limit` records
    async fn fetch_all(&self, limit: u32) -> CatalogResult<Vec<RawProduct>>;

    /// A single record; `NotFound` when the catalog has no such id
    async fn fetch_by_id(&self, id: u64) -> CatalogResult<RawProduct>;

    /// Records in `category`; `NotFound` when the category does not exist
    async fn fetch_by_category(
        &self,
        category: &str,
        limit: u32,
    ) -> CatalogResult<Vec<RawProduct>>;

    /// Free-text search
    async fn search(&self, query: &str, limit: u32) -> CatalogResult<Vec<RawProduct>>;
}

/// [`CatalogApi`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: String,
}

impl HttpCatalogClient {
    pub fn new(config: CatalogClientConfig) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| CatalogError::remote(None, format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn listing_url(&self, limit: u32) -> String {
        format!("{}/products?limit={}", self.base_url, limit)
    }

    fn product_url(&self, id: u64) -> String {
        format!("{}/products/{}", self.base_url, id)
    }

    fn category_url(&self, category: &str, limit: u32) -> String {
        format!(
            "{}/products/category/{}?limit={}",
            self.base_url,
            urlencoding::encode(category),
            limit
        )
    }

    fn search_url(&self, query: &str, limit: u32) -> String {
        format!(
            "{}/products/search?q={}&limit={}",
            self.base_url,
            urlencoding::encode(query),
            limit
        )
    }

    /// GET `url` and decode the JSON body.
    ///
    /// `resource` names what a 404 means for this call; without it a 404 is an
    /// ordinary status-coded failure.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        resource: Option<&str>,
    ) -> CatalogResult<T> {
        debug!(url = url, "Sending catalog request");

        let response = self.client.get(url).send().await.map_err(|e| {
            let err = classify_send_error(e);
            debug!(url = url, error = %err, "Catalog request failed");
            err
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let err = classify_status(status, resource, &body);
            debug!(
                url = url,
                status = status.as_u16(),
                error = %err,
                "Catalog returned failure status"
            );
            return Err(err);
        }

        let body = response.bytes().await?;
        let decoded = serde_json::from_slice(&body).map_err(|e| {
            let err = CatalogError::from(e);
            debug!(url = url, error = %err, "Catalog response could not be decoded");
            err
        })?;

        Ok(decoded)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    #[instrument(skip(self))]
    async fn fetch_all(&self, limit: u32) -> CatalogResult<Vec<RawProduct>> {
        let page: ProductPage = self.get_json(&self.listing_url(limit), None).await?;
        info!(count = page.products.len(), total = page.total, "Fetched product listing");
        Ok(page.products)
    }

    #[instrument(skip(self))]
    async fn fetch_by_id(&self, id: u64) -> CatalogResult<RawProduct> {
        let resource = format!("product {id}");
        self.get_json(&self.product_url(id), Some(resource.as_str())).await
    }

    #[instrument(skip(self))]
    async fn fetch_by_category(
        &self,
        category: &str,
        limit: u32,
    ) -> CatalogResult<Vec<RawProduct>> {
        let resource = format!("category '{category}'");
        let page: ProductPage = self
            .get_json(&self.category_url(category, limit), Some(resource.as_str()))
            .await?;
        info!(count = page.products.len(), "Fetched category listing");
        Ok(page.products)
    }

    #[instrument(skip(self))]
    async fn search(&self, query: &str, limit: u32) -> CatalogResult<Vec<RawProduct>> {
        let page: ProductPage = self.get_json(&self.search_url(query, limit), None).await?;
        info!(count = page.products.len(), "Fetched search results");
        Ok(page.products)
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Classify a failure of `send()`, before any response body was read.
///
/// Without a status the request never produced a response, so anything but a
/// request-construction or redirect-policy failure is a transport failure.
fn classify_send_error(err: reqwest::Error) -> CatalogError {
    if err.is_builder() || err.is_redirect() {
        return CatalogError::remote(err.status().map(|s| s.as_u16()), err.to_string());
    }
    match err.status() {
        Some(status) => CatalogError::remote(Some(status.as_u16()), err.to_string()),
        None => CatalogError::Connectivity(err.to_string()),
    }
}

/// Map a non-success status (and its body) to a [`CatalogError`]
fn classify_status(status: StatusCode, resource: Option<&str>, body: &str) -> CatalogError {
    if status == StatusCode::NOT_FOUND {
        if let Some(resource) = resource {
            return CatalogError::NotFound {
                resource: resource.to_string(),
            };
        }
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .ok()
        .filter(|m| !m.trim().is_empty())
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_else(|| "unexpected status".to_string());

    CatalogError::remote(Some(status.as_u16()), message)
}
