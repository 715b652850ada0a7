//! Catalog service functions — typed request/response shaping over the
//! `ApiTransport` port.
//!
//! One generic CRUD core plus thin typed wrappers per resource. All
//! responses pass through the domain structs' defaulting deserialization,
//! so callers always receive fully-populated values.

use serde::de::DeserializeOwned;

use crate::application::ports::ApiTransport;
use crate::domain::catalog::{Bundle, Page, Portfolio, SearchQuery, Tool, Vendor};
use crate::domain::error::ApiError;

/// Decode a JSON value into a defaulted domain type. Missing fields are
/// filled in by the type's defaults; only structurally wrong JSON fails.
fn decode<R: DeserializeOwned>(value: serde_json::Value) -> Result<R, ApiError> {
    serde_json::from_value(value).map_err(|err| ApiError::Shape(err.to_string()))
}

/// Catalog read/write operations against a backend transport.
pub struct CatalogService<'a, T: ApiTransport> {
    transport: &'a T,
}

impl<'a, T: ApiTransport> CatalogService<'a, T> {
    #[must_use]
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    // ── Generic CRUD ──────────────────────────────────────────────────────

    /// `GET /api/{resource}?{query}` — one page of a collection.
    ///
    /// `R: Default` because `Page<R>` fills missing fields from defaults
    /// during deserialization.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not JSON.
    pub async fn list<R: DeserializeOwned + Default>(
        &self,
        resource: &str,
        query: &SearchQuery,
    ) -> Result<Page<R>, ApiError> {
        let value = self
            .transport
            .get(&format!("/api/{resource}"), &query.to_params())
            .await?;
        decode(value)
    }

    /// `GET /api/{resource}/{id}` — a single resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails (including not-found, which the
    /// backend reports as a non-2xx status).
    pub async fn fetch<R: DeserializeOwned>(
        &self,
        resource: &str,
        id: &str,
    ) -> Result<R, ApiError> {
        let value = self.transport.get(&format!("/api/{resource}/{id}"), &[]).await?;
        decode(value)
    }

    /// `POST /api/{resource}` — create from a partial body, returning the
    /// created resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn create<R: DeserializeOwned>(
        &self,
        resource: &str,
        body: &serde_json::Value,
    ) -> Result<R, ApiError> {
        let value = self.transport.post(&format!("/api/{resource}"), body).await?;
        decode(value)
    }

    /// `PUT /api/{resource}/{id}` — update, returning the stored resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn update<R: DeserializeOwned>(
        &self,
        resource: &str,
        id: &str,
        body: &serde_json::Value,
    ) -> Result<R, ApiError> {
        let value = self
            .transport
            .put(&format!("/api/{resource}/{id}"), body)
            .await?;
        decode(value)
    }

    /// `DELETE /api/{resource}/{id}` — delete, returning the backend's
    /// success flag (a bare 2xx with no body counts as success).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn remove(&self, resource: &str, id: &str) -> Result<bool, ApiError> {
        let value = self.transport.delete(&format!("/api/{resource}/{id}")).await?;
        Ok(value
            .get("success")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(true))
    }

    // ── Typed wrappers ────────────────────────────────────────────────────

    /// # Errors
    /// See [`list`](Self::list).
    pub async fn search_tools(&self, query: &SearchQuery) -> Result<Page<Tool>, ApiError> {
        self.list("tools", query).await
    }

    /// # Errors
    /// See [`list`](Self::list).
    pub async fn search_bundles(&self, query: &SearchQuery) -> Result<Page<Bundle>, ApiError> {
        self.list("bundles", query).await
    }

    /// # Errors
    /// See [`list`](Self::list).
    pub async fn search_vendors(&self, query: &SearchQuery) -> Result<Page<Vendor>, ApiError> {
        self.list("vendors", query).await
    }

    /// # Errors
    /// See [`list`](Self::list).
    pub async fn search_portfolios(
        &self,
        query: &SearchQuery,
    ) -> Result<Page<Portfolio>, ApiError> {
        self.list("portfolios", query).await
    }

    /// # Errors
    /// See [`fetch`](Self::fetch).
    pub async fn tool(&self, id: &str) -> Result<Tool, ApiError> {
        self.fetch("tools", id).await
    }

    /// # Errors
    /// See [`fetch`](Self::fetch).
    pub async fn bundle(&self, id: &str) -> Result<Bundle, ApiError> {
        self.fetch("bundles", id).await
    }

    /// # Errors
    /// See [`fetch`](Self::fetch).
    pub async fn vendor(&self, id: &str) -> Result<Vendor, ApiError> {
        self.fetch("vendors", id).await
    }

    /// # Errors
    /// See [`fetch`](Self::fetch).
    pub async fn portfolio(&self, id: &str) -> Result<Portfolio, ApiError> {
        self.fetch("portfolios", id).await
    }
}
