//! HTTP transport — reqwest implementation of the `ApiTransport` port.
//!
//! Every request carries `Accept`/`Content-Type: application/json` and, when
//! the injected session has one, a bearer token. Non-2xx responses become
//! [`ApiError::Api`] carrying the server's `message` (or `error`) field when
//! present, else a generic `HTTP <status>` text. Nothing here panics or
//! leaks a raw `reqwest::Error` past the port boundary.

use anyhow::{Context, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::application::ports::{ApiTransport, SessionProvider};
use crate::domain::error::ApiError;

/// Production `ApiTransport` backed by a shared `reqwest::Client`.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpTransport {
    /// Build a transport for `base_url`, taking credentials from `session`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, session: &impl SessionProvider) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("building HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: session.bearer_token(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a prepared request and translate the response.
    async fn dispatch(
        &self,
        request: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<serde_json::Value, ApiError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await.map_err(|err| ApiError::Network {
            url: url.to_string(),
            reason: err.to_string(),
        })?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap_or(serde_json::Value::Null);

        if !status.is_success() {
            let message = value
                .get("message")
                .or_else(|| value.get("error"))
                .and_then(serde_json::Value::as_str)
                .map_or_else(|| format!("HTTP {}", status.as_u16()), str::to_owned);
            return Err(ApiError::Api(message));
        }
        if value.is_null() && !body.trim().is_empty() {
            return Err(ApiError::Shape("response body is not JSON".to_string()));
        }
        Ok(value)
    }
}

impl ApiTransport for HttpTransport {
    async fn get(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.url(path);
        let request = self.client.get(&url).query(query);
        self.dispatch(request, &url).await
    }

    async fn post(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.url(path);
        let request = self.client.post(&url).json(body);
        self.dispatch(request, &url).await
    }

    async fn put(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        let url = self.url(path);
        let request = self.client.put(&url).json(body);
        self.dispatch(request, &url).await
    }

    async fn delete(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        let url = self.url(path);
        let request = self.client.delete(&url);
        self.dispatch(request, &url).await
    }
}
