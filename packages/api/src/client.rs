//! # HTTP client
//!
//! [`ApiClient`] is the one object that talks to the backend. It prefixes every
//! path with `{backend_url}/api` and always sends the session cookie: in the
//! browser each request is made with `credentials: include`, natively the
//! client keeps its own cookie jar.
//!
//! There are no retries and no timeouts beyond the platform defaults. A non-2xx
//! answer becomes [`ApiError::Status`] carrying the body text so callers can
//! show the backend's own message.
//!
//! [`client`] hands out a process-wide instance built from
//! [`ApiConfig::from_env`] on first use.

use std::sync::OnceLock;

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::error::ApiError;

static CLIENT: OnceLock<ApiClient> = OnceLock::new();

/// Get or initialize the shared client.
pub fn client() -> &'static ApiClient {
    CLIENT.get_or_init(|| ApiClient::new(ApiConfig::from_env()))
}

/// Configured client for the backend REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: build_http(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Absolute URL for an API path such as `/drives`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.api_base(), path.trim_start_matches('/'))
    }

    /// Start a request with credentials attached.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
    }

    /// `GET` a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = send(self.request(Method::GET, path)).await?;
        decode(response).await
    }

    /// `PUT` a JSON body and decode the JSON answer.
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = send(self.request(Method::PUT, path).json(body)).await?;
        decode(response).await
    }

    /// `POST` without a body and ignore whatever the backend answers.
    pub async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        send(self.request(Method::POST, path)).await.map(|_| ())
    }
}

#[cfg(target_arch = "wasm32")]
fn build_http() -> reqwest::Client {
    reqwest::Client::new()
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .unwrap_or_else(|e| {
            tracing::warn!("Falling back to a client without cookie store: {}", e);
            reqwest::Client::new()
        })
}

/// Send a request, turning non-success statuses into [`ApiError::Status`].
pub(crate) async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
    let response = builder.send().await?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.ok().filter(|b| !b.is_empty());
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_api_prefix() {
        let client = ApiClient::new(ApiConfig::new("https://backend.example.edu/"));
        assert_eq!(client.url("/drives"), "https://backend.example.edu/api/drives");
        assert_eq!(
            client.url("applications?drive_id=d1"),
            "https://backend.example.edu/api/applications?drive_id=d1"
        );
    }
}
