//! # Client configuration
//!
//! Two values decide where the front end talks to:
//!
//! | Field | Variable | Default |
//! |-------|----------|---------|
//! | [`ApiConfig::backend_url`] | `BACKEND_URL` | `http://localhost:8001` |
//! | [`ApiConfig::identity_provider_url`] | `AUTH_PROVIDER_URL` | `https://auth.emergentagent.com/` |
//!
//! In the browser there is no process environment, so the wasm build bakes the
//! variables in at compile time (`option_env!`). Native builds load `.env` with
//! `dotenvy` and read the variables at runtime.

use url::form_urlencoded;

/// Path on this application the identity provider sends visitors back to.
pub const AUTH_RETURN_PATH: &str = "/dashboard";

const DEFAULT_BACKEND_URL: &str = "http://localhost:8001";
const DEFAULT_IDENTITY_PROVIDER_URL: &str = "https://auth.emergentagent.com/";

/// Backend and identity provider locations.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    /// Backend origin, without the `/api` prefix.
    pub backend_url: String,
    /// Login page of the external identity provider.
    pub identity_provider_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            identity_provider_url: DEFAULT_IDENTITY_PROVIDER_URL.to_string(),
        }
    }
}

impl ApiConfig {
    /// Create a config pointing at the given backend origin.
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            ..Self::default()
        }
    }

    /// Builder method to set the identity provider login page.
    pub fn with_identity_provider(mut self, url: impl Into<String>) -> Self {
        self.identity_provider_url = url.into();
        self
    }

    /// Read the configuration from the build or process environment.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        Self::from_values(option_env!("BACKEND_URL"), option_env!("AUTH_PROVIDER_URL"))
    }

    /// Read the configuration from the build or process environment.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let backend = std::env::var("BACKEND_URL").ok();
        let provider = std::env::var("AUTH_PROVIDER_URL").ok();
        Self::from_values(backend.as_deref(), provider.as_deref())
    }

    fn from_values(backend_url: Option<&str>, identity_provider_url: Option<&str>) -> Self {
        let defaults = Self::default();
        let pick = |value: Option<&str>, fallback: String| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(fallback)
        };

        Self {
            backend_url: pick(backend_url, defaults.backend_url),
            identity_provider_url: pick(identity_provider_url, defaults.identity_provider_url),
        }
    }

    /// Base URL every API path is appended to.
    pub fn api_base(&self) -> String {
        format!("{}/api", self.backend_url.trim_end_matches('/'))
    }

    /// Identity provider URL that returns the visitor to this app's dashboard.
    ///
    /// `origin` is the scheme + host the app is served from, e.g.
    /// `https://placements.example.edu`.
    pub fn login_url(&self, origin: &str) -> String {
        let redirect = format!("{}{}", origin.trim_end_matches('/'), AUTH_RETURN_PATH);
        let encoded: String = form_urlencoded::byte_serialize(redirect.as_bytes()).collect();
        let separator = if self.identity_provider_url.contains('?') { '&' } else { '?' };
        format!("{}{separator}redirect={encoded}", self.identity_provider_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_trims_trailing_slash() {
        assert_eq!(ApiConfig::new("http://backend:8001/").api_base(), "http://backend:8001/api");
        assert_eq!(ApiConfig::default().api_base(), "http://localhost:8001/api");
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config = ApiConfig::from_values(Some("  "), None);
        assert_eq!(config, ApiConfig::default());

        let config = ApiConfig::from_values(Some("https://api.example.edu"), Some("https://id.example.edu/"));
        assert_eq!(config.backend_url, "https://api.example.edu");
        assert_eq!(config.identity_provider_url, "https://id.example.edu/");
    }

    #[test]
    fn test_login_url_encodes_dashboard_redirect() {
        let config = ApiConfig::default();
        assert_eq!(
            config.login_url("https://placements.example.edu/"),
            "https://auth.emergentagent.com/?redirect=https%3A%2F%2Fplacements.example.edu%2Fdashboard"
        );

        let config = config.with_identity_provider("https://id.example.edu/login?app=pp");
        assert!(config
            .login_url("http://localhost:8080")
            .starts_with("https://id.example.edu/login?app=pp&redirect="));
    }
}
