//! # Authentication against the backend session
//!
//! The backend keeps the session; the client only asks who the visitor is,
//! ends the session, and trades a one-time token from the identity provider
//! for a session cookie. Those three calls sit behind [`AuthBackend`] so the
//! sign-in flows can run against [`ApiClient`] in the browser and against an
//! in-memory backend in tests.
//!
//! [`check_auth`] folds the "who am I" call into an [`AuthOutcome`]: a 401 is
//! the normal state of an anonymous visitor and must stay silent, while any
//! other failure is a fault worth showing.

use std::future::Future;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::UserInfo;

#[cfg(any(test, feature = "testing"))]
mod memory;
#[cfg(any(test, feature = "testing"))]
pub use memory::MemoryAuth;

mod session;
pub use session::{
    exchange_session, session_token_from_fragment, SessionExchange, SESSION_HEADER, SESSION_PARAM,
};

/// Message shown when the session could not be verified for reasons other than
/// the visitor being anonymous.
pub const AUTH_FAULT_MESSAGE: &str = "Failed to verify session";

/// Async interface for the backend's auth endpoints.
pub trait AuthBackend {
    /// `GET /auth/me`
    fn me(&self) -> impl Future<Output = Result<UserInfo, ApiError>>;
    /// `POST /auth/logout`
    fn logout(&self) -> impl Future<Output = Result<(), ApiError>>;
    /// `POST /auth/session` with the one-time token in the `X-Session-ID` header.
    fn establish_session(&self, session_id: &str) -> impl Future<Output = Result<(), ApiError>>;
}

impl AuthBackend for ApiClient {
    async fn me(&self) -> Result<UserInfo, ApiError> {
        self.get("/auth/me").await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.post_empty("/auth/logout").await
    }

    async fn establish_session(&self, session_id: &str) -> Result<(), ApiError> {
        let request = self
            .request(reqwest::Method::POST, "/auth/session")
            .header(SESSION_HEADER, session_id);
        crate::client::send(request).await.map(|_| ())
    }
}

/// Result of asking the backend who the visitor is.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    Authenticated(UserInfo),
    /// The backend answered 401: an anonymous visitor.
    Unauthenticated,
    /// The check itself failed (network, server error, bad payload).
    Faulted(String),
}

impl AuthOutcome {
    pub fn user(&self) -> Option<&UserInfo> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Ask the backend for the current user and classify the answer.
pub async fn check_auth<B: AuthBackend>(backend: &B) -> AuthOutcome {
    match backend.me().await {
        Ok(user) => AuthOutcome::Authenticated(user),
        Err(e) if e.is_unauthorized() => AuthOutcome::Unauthenticated,
        Err(e) => {
            tracing::warn!("Session check failed: {}", e);
            AuthOutcome::Faulted(AUTH_FAULT_MESSAGE.to_string())
        }
    }
}

/// End the backend session. Failures are logged and swallowed: the caller
/// signs out locally either way.
pub async fn end_session<B: AuthBackend>(backend: &B) {
    if let Err(e) = backend.logout().await {
        tracing::error!("Logout error: {}", e);
    }
}
