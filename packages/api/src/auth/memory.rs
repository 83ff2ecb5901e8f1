use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::AuthBackend;
use crate::error::ApiError;
use crate::models::{Role, UserInfo};

#[derive(Debug, Default)]
struct Inner {
    user: Option<UserInfo>,
    tokens: HashMap<String, UserInfo>,
    me_failure: Option<ApiError>,
    logout_failure: Option<ApiError>,
    me_calls: usize,
    logout_calls: usize,
    session_ids: Vec<String>,
}

/// In-memory AuthBackend for testing.
///
/// Behaves like the real backend: `me` answers 401 without a session, a known
/// token creates one, logout drops it. Failures can be injected per endpoint and
/// every call is recorded.
#[derive(Clone, Debug, Default)]
pub struct MemoryAuth {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryAuth {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn signed_in(user: UserInfo) -> Self {
        let backend = Self::default();
        backend.inner.lock().unwrap().user = Some(user);
        backend
    }

    pub fn student(name: &str) -> UserInfo {
        Self::user(name, Role::Student)
    }

    pub fn admin(name: &str) -> UserInfo {
        Self::user(name, Role::Admin)
    }

    fn user(name: &str, role: Role) -> UserInfo {
        let slug = name.to_lowercase();
        UserInfo {
            id: format!("user_{slug}"),
            email: format!("{slug}@example.edu"),
            name: name.to_string(),
            picture: None,
            role,
        }
    }

    /// Make `token` a valid one-time token that signs in `user`.
    pub fn accept_token(&self, token: &str, user: UserInfo) {
        self.inner.lock().unwrap().tokens.insert(token.to_string(), user);
    }

    pub fn fail_me_with(&self, error: ApiError) {
        self.inner.lock().unwrap().me_failure = Some(error);
    }

    pub fn fail_logout_with(&self, error: ApiError) {
        self.inner.lock().unwrap().logout_failure = Some(error);
    }

    pub fn me_calls(&self) -> usize {
        self.inner.lock().unwrap().me_calls
    }

    pub fn logout_calls(&self) -> usize {
        self.inner.lock().unwrap().logout_calls
    }

    /// Tokens received by `establish_session`, in call order.
    pub fn session_ids(&self) -> Vec<String> {
        self.inner.lock().unwrap().session_ids.clone()
    }

    pub fn has_session(&self) -> bool {
        self.inner.lock().unwrap().user.is_some()
    }
}

fn rejected(status: u16, detail: &str) -> ApiError {
    ApiError::Status {
        status,
        body: Some(format!(r#"{{"detail": "{detail}"}}"#)),
    }
}

impl AuthBackend for MemoryAuth {
    async fn me(&self) -> Result<UserInfo, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.me_calls += 1;
        if let Some(e) = inner.me_failure.clone() {
            return Err(e);
        }
        inner.user.clone().ok_or_else(|| rejected(401, "Not authenticated"))
    }

    async fn logout(&self) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.logout_calls += 1;
        if let Some(e) = inner.logout_failure.clone() {
            return Err(e);
        }
        inner.user = None;
        Ok(())
    }

    async fn establish_session(&self, session_id: &str) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.session_ids.push(session_id.to_string());
        match inner.tokens.remove(session_id) {
            Some(user) => {
                inner.user = Some(user);
                Ok(())
            }
            None => Err(rejected(400, "Invalid session")),
        }
    }
}
