//! One-time session token hand-off.
//!
//! The identity provider sends the visitor back to `/dashboard#session_id=<token>`.
//! The token is exchanged exactly once for a session cookie and must never be
//! logged or left in the address bar.

use url::form_urlencoded;

use super::{check_auth, AuthBackend, AuthOutcome};
use crate::models::UserInfo;

/// Header carrying the one-time token to `POST /auth/session`.
pub const SESSION_HEADER: &str = "X-Session-ID";

/// Fragment parameter the identity provider puts the token in.
pub const SESSION_PARAM: &str = "session_id";

/// Extract the one-time token from a URL fragment.
///
/// The fragment is parsed as form-encoded pairs; a leading `#` is ignored and
/// an empty token counts as absent.
pub fn session_token_from_fragment(fragment: &str) -> Option<String> {
    let pairs = fragment.strip_prefix('#').unwrap_or(fragment);
    form_urlencoded::parse(pairs.as_bytes())
        .find(|(key, _)| key == SESSION_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// How a token exchange ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionExchange {
    /// The backend issued a session and the follow-up check found the user.
    SignedIn(UserInfo),
    /// Either the exchange or the follow-up check failed.
    Failed,
}

/// Exchange a one-time token for a session and verify it.
///
/// `strip_fragment` runs once the exchange call has resolved, success or not,
/// so the token leaves the address bar before anything else happens.
pub async fn exchange_session<B, F>(backend: &B, token: &str, strip_fragment: F) -> SessionExchange
where
    B: AuthBackend,
    F: FnOnce(),
{
    let established = backend.establish_session(token).await;
    strip_fragment();

    if let Err(e) = established {
        tracing::error!("Session exchange failed: {}", e);
        return SessionExchange::Failed;
    }

    match check_auth(backend).await {
        AuthOutcome::Authenticated(user) => {
            tracing::info!("Session established for {}", user.id);
            SessionExchange::SignedIn(user)
        }
        outcome => {
            tracing::error!("Session not usable after exchange: {:?}", outcome);
            SessionExchange::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::MemoryAuth;
    use crate::error::ApiError;
    use std::cell::Cell;

    #[test]
    fn test_token_from_fragment() {
        assert_eq!(session_token_from_fragment("#session_id=ABC").as_deref(), Some("ABC"));
        assert_eq!(
            session_token_from_fragment("state=x&session_id=a%2Bb").as_deref(),
            Some("a+b")
        );
        assert_eq!(session_token_from_fragment(""), None);
        assert_eq!(session_token_from_fragment("#"), None);
        assert_eq!(session_token_from_fragment("#session_id="), None);
        assert_eq!(session_token_from_fragment("#other=1"), None);
    }

    #[tokio::test]
    async fn test_exchange_signs_in() {
        let backend = MemoryAuth::anonymous();
        backend.accept_token("ABC", MemoryAuth::student("Asha"));
        let stripped = Cell::new(false);

        let result = exchange_session(&backend, "ABC", || stripped.set(true)).await;

        assert!(matches!(result, SessionExchange::SignedIn(ref u) if u.name == "Asha"));
        assert!(stripped.get());
        assert_eq!(backend.session_ids(), vec!["ABC".to_string()]);
    }

    #[tokio::test]
    async fn test_exchange_rejected_token() {
        let backend = MemoryAuth::anonymous();
        let stripped = Cell::new(false);

        let result = exchange_session(&backend, "expired", || stripped.set(true)).await;

        assert_eq!(result, SessionExchange::Failed);
        assert!(stripped.get());
        assert_eq!(backend.session_ids(), vec!["expired".to_string()]);
        // No follow-up check once the exchange itself failed.
        assert_eq!(backend.me_calls(), 0);
    }

    #[tokio::test]
    async fn test_exchange_fails_when_check_fails() {
        let backend = MemoryAuth::anonymous();
        backend.accept_token("ABC", MemoryAuth::student("Asha"));
        backend.fail_me_with(ApiError::Network("offline".into()));

        let result = exchange_session(&backend, "ABC", || {}).await;

        assert_eq!(result, SessionExchange::Failed);
        assert_eq!(backend.me_calls(), 1);
    }
}
