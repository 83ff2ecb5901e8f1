//! Identity-provider hand-off on the dashboard route.
//!
//! [`complete_sign_in`] is the whole sequence against any
//! [`AuthBackend`]: exchange the token, strip it from the URL, verify the new
//! session and decide where to land. [`SessionHandler`] runs it once per mount
//! in the browser.

use api::auth::{exchange_session, session_token_from_fragment};
use api::{AuthBackend, AuthOutcome, SessionExchange};
use dioxus::prelude::*;

use crate::guard::{Landing, LoadingScreen};
use crate::auth::AuthStore;
use crate::{browser, use_auth, AuthState};

/// Publish the result of a token exchange and pick the landing page.
pub fn resolve_session(state: &mut AuthState, exchange: SessionExchange) -> Landing {
    match exchange {
        SessionExchange::SignedIn(user) => {
            state.apply(AuthOutcome::Authenticated(user));
            Landing::Dashboard
        }
        SessionExchange::Failed => {
            state.sign_out();
            Landing::Root
        }
    }
}

/// Run the full hand-off for `token` and publish the result to `store`.
pub async fn complete_sign_in<B, S, F>(backend: &B, token: &str, store: &mut S, strip_fragment: F) -> Landing
where
    B: AuthBackend,
    S: AuthStore,
    F: FnOnce(),
{
    let exchange = exchange_session(backend, token, strip_fragment).await;
    let mut landing = Landing::Root;
    store.update(|state| landing = resolve_session(state, exchange));
    landing
}

/// Run the hand-off when `fragment` carries a session token.
///
/// Returns `None` without touching the backend, the URL or `store` when there
/// is no token.
pub async fn sign_in_from_fragment<B, S, F>(
    backend: &B,
    fragment: &str,
    store: &mut S,
    strip_fragment: F,
) -> Option<Landing>
where
    B: AuthBackend,
    S: AuthStore,
    F: FnOnce(),
{
    let token = session_token_from_fragment(fragment)?;
    Some(complete_sign_in(backend, &token, store, strip_fragment).await)
}

/// Gate for the dashboard route that consumes `#session_id=<token>`.
///
/// Without a token the children render right away. With one, a blocking
/// "Signing you in..." screen shows until the exchange resolves, then
/// `on_landing` receives the page to replace the current entry with. The
/// token is read once when the component mounts, so re-renders never
/// exchange it twice.
#[component]
pub fn SessionHandler(on_landing: EventHandler<Landing>, children: Element) -> Element {
    let mut auth = use_auth();
    let fragment = use_hook(browser::location_hash);
    let mut processing = use_signal(|| session_token_from_fragment(&fragment).is_some());

    use_hook(move || {
        if processing() {
            spawn(async move {
                let landing =
                    sign_in_from_fragment(api::client(), &fragment, &mut auth, browser::strip_fragment)
                        .await;
                processing.set(false);
                if let Some(landing) = landing {
                    on_landing.call(landing);
                }
            });
        }
    });

    if processing() {
        return rsx! {
            LoadingScreen { message: "Signing you in..." }
        };
    }

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::auth::MemoryAuth;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_valid_token_lands_on_dashboard_signed_in() {
        let backend = MemoryAuth::anonymous();
        backend.accept_token("ABC", MemoryAuth::student("Asha"));
        let mut state = AuthState::default();
        let stripped = Cell::new(false);

        let landing = complete_sign_in(&backend, "ABC", &mut state, || stripped.set(true)).await;

        assert_eq!(landing, Landing::Dashboard);
        assert_eq!(state.user.as_ref().map(|u| u.name.as_str()), Some("Asha"));
        assert!(!state.loading);
        assert!(stripped.get());
        assert_eq!(backend.session_ids(), vec!["ABC".to_string()]);
    }

    #[tokio::test]
    async fn test_rejected_token_lands_on_root_signed_out() {
        let backend = MemoryAuth::anonymous();
        let mut state = AuthState::default();
        let stripped = Cell::new(false);

        let landing = complete_sign_in(&backend, "ABC", &mut state, || stripped.set(true)).await;

        assert_eq!(landing, Landing::Root);
        assert!(state.user.is_none());
        assert!(!state.loading);
        assert!(stripped.get());
        assert_eq!(backend.session_ids().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_recheck_lands_on_root() {
        let backend = MemoryAuth::anonymous();
        backend.accept_token("ABC", MemoryAuth::student("Asha"));
        backend.fail_me_with(api::ApiError::Status {
            status: 502,
            body: None,
        });
        let mut state = AuthState::default();

        let landing = complete_sign_in(&backend, "ABC", &mut state, || {}).await;

        assert_eq!(landing, Landing::Root);
        assert!(state.user.is_none());
    }

    #[tokio::test]
    async fn test_no_token_means_no_exchange() {
        let backend = MemoryAuth::anonymous();
        backend.accept_token("ABC", MemoryAuth::student("Asha"));
        let stripped = Cell::new(false);

        for fragment in ["", "#", "#tab=drives", "#session_id="] {
            let mut state = AuthState::default();
            let landing =
                sign_in_from_fragment(&backend, fragment, &mut state, || stripped.set(true)).await;

            assert_eq!(landing, None, "fragment {fragment:?}");
            assert_eq!(state, AuthState::default());
        }
        assert!(backend.session_ids().is_empty());
        assert!(!stripped.get());
    }

    #[tokio::test]
    async fn test_token_in_fragment_is_exchanged_once() {
        let backend = MemoryAuth::anonymous();
        backend.accept_token("ABC", MemoryAuth::student("Asha"));
        let mut state = AuthState::default();

        let landing =
            sign_in_from_fragment(&backend, "#session_id=ABC", &mut state, || {}).await;

        assert_eq!(landing, Some(Landing::Dashboard));
        assert_eq!(backend.session_ids(), vec!["ABC".to_string()]);
    }
}
