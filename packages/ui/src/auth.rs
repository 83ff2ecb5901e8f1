//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] owns the one [`AuthState`] signal of the app and checks the
//! session once on mount. Everything else reads it through [`use_auth`]; only
//! the provider, [`logout`] and the session hand-off write to it.

use api::auth::{check_auth, end_session};
use api::{AuthBackend, AuthOutcome, UserInfo};
use dioxus::prelude::*;

use crate::browser;

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub user: Option<UserInfo>,
    pub loading: bool,
    /// Set when the session could not be verified for a reason other than the
    /// visitor being anonymous.
    pub error: Option<String>,
    /// Bumped on every write so a check that started before a newer write
    /// cannot overwrite it.
    epoch: u64,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
            error: None,
            epoch: 0,
        }
    }
}

impl AuthState {
    /// Mark a session check as in flight. Returns the token to finish it with.
    pub fn begin_check(&mut self) -> u64 {
        self.epoch += 1;
        self.loading = true;
        self.error = None;
        self.epoch
    }

    /// Publish the outcome of the check started with `epoch`.
    ///
    /// Returns `false`, leaving the state alone, when something newer was
    /// written in the meantime.
    pub fn finish_check(&mut self, epoch: u64, outcome: AuthOutcome) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.set_outcome(outcome);
        true
    }

    /// Publish an outcome obtained outside a tracked check.
    pub fn apply(&mut self, outcome: AuthOutcome) {
        self.epoch += 1;
        self.set_outcome(outcome);
    }

    /// Forget the user locally.
    pub fn sign_out(&mut self) {
        self.epoch += 1;
        self.user = None;
        self.loading = false;
        self.error = None;
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(UserInfo::is_admin)
    }

    fn set_outcome(&mut self, outcome: AuthOutcome) {
        self.loading = false;
        match outcome {
            AuthOutcome::Authenticated(user) => {
                self.user = Some(user);
                self.error = None;
            }
            AuthOutcome::Unauthenticated => {
                self.user = None;
                self.error = None;
            }
            AuthOutcome::Faulted(message) => {
                self.user = None;
                self.error = Some(message);
            }
        }
    }
}

/// Somewhere an [`AuthState`] can be written: the app's signal, or a plain
/// value in tests.
pub trait AuthStore {
    fn update(&mut self, f: impl FnOnce(&mut AuthState));
}

impl AuthStore for AuthState {
    fn update(&mut self, f: impl FnOnce(&mut AuthState)) {
        f(self)
    }
}

impl AuthStore for Signal<AuthState> {
    fn update(&mut self, f: impl FnOnce(&mut AuthState)) {
        f(&mut *self.write())
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that manages authentication state.
/// Wrap your app with this component to enable authentication.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let auth_state = use_context_provider(|| Signal::new(AuthState::default()));

    // Check the session on mount
    let _ = use_resource(move || async move {
        refresh_auth(auth_state).await;
    });

    rsx! {
        {children}
    }
}

/// Re-run the session check against the backend and publish the result.
pub async fn refresh_auth(mut auth: Signal<AuthState>) -> AuthOutcome {
    let epoch = auth.write().begin_check();
    let outcome = check_auth(api::client()).await;
    if !auth.write().finish_check(epoch, outcome.clone()) {
        tracing::debug!("Discarding stale session check");
    }
    outcome
}

/// End the session on `backend`, then clear the local user whatever the backend said.
pub async fn sign_out_with<B: AuthBackend, S: AuthStore>(backend: &B, store: &mut S) {
    end_session(backend).await;
    store.update(AuthState::sign_out);
}

/// Log out and reload the app at `/` so no in-memory state survives.
pub async fn logout(mut auth: Signal<AuthState>) {
    sign_out_with(api::client(), &mut auth).await;
    browser::reload_to("/");
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    children: Element,
) -> Element {
    let auth_state = use_auth();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| async move { logout(auth_state).await },
            {children}
            span { "{label}" }
        }
    }
}
