//! Route guard decisions.
//!
//! Guards are pure functions of [`AuthState`]. While the session check is in
//! flight they hold the page back instead of redirecting, so a signed-in
//! visitor is never bounced before the check resolves.

use dioxus::prelude::*;

use crate::AuthState;

/// Where a guard or the session hand-off sends the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// The public landing page, `/`.
    Root,
    /// The signed-in home, `/dashboard`.
    Dashboard,
}

impl Landing {
    pub fn path(self) -> &'static str {
        match self {
            Self::Root => "/",
            Self::Dashboard => "/dashboard",
        }
    }
}

/// What a guarded route should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Session check still running.
    Pending,
    Redirect(Landing),
    Granted,
}

/// Any signed-in user.
pub fn require_user(state: &AuthState) -> Access {
    if state.loading {
        return Access::Pending;
    }
    match state.user {
        Some(_) => Access::Granted,
        None => Access::Redirect(Landing::Root),
    }
}

/// Signed-in admins only. Other signed-in users go back to their dashboard.
pub fn require_admin(state: &AuthState) -> Access {
    if state.loading {
        return Access::Pending;
    }
    match state.user {
        None => Access::Redirect(Landing::Root),
        Some(ref user) if user.is_admin() => Access::Granted,
        Some(_) => Access::Redirect(Landing::Dashboard),
    }
}

/// Full-screen spinner shown while a guard or the session hand-off waits.
#[component]
pub fn LoadingScreen(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "loading-screen",
            div { class: "loading-spinner" }
            p { "{message}" }
        }
    }
}
