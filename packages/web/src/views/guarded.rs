use dioxus::prelude::*;
use ui::views::DashboardLayoutView;
use ui::{require_admin, require_user, use_auth, Access, LoadingScreen, SessionHandler};

use super::{push_path, route_for};
use crate::Route;

/// Hands `#session_id=` tokens on `/dashboard` to the session exchange
/// before any guard sees the route.
#[component]
pub fn SessionGate() -> Element {
    let nav = use_navigator();
    let route = use_route::<Route>();

    if !matches!(route, Route::Dashboard {}) {
        return rsx! {
            Outlet::<Route> {}
        };
    }

    rsx! {
        SessionHandler {
            on_landing: move |landing| {
                nav.replace(route_for(landing));
            },
            Outlet::<Route> {}
        }
    }
}

/// Any signed-in user.
#[component]
pub fn Protected() -> Element {
    rsx! {
        GuardedShell { admin_only: false }
    }
}

/// Signed-in admins; students are sent back to their dashboard.
#[component]
pub fn AdminOnly() -> Element {
    rsx! {
        GuardedShell { admin_only: true }
    }
}

#[component]
fn GuardedShell(admin_only: bool) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    let route = use_route::<Route>();

    let state = auth();
    let access = if admin_only { require_admin(&state) } else { require_user(&state) };

    match access {
        Access::Pending => rsx! {
            LoadingScreen {}
        },
        Access::Redirect(landing) => {
            nav.replace(route_for(landing));
            rsx! {}
        }
        Access::Granted => rsx! {
            DashboardLayoutView {
                active_path: route.to_string(),
                on_navigate: move |path: String| push_path(nav, &path),
                Outlet::<Route> {}
            }
        },
    }
}
