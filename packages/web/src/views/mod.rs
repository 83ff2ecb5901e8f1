use dioxus::prelude::*;
use dioxus::router::Navigator;
use ui::Landing as LandingPage;

use crate::Route;

mod guarded;
pub use guarded::{AdminOnly, Protected, SessionGate};

mod pages;
pub use pages::{Admin, Applications, Dashboard, Drives, Landing, MockTests, NotFound, Profile, Resources};

pub(crate) fn route_for(landing: LandingPage) -> Route {
    match landing {
        LandingPage::Root => Route::Landing {},
        LandingPage::Dashboard => Route::Dashboard {},
    }
}

/// Push the route for an app path; unknown paths land on the not-found page.
pub(crate) fn push_path(nav: Navigator, path: &str) {
    match path.parse::<Route>() {
        Ok(route) => {
            nav.push(route);
        }
        Err(e) => tracing::warn!("No route for {}: {}", path, e),
    }
}
