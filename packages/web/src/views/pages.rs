use dioxus::prelude::*;
use ui::views::{
    AdminView, ApplicationsView, DashboardView, DrivesView, LandingView, MockTestsView,
    NotFoundView, ProfileView, ResourcesView,
};

use super::push_path;
use crate::Route;

#[component]
pub fn Landing() -> Element {
    let nav = use_navigator();
    rsx! {
        LandingView {
            on_dashboard: move |_| {
                nav.push(Route::Dashboard {});
            },
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    rsx! {
        DashboardView { on_navigate: move |path: String| push_path(nav, &path) }
    }
}

#[component]
pub fn Drives() -> Element {
    rsx! { DrivesView {} }
}

#[component]
pub fn Applications() -> Element {
    let nav = use_navigator();
    rsx! {
        ApplicationsView {
            on_browse: move |_| {
                nav.push(Route::Drives {});
            },
        }
    }
}

#[component]
pub fn MockTests() -> Element {
    rsx! { MockTestsView {} }
}

#[component]
pub fn Resources() -> Element {
    rsx! { ResourcesView {} }
}

#[component]
pub fn Profile() -> Element {
    rsx! { ProfileView {} }
}

#[component]
pub fn Admin() -> Element {
    rsx! { AdminView {} }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    rsx! {
        NotFoundView {
            path: segments.join("/"),
            on_home: move |_| {
                nav.push(Route::Landing {});
            },
        }
    }
}
