use dioxus::prelude::*;
use dioxus_free_icons::IconShape;

use crate::icons::{
    FaArrowTrendUp, FaBars, FaBookOpen, FaBriefcase, FaBullseye, FaFileLines,
    FaRightFromBracket, FaUser, FaUsers, FaXmark,
};
use crate::{use_auth, Icon, LogoutButton};

/// Sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavItem {
    pub name: &'static str,
    pub path: &'static str,
}

/// Sidebar entries for a user; admins get the admin panel second.
pub fn nav_items(is_admin: bool) -> Vec<NavItem> {
    let mut items = vec![
        NavItem { name: "Dashboard", path: "/dashboard" },
        NavItem { name: "Placement Drives", path: "/drives" },
        NavItem { name: "My Applications", path: "/applications" },
        NavItem { name: "Mock Tests", path: "/tests" },
        NavItem { name: "Resources", path: "/resources" },
        NavItem { name: "Profile", path: "/profile" },
    ];
    if is_admin {
        items.insert(1, NavItem { name: "Admin Panel", path: "/admin" });
    }
    items
}

/// Shared dashboard shell: sidebar navigation, header and content area.
///
/// Platform packages pass the current path and an `Outlet` as children.
#[component]
pub fn DashboardLayoutView(
    /// Path of the current route, used to highlight the active entry.
    active_path: String,
    /// Called with the path of the entry the user picked.
    on_navigate: EventHandler<String>,
    /// The router outlet for child routes.
    children: Element,
) -> Element {
    let auth = use_auth();
    let mut sidebar_open = use_signal(|| false);

    let state = auth();
    let items = nav_items(state.is_admin());
    let (name, avatar) = match state.user {
        Some(ref user) => (user.name.clone(), user.avatar_url(40)),
        None => (String::new(), "https://via.placeholder.com/40".to_string()),
    };

    rsx! {
        div {
            class: "dashboard-layout",

            aside {
                class: if sidebar_open() { "sidebar open" } else { "sidebar" },

                div {
                    class: "sidebar-header",
                    div {
                        class: "logo",
                        Icon { icon: FaBriefcase, width: 22, height: 22 }
                        span { "PlacementPro" }
                    }
                    button {
                        class: "close-sidebar",
                        title: "Close menu",
                        onclick: move |_| sidebar_open.set(false),
                        Icon { icon: FaXmark, width: 18, height: 18 }
                    }
                }

                nav {
                    class: "sidebar-nav",
                    for item in items {
                        button {
                            key: "{item.path}",
                            class: if active_path == item.path { "nav-item active" } else { "nav-item" },
                            onclick: move |_| {
                                sidebar_open.set(false);
                                on_navigate.call(item.path.to_string());
                            },
                            NavIcon { path: item.path }
                            span { "{item.name}" }
                        }
                    }
                }

                div {
                    class: "sidebar-footer",
                    LogoutButton {
                        class: "logout-btn",
                        Icon { icon: FaRightFromBracket, width: 18, height: 18 }
                    }
                }
            }

            div {
                class: "main-content",
                header {
                    class: "dashboard-header",
                    button {
                        class: "menu-btn",
                        title: "Open menu",
                        onclick: move |_| sidebar_open.set(true),
                        Icon { icon: FaBars, width: 22, height: 22 }
                    }
                    div {
                        class: "header-right",
                        div {
                            class: "user-info",
                            img { class: "user-avatar", src: "{avatar}", alt: "{name}" }
                            span { "{name}" }
                        }
                    }
                }
                main {
                    class: "content-area",
                    {children}
                }
            }
        }
    }
}

#[component]
fn NavIcon(path: &'static str) -> Element {
    match path {
        "/dashboard" => nav_icon(FaArrowTrendUp),
        "/admin" => nav_icon(FaUsers),
        "/drives" => nav_icon(FaBriefcase),
        "/applications" => nav_icon(FaFileLines),
        "/tests" => nav_icon(FaBullseye),
        "/resources" => nav_icon(FaBookOpen),
        _ => nav_icon(FaUser),
    }
}

fn nav_icon<T: IconShape + Clone + PartialEq + 'static>(icon: T) -> Element {
    rsx! {
        Icon { icon: icon, width: 18, height: 18 }
    }
}
