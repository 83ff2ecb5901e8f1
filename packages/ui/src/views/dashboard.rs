use api::{Announcement, ProfileEnvelope, UserInfo};
use dioxus::prelude::*;
use futures::future::try_join;

use crate::guard::LoadingScreen;
use crate::icons::{FaBell, FaBookOpen, FaBriefcase, FaBullseye, FaFileLines};
use crate::views::or_not_set;
use crate::{use_auth, Icon};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Label and display value of each profile field on the dashboard card.
///
/// `None` when the profile could not be loaded, so a failed fetch never reads
/// as an empty profile.
pub fn profile_summary(loaded: Option<&ProfileEnvelope>) -> Option<Vec<(&'static str, String)>> {
    let profile = loaded?.profile.clone().unwrap_or_default();
    Some(vec![
        ("College", or_not_set(profile.college)),
        ("Degree", or_not_set(profile.degree)),
        ("CGPA", or_not_set(profile.cgpa)),
    ])
}

/// Signed-in home: greeting, announcements, profile summary and shortcuts.
#[component]
pub fn DashboardView(on_navigate: EventHandler<String>) -> Element {
    let auth = use_auth();

    let overview = use_resource(|| async {
        let client = api::client();
        match try_join(client.profile(), client.announcements()).await {
            Ok(pair) => Some(pair),
            Err(e) => {
                tracing::error!("Failed to load dashboard: {e}");
                None
            }
        }
    });

    let first_name = auth()
        .user
        .map(|u| u.name.split_whitespace().next().unwrap_or_default().to_string())
        .unwrap_or_default();
    let Some(loaded) = overview.cloned() else {
        return rsx! {
            LoadingScreen { message: "Loading dashboard..." }
        };
    };
    let (envelope, announcements): (Option<ProfileEnvelope>, Vec<Announcement>) = match loaded {
        Some((envelope, announcements)) => (Some(envelope), announcements),
        None => (None, Vec::new()),
    };
    let summary = profile_summary(envelope.as_ref());
    let user: Option<UserInfo> = envelope.and_then(|e| e.user).or_else(|| auth().user);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",

            h1 { class: "view-title", "Welcome back, {first_name}!" }
            p { class: "view-subtitle", "Here's what's happening with your placements." }

            if !announcements.is_empty() {
                div {
                    class: "ticker",
                    Icon { icon: FaBell, width: 16, height: 16 }
                    div {
                        class: "ticker-track",
                        for item in announcements {
                            span {
                                key: "{item.id}",
                                class: "ticker-item",
                                strong { "{item.title}: " }
                                "{item.content}"
                            }
                        }
                    }
                }
            }

            div {
                class: "dashboard-grid",

                div {
                    class: "card profile-card",
                    h2 { "Your profile" }
                    if let Some(user) = user {
                        div {
                            class: "profile-identity",
                            img { class: "user-avatar", src: user.avatar_url(48), alt: "{user.name}" }
                            div {
                                strong { "{user.name}" }
                                p { class: "muted", "{user.email}" }
                            }
                        }
                    }
                    {match summary {
                        Some(rows) => rsx! {
                            dl {
                                for (label, value) in rows {
                                    dt { "{label}" }
                                    dd { "{value}" }
                                }
                            }
                        },
                        None => rsx! {
                            p { class: "muted", "Profile details are unavailable right now." }
                        },
                    }}
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| on_navigate.call("/profile".to_string()),
                        "Update profile"
                    }
                }

                div {
                    class: "card quick-actions",
                    h2 { "Quick actions" }
                    button {
                        class: "quick-action",
                        onclick: move |_| on_navigate.call("/drives".to_string()),
                        Icon { icon: FaBriefcase, width: 18, height: 18 }
                        span { "Browse drives" }
                    }
                    button {
                        class: "quick-action",
                        onclick: move |_| on_navigate.call("/applications".to_string()),
                        Icon { icon: FaFileLines, width: 18, height: 18 }
                        span { "Track applications" }
                    }
                    button {
                        class: "quick-action",
                        onclick: move |_| on_navigate.call("/tests".to_string()),
                        Icon { icon: FaBullseye, width: 18, height: 18 }
                        span { "Take a mock test" }
                    }
                    button {
                        class: "quick-action",
                        onclick: move |_| on_navigate.call("/resources".to_string()),
                        Icon { icon: FaBookOpen, width: 18, height: 18 }
                        span { "Study resources" }
                    }
                }
            }
        }
    }
}
