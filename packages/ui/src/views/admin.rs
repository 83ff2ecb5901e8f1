use api::{AdminStats, StatusCount};
use dioxus::prelude::*;

use crate::guard::LoadingScreen;
use crate::icons::{FaAward, FaBriefcase, FaFileLines, FaUsers};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Row label for a breakdown entry; ungrouped applications read as "unknown".
pub fn breakdown_label(entry: &StatusCount) -> &str {
    entry.status.as_deref().filter(|s| !s.is_empty()).unwrap_or("unknown")
}

#[component]
pub fn AdminView() -> Element {
    let stats = use_resource(|| async {
        match api::client().admin_stats().await {
            Ok(stats) => Some(stats),
            Err(e) => {
                tracing::error!("Failed to fetch admin stats: {e}");
                None
            }
        }
    });

    let Some(loaded) = stats.cloned() else {
        return rsx! {
            LoadingScreen { message: "Loading statistics..." }
        };
    };
    let failed = loaded.is_none();
    let stats: AdminStats = loaded.unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",

            h1 { class: "view-title", "Admin Panel" }
            p { class: "view-subtitle", "Placement activity across all students." }

            if failed {
                div { class: "notice notice--error", "Could not load statistics." }
            }

            div {
                class: "stats-grid",
                div {
                    class: "card stat-card",
                    Icon { icon: FaUsers, width: 22, height: 22 }
                    p { class: "stat-value", "{stats.total_students}" }
                    p { class: "muted", "Total students" }
                }
                div {
                    class: "card stat-card",
                    Icon { icon: FaBriefcase, width: 22, height: 22 }
                    p { class: "stat-value", "{stats.total_drives}" }
                    p { class: "muted", "Active drives" }
                }
                div {
                    class: "card stat-card",
                    Icon { icon: FaFileLines, width: 22, height: 22 }
                    p { class: "stat-value", "{stats.total_applications}" }
                    p { class: "muted", "Applications" }
                }
                div {
                    class: "card stat-card",
                    Icon { icon: FaAward, width: 22, height: 22 }
                    p { class: "stat-value", "{stats.placed_students}" }
                    p { class: "muted", "Students placed" }
                }
            }

            section {
                class: "card",
                h2 { "Applications by status" }
                if stats.status_breakdown.is_empty() {
                    p { class: "muted", "No applications yet." }
                } else {
                    table {
                        class: "breakdown",
                        thead {
                            tr {
                                th { "Status" }
                                th { "Count" }
                            }
                        }
                        tbody {
                            for entry in stats.status_breakdown.iter() {
                                tr {
                                    td { class: "capitalize", {breakdown_label(entry).to_string()} }
                                    td { "{entry.count}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
