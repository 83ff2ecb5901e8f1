use dioxus::prelude::*;

use crate::guard::LoadingScreen;
use crate::icons::FaBookOpen;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[component]
pub fn ResourcesView() -> Element {
    let resources = use_resource(|| async {
        api::client().resources().await.unwrap_or_else(|e| {
            tracing::error!("Failed to fetch resources: {e}");
            Vec::new()
        })
    });

    let Some(resources) = resources.cloned() else {
        return rsx! {
            LoadingScreen { message: "Loading resources..." }
        };
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",

            h1 { class: "view-title", "Learning Resources" }
            p { class: "view-subtitle", "Material to help you prepare." }

            if resources.is_empty() {
                div { class: "empty-state", "No resources yet." }
            }

            div {
                class: "card-grid",
                for resource in resources {
                    div {
                        key: "{resource.id}",
                        class: "card resource-card",
                        div {
                            class: "resource-header",
                            Icon { icon: FaBookOpen, width: 18, height: 18 }
                            span { class: "tag", {resource.r#type.clone()} }
                        }
                        h3 { "{resource.title}" }
                        p { class: "muted", "{resource.description}" }
                        a {
                            class: "btn btn-secondary",
                            href: "{resource.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "Open resource"
                        }
                    }
                }
            }
        }
    }
}
