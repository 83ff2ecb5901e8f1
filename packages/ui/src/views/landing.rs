use dioxus::prelude::*;

use crate::icons::{FaAward, FaBriefcase, FaBullseye, FaFileLines};
use crate::{browser, use_auth, Icon};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Login URL for the identity provider, returning to the dashboard.
pub fn provider_login_url() -> String {
    let origin = browser::origin().unwrap_or_default();
    api::client().config().login_url(&origin)
}

/// Public landing page.
#[component]
pub fn LandingView(
    /// Called when a signed-in visitor asks for their dashboard.
    on_dashboard: EventHandler<()>,
) -> Element {
    let auth = use_auth();
    let signed_in = auth().user.is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "landing",
            nav {
                class: "landing-nav",
                div {
                    class: "logo",
                    Icon { icon: FaBriefcase, width: 24, height: 24 }
                    span { "PlacementPro" }
                }
            }

            section {
                class: "landing-hero",
                h1 { "Your campus placements, in one place" }
                p {
                    "Track placement drives, apply in one click, practice with mock tests "
                    "and keep your profile ready for recruiters."
                }
                if signed_in {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_dashboard.call(()),
                        "Go to dashboard"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| browser::reload_to(&provider_login_url()),
                        "Get Started"
                    }
                }
            }

            section {
                class: "landing-features",
                div {
                    class: "feature-card",
                    Icon { icon: FaBriefcase, width: 28, height: 28 }
                    h3 { "Placement drives" }
                    p { "Every open drive with package, location and deadline." }
                }
                div {
                    class: "feature-card",
                    Icon { icon: FaFileLines, width: 28, height: 28 }
                    h3 { "Applications" }
                    p { "See where each application stands." }
                }
                div {
                    class: "feature-card",
                    Icon { icon: FaBullseye, width: 28, height: 28 }
                    h3 { "Mock tests" }
                    p { "Practice aptitude and technical rounds." }
                }
                div {
                    class: "feature-card",
                    Icon { icon: FaAward, width: 28, height: 28 }
                    h3 { "Get placed" }
                    p { "Keep your profile complete and stand out." }
                }
            }
        }
    }
}
