use api::ApplicationStatus;
use dioxus::prelude::*;

use crate::guard::LoadingScreen;
use crate::icons::{FaCircleCheck, FaCircleDot, FaCircleXmark, FaClock};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Badge modifier class for a status. Unknown statuses look pending.
pub fn status_class(status: &ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Selected => "status-badge status-selected",
        ApplicationStatus::Rejected => "status-badge status-rejected",
        ApplicationStatus::Shortlisted => "status-badge status-shortlisted",
        ApplicationStatus::Applied | ApplicationStatus::Other(_) => "status-badge status-pending",
    }
}

#[component]
fn StatusIcon(status: ApplicationStatus) -> Element {
    match status {
        ApplicationStatus::Selected => rsx! { Icon { icon: FaCircleCheck, width: 14, height: 14 } },
        ApplicationStatus::Rejected => rsx! { Icon { icon: FaCircleXmark, width: 14, height: 14 } },
        ApplicationStatus::Shortlisted => rsx! { Icon { icon: FaCircleDot, width: 14, height: 14 } },
        _ => rsx! { Icon { icon: FaClock, width: 14, height: 14 } },
    }
}

#[component]
pub fn ApplicationsView(on_browse: EventHandler<()>) -> Element {
    let applications = use_resource(|| async {
        api::client().my_applications().await.unwrap_or_else(|e| {
            tracing::error!("Failed to fetch applications: {e}");
            Vec::new()
        })
    });

    let Some(applications) = applications.cloned() else {
        return rsx! {
            LoadingScreen { message: "Loading applications..." }
        };
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",

            h1 { class: "view-title", "My Applications" }
            p { class: "view-subtitle", "Track the status of every drive you applied to." }

            if applications.is_empty() {
                div {
                    class: "empty-state",
                    p { "You haven't applied to any drives yet." }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_browse.call(()),
                        "Browse drives"
                    }
                }
            }

            div {
                class: "card-list",
                for application in applications {
                    div {
                        key: "{application.id}",
                        class: "card application-card",
                        div {
                            class: "application-main",
                            h3 {
                                {application.drive.as_ref().map(|d| d.company_name.clone()).unwrap_or_else(|| "Unknown company".to_string())}
                            }
                            p {
                                class: "drive-role",
                                {application.drive.as_ref().map(|d| d.role.clone()).unwrap_or_default()}
                            }
                            p {
                                class: "muted",
                                "Applied on "
                                {application.applied_label()}
                            }
                        }
                        span {
                            class: status_class(&application.status),
                            StatusIcon { status: application.status.clone() }
                            span { {status_label(&application.status).to_string()} }
                        }
                    }
                }
            }
        }
    }
}

/// Badge text. Statuses this client does not know keep the backend's wording.
pub fn status_label(status: &ApplicationStatus) -> &str {
    match status {
        ApplicationStatus::Applied => "Applied",
        ApplicationStatus::Shortlisted => "Shortlisted",
        ApplicationStatus::Selected => "Selected",
        ApplicationStatus::Rejected => "Rejected",
        ApplicationStatus::Other(raw) => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_status_keeps_backend_text_with_pending_style() {
        let status = ApplicationStatus::from("on_hold".to_string());
        assert_eq!(status_label(&status), "on_hold");
        assert_eq!(status_class(&status), status_class(&ApplicationStatus::Applied));
        assert_eq!(status_label(&ApplicationStatus::from("applied".to_string())), "Applied");
    }

    #[test]
    fn test_known_statuses_have_their_own_badge() {
        assert_eq!(status_label(&ApplicationStatus::Selected), "Selected");
        assert_ne!(
            status_class(&ApplicationStatus::Selected),
            status_class(&ApplicationStatus::Rejected)
        );
    }
}
