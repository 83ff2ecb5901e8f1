use api::{ApiError, Drive};
use dioxus::prelude::*;

use crate::guard::LoadingScreen;
use crate::icons::{FaClock, FaDollarSign, FaLocationDot, FaMagnifyingGlass};
use crate::notice::{Notice, NoticeBanner};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

pub const APPLY_SUCCESS: &str = "Application submitted successfully!";
pub const APPLY_FAILURE: &str = "Failed to apply";

/// Drives whose company name or role contains `term` as typed, ignoring case.
pub fn filter_drives<'a>(drives: &'a [Drive], term: &str) -> Vec<&'a Drive> {
    drives.iter().filter(|d| d.matches(term)).collect()
}

/// Message for the outcome of an application. Backend detail text wins.
pub fn apply_notice(result: &Result<(), ApiError>) -> Notice {
    match result {
        Ok(()) => Notice::success(APPLY_SUCCESS),
        Err(e) => Notice::error(e.detail().unwrap_or_else(|| APPLY_FAILURE.to_string())),
    }
}

#[component]
pub fn DrivesView() -> Element {
    let mut search = use_signal(String::new);
    let mut notice = use_signal(|| Option::<Notice>::None);
    let mut applying = use_signal(|| Option::<String>::None);

    let drives = use_resource(|| async {
        api::client().drives().await.unwrap_or_else(|e| {
            tracing::error!("Failed to fetch drives: {e}");
            Vec::new()
        })
    });

    let handle_apply = move |drive_id: String| {
        spawn(async move {
            applying.set(Some(drive_id.clone()));
            let result = api::client().apply(&drive_id).await;
            if let Err(ref e) = result {
                tracing::warn!("Application to drive {} failed: {e}", drive_id);
            }
            notice.set(Some(apply_notice(&result)));
            applying.set(None);
        });
    };

    let Some(all) = drives.cloned() else {
        return rsx! {
            LoadingScreen { message: "Loading drives..." }
        };
    };
    let term = search();
    let visible: Vec<Drive> = filter_drives(&all, &term).into_iter().cloned().collect();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",

            h1 { class: "view-title", "Placement Drives" }
            p { class: "view-subtitle", "Explore and apply to open opportunities." }

            NoticeBanner { notice }

            div {
                class: "search-box",
                Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
                input {
                    r#type: "text",
                    placeholder: "Search by company or role...",
                    value: "{term}",
                    oninput: move |e| search.set(e.value()),
                }
            }

            if visible.is_empty() {
                div { class: "empty-state", "No drives found." }
            }

            div {
                class: "card-grid",
                for drive in visible {
                    div {
                        key: "{drive.id}",
                        class: "card drive-card",
                        div {
                            class: "drive-card-header",
                            h3 { "{drive.company_name}" }
                            p { class: "drive-role", "{drive.role}" }
                        }
                        div {
                            class: "drive-meta",
                            span {
                                Icon { icon: FaDollarSign, width: 14, height: 14 }
                                "{drive.ctc}"
                            }
                            span {
                                Icon { icon: FaLocationDot, width: 14, height: 14 }
                                "{drive.location}"
                            }
                            span {
                                Icon { icon: FaClock, width: 14, height: 14 }
                                "Apply by "
                                {drive.deadline_label()}
                            }
                        }
                        p { class: "drive-description", "{drive.description}" }
                        div {
                            class: "tags",
                            for skill in drive.skills_required.iter() {
                                span { key: "{skill}", class: "tag", "{skill}" }
                            }
                        }
                        {
                            let id = drive.id.clone();
                            let busy = applying().as_deref() == Some(drive.id.as_str());
                            rsx! {
                                button {
                                    class: "btn btn-primary",
                                    disabled: busy,
                                    onclick: move |_| handle_apply(id.clone()),
                                    if busy { "Applying..." } else { "Apply Now" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeKind;

    fn drive(id: &str, company: &str, role: &str) -> Drive {
        Drive {
            id: id.into(),
            company_name: company.into(),
            company_logo: None,
            role: role.into(),
            description: String::new(),
            eligibility: String::new(),
            ctc: "12 LPA".into(),
            location: "Bengaluru".into(),
            application_deadline: "2025-03-01T00:00:00+00:00".into(),
            interview_date: None,
            skills_required: vec!["Rust".into()],
            process_steps: Vec::new(),
            status: Some("active".into()),
        }
    }

    fn ids(drives: Vec<&Drive>) -> Vec<&str> {
        drives.into_iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_filter_matches_company_or_role_ignoring_case() {
        let drives = vec![
            drive("d1", "Acme Corp", "Backend Engineer"),
            drive("d2", "Globex", "Data Analyst"),
            drive("d3", "Initech", "Frontend Engineer"),
        ];
        assert_eq!(ids(filter_drives(&drives, "acme")), ["d1"]);
        assert_eq!(ids(filter_drives(&drives, "ENGINEER")), ["d1", "d3"]);
        assert!(filter_drives(&drives, "umbrella").is_empty());
    }

    #[test]
    fn test_empty_term_keeps_everything() {
        let drives = vec![drive("d1", "Acme", "SDE"), drive("d2", "Globex", "Analyst")];
        assert_eq!(ids(filter_drives(&drives, "")), ["d1", "d2"]);
    }

    #[test]
    fn test_whitespace_in_term_is_significant() {
        let drives = vec![
            drive("d1", "Acme", "Backend Engineer"),
            drive("d2", "Globex", "Engineering Intern"),
        ];
        assert_eq!(ids(filter_drives(&drives, " engineer")), ["d1"]);
        assert!(filter_drives(&drives, "engineer  ").is_empty());
        assert!(filter_drives(&drives, "   ").is_empty());
    }

    #[test]
    fn test_apply_success_notice() {
        let notice = apply_notice(&Ok(()));
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, APPLY_SUCCESS);
    }

    #[test]
    fn test_apply_failure_uses_backend_detail() {
        let result = Err(ApiError::Status {
            status: 400,
            body: Some(r#"{"detail": "Already applied to this drive"}"#.into()),
        });
        let notice = apply_notice(&result);
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(notice.message, "Already applied to this drive");
    }

    #[test]
    fn test_apply_failure_without_detail_is_generic() {
        for error in [
            ApiError::Status { status: 500, body: Some("Internal Server Error".into()) },
            ApiError::Status { status: 400, body: Some(r#"{"detail": 42}"#.into()) },
            ApiError::Network("connection refused".into()),
        ] {
            assert_eq!(apply_notice(&Err(error)).message, APPLY_FAILURE);
        }
    }
}
