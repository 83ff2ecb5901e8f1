use api::{MockTest, TestAttempt};
use dioxus::prelude::*;
use futures::future::try_join;

use crate::guard::LoadingScreen;
use crate::icons::{FaAward, FaClock};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// How many past attempts the page lists.
const RECENT_ATTEMPTS: usize = 3;

/// The first attempts as returned by the backend, newest first.
pub fn recent_attempts(attempts: &[TestAttempt]) -> &[TestAttempt] {
    &attempts[..attempts.len().min(RECENT_ATTEMPTS)]
}

#[component]
pub fn MockTestsView() -> Element {
    let data = use_resource(|| async {
        let client = api::client();
        try_join(client.tests(), client.my_attempts())
            .await
            .unwrap_or_else(|e| {
                tracing::error!("Failed to fetch mock tests: {e}");
                (Vec::<MockTest>::new(), Vec::<TestAttempt>::new())
            })
    });

    let Some((tests, attempts)) = data.cloned() else {
        return rsx! {
            LoadingScreen { message: "Loading tests..." }
        };
    };
    let recent = recent_attempts(&attempts).to_vec();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",

            h1 { class: "view-title", "Mock Tests" }
            p { class: "view-subtitle", "Practice and see how you are improving." }

            if !recent.is_empty() {
                section {
                    class: "card",
                    h2 { "Recent attempts" }
                    for attempt in recent {
                        div {
                            key: "{attempt.id}",
                            class: "attempt-row",
                            Icon { icon: FaAward, width: 16, height: 16 }
                            span { class: "attempt-title", {attempt.title().to_string()} }
                            span { class: "attempt-score", "{attempt.score}/{attempt.total}" }
                            if let Some(pct) = attempt.percentage() {
                                span { class: "attempt-percent", "{pct}%" }
                            }
                        }
                    }
                }
            }

            h2 { class: "section-title", "Available tests" }
            if tests.is_empty() {
                div { class: "empty-state", "No tests available right now." }
            }
            div {
                class: "card-grid",
                for test in tests {
                    div {
                        key: "{test.id}",
                        class: "card test-card",
                        span { class: "tag", "{test.category}" }
                        h3 { "{test.title}" }
                        p {
                            class: "muted",
                            Icon { icon: FaClock, width: 14, height: 14 }
                            " {test.duration} minutes"
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

    fn attempt(id: &str, score: u32, total: u32) -> TestAttempt {
        TestAttempt {
            id: id.into(),
            test_id: "t1".into(),
            score,
            total,
            attempted_at: None,
            test: None,
        }
    }

    #[test]
    fn test_recent_attempts_caps_at_three() {
        let attempts: Vec<_> = (0..5).map(|i| attempt(&format!("a{i}"), i, 10)).collect();
        let ids: Vec<_> = recent_attempts(&attempts).iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["a0", "a1", "a2"]);
        assert_eq!(recent_attempts(&attempts[..1]).len(), 1);
        assert!(recent_attempts(&[]).is_empty());
    }

    #[test]
    fn test_attempt_percentage_is_rounded() {
        assert_eq!(attempt("a", 2, 3).percentage(), Some(67));
        assert_eq!(attempt("a", 0, 0).percentage(), None);
    }
}
