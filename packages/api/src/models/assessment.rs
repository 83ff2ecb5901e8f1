use serde::{Deserialize, Serialize};

/// Mock test summary. Questions are never sent with the listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MockTest {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    /// Duration in minutes.
    #[serde(default)]
    pub duration: u32,
}

/// A past attempt of the current user, joined with its test.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestAttempt {
    pub id: String,
    pub test_id: String,
    pub score: u32,
    pub total: u32,
    #[serde(default)]
    pub attempted_at: Option<String>,
    #[serde(default)]
    pub test: Option<MockTest>,
}

impl TestAttempt {
    /// Score as a whole percentage, or `None` for a test without questions.
    pub fn percentage(&self) -> Option<u32> {
        if self.total == 0 {
            return None;
        }
        Some(((self.score as f64 / self.total as f64) * 100.0).round() as u32)
    }

    pub fn title(&self) -> &str {
        self.test.as_ref().map(|t| t.title.as_str()).unwrap_or("Untitled test")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempt(score: u32, total: u32) -> TestAttempt {
        TestAttempt {
            id: "a".into(),
            test_id: "t".into(),
            score,
            total,
            attempted_at: None,
            test: None,
        }
    }

    #[test]
    fn test_percentage_rounds_and_guards_zero_total() {
        assert_eq!(attempt(7, 10).percentage(), Some(70));
        assert_eq!(attempt(2, 3).percentage(), Some(67));
        assert_eq!(attempt(0, 0).percentage(), None);
        assert_eq!(attempt(0, 0).title(), "Untitled test");
    }
}
