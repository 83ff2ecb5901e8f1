use serde::{Deserialize, Serialize};

use super::{display_date, Drive};

/// Status of an application. Transitions happen on the backend only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicationStatus {
    Applied,
    Shortlisted,
    Selected,
    Rejected,
    /// A status this client does not know about yet.
    Other(String),
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Applied => "applied",
            Self::Shortlisted => "shortlisted",
            Self::Selected => "selected",
            Self::Rejected => "rejected",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ApplicationStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "applied" => Self::Applied,
            "shortlisted" => Self::Shortlisted,
            "selected" => Self::Selected,
            "rejected" => Self::Rejected,
            _ => Self::Other(s),
        }
    }
}

impl From<ApplicationStatus> for String {
    fn from(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// An application by the current user, joined with its drive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Application {
    pub id: String,
    pub drive_id: String,
    pub status: ApplicationStatus,
    pub applied_at: String,
    /// The drive is absent when it was deleted after the application was made.
    #[serde(default)]
    pub drive: Option<Drive>,
}

impl Application {
    pub fn applied_label(&self) -> String {
        display_date(&self.applied_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accepts_backend_extensions() {
        let app: Application = serde_json::from_str(
            r#"{"id": "a1", "drive_id": "d1", "status": "on_hold", "applied_at": "2025-02-01T10:00:00+00:00", "drive": null}"#,
        )
        .unwrap();
        assert_eq!(app.status, ApplicationStatus::Other("on_hold".into()));
        assert_eq!(app.status.as_str(), "on_hold");
        assert_eq!(app.applied_label(), "01 Feb 2025");

        let known: ApplicationStatus = serde_json::from_str(r#""shortlisted""#).unwrap();
        assert_eq!(known, ApplicationStatus::Shortlisted);
        assert_eq!(serde_json::to_string(&known).unwrap(), r#""shortlisted""#);
    }
}
