use serde::{Deserialize, Serialize};

use super::display_date;

/// A company's placement drive as listed by `GET /drives`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Drive {
    pub id: String,
    pub company_name: String,
    #[serde(default)]
    pub company_logo: Option<String>,
    pub role: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub eligibility: String,
    /// Compensation as free text, e.g. "12 LPA".
    #[serde(default)]
    pub ctc: String,
    #[serde(default)]
    pub location: String,
    /// ISO-8601 timestamp.
    pub application_deadline: String,
    #[serde(default)]
    pub interview_date: Option<String>,
    #[serde(default)]
    pub skills_required: Vec<String>,
    #[serde(default)]
    pub process_steps: Vec<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Drive {
    /// Whether `term` appears in the company name or role, ignoring case.
    ///
    /// An empty term matches every drive.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        term.is_empty()
            || self.company_name.to_lowercase().contains(&term)
            || self.role.to_lowercase().contains(&term)
    }

    /// Deadline formatted for display.
    pub fn deadline_label(&self) -> String {
        display_date(&self.application_deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive(company: &str, role: &str) -> Drive {
        Drive {
            id: format!("{company}-{role}"),
            company_name: company.to_string(),
            company_logo: None,
            role: role.to_string(),
            description: String::new(),
            eligibility: String::new(),
            ctc: "10 LPA".into(),
            location: "Bengaluru".into(),
            application_deadline: "2025-03-01T00:00:00+00:00".into(),
            interview_date: None,
            skills_required: vec![],
            process_steps: vec![],
            status: Some("active".into()),
        }
    }

    #[test]
    fn test_matches_company_or_role_case_insensitive() {
        let d = drive("Infosys", "Systems Engineer");
        assert!(d.matches("INFO"));
        assert!(d.matches("engineer"));
        assert!(d.matches(""));
        assert!(!d.matches("analyst"));
    }

    #[test]
    fn test_decode_minimal_drive() {
        let json = r#"{
            "id": "d1",
            "company_name": "TCS",
            "role": "Developer",
            "application_deadline": "2025-04-15T18:30:00"
        }"#;
        let d: Drive = serde_json::from_str(json).unwrap();
        assert!(d.skills_required.is_empty());
        assert_eq!(d.deadline_label(), "15 Apr 2025");
    }
}
