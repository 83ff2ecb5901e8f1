use serde::{Deserialize, Serialize};

/// Learning resource linking to external material.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    /// "pdf", "video" or "link".
    #[serde(default)]
    pub r#type: String,
    pub url: String,
}

/// Announcement shown in the dashboard ticker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Announcement {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub priority: Option<String>,
}
