use serde::{Deserialize, Serialize};

/// Aggregate counts for the admin view, computed by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AdminStats {
    pub total_students: u64,
    pub total_drives: u64,
    pub total_applications: u64,
    pub placed_students: u64,
    #[serde(default)]
    pub status_breakdown: Vec<StatusCount>,
}

/// Number of applications in one status.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusCount {
    /// Grouping key of the backend aggregation; `None` for applications without a status.
    #[serde(rename = "_id", default)]
    pub status: Option<String>,
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_stats_with_breakdown() {
        let stats: AdminStats = serde_json::from_str(
            r#"{
                "total_students": 120,
                "total_drives": 8,
                "total_applications": 300,
                "placed_students": 41,
                "status_breakdown": [{"_id": "applied", "count": 200}, {"_id": null, "count": 2}]
            }"#,
        )
        .unwrap();
        assert_eq!(stats.placed_students, 41);
        assert_eq!(stats.status_breakdown[0].status.as_deref(), Some("applied"));
        assert_eq!(stats.status_breakdown[1].status, None);
    }
}
