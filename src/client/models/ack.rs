//! Acknowledgement payloads returned by mutations and mock-data commands

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Plain acknowledgement, e.g. `{"message": "Project deleted successfully"}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Result of a mock data generation run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MockDataSummary {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Project the data was generated into
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_requests_count: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issues_count: Option<u64>,

    /// Hint sent when data already existed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
