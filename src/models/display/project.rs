//! Project display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{MISSING, format_opt_timestamp, or_missing, truncate_string};
use komet::client::models::Project;

/// Project display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ProjectDisplay {
    #[tabled(rename = "PROJECT ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    /// Identifier in the upstream tracker
    #[tabled(rename = "EXTERNAL ID")]
    pub external_id: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "CREATED")]
    pub created_at: String,
}

impl From<&Project> for ProjectDisplay {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            external_id: or_missing(project.external_id.as_deref()),
            description: project
                .description
                .as_deref()
                .map(|d| truncate_string(d, 40))
                .unwrap_or_else(|| MISSING.to_string()),
            created_at: format_opt_timestamp(project.created_at.as_deref()),
        }
    }
}

impl From<Project> for ProjectDisplay {
    fn from(project: Project) -> Self {
        ProjectDisplay::from(&project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_display_from_full_payload() {
        let project: Project = serde_json::from_value(json!({
            "id": 3,
            "name": "Billing",
            "external_id": "BILL",
            "description": "Invoices and payment runs",
            "created_at": "2025-01-10T08:30:00.000001"
        }))
        .unwrap();

        let display = ProjectDisplay::from(&project);
        assert_eq!(display.id, 3);
        assert_eq!(display.external_id, "BILL");
        assert_eq!(display.created_at, "2025-01-10 08:30");
    }

    #[test]
    fn test_project_display_placeholders() {
        let project: Project = serde_json::from_value(json!({"id": 1, "name": "Core"})).unwrap();

        let display = ProjectDisplay::from(project);
        assert_eq!(display.external_id, "--");
        assert_eq!(display.description, "--");
        assert_eq!(display.created_at, "--");
    }
}
