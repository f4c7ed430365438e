//! Repository models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Repository belonging to a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Repository ID
    pub id: i64,

    /// Repository name
    pub name: String,

    /// Owning project
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Clone or web URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for registering a repository under a project
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRepositoryRequest {
    pub project_id: i64,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl CreateRepositoryRequest {
    pub fn new(project_id: i64, name: impl Into<String>) -> Self {
        Self {
            project_id,
            name: name.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_repository_decodes_service_document() {
        let doc = json!({
            "id": 12,
            "name": "api-gateway",
            "project_id": 4,
            "external_id": "gh-991",
            "url": "https://git.example.com/acme/api-gateway",
            "created_at": "2025-01-10T08:00:00",
            "updated_at": "2025-01-12T09:30:00"
        });
        let repo: Repository = serde_json::from_value(doc.clone()).unwrap();

        assert_eq!(repo.project_id, Some(4));
        assert!(repo.extra.is_empty());
        assert_eq!(serde_json::to_value(&repo).unwrap(), doc);
    }

    #[test]
    fn test_repository_requires_identity() {
        let missing_id = json!({"name": "orphan"});
        assert!(serde_json::from_value::<Repository>(missing_id).is_err());
    }

    #[test]
    fn test_create_request_body() {
        let mut request = CreateRepositoryRequest::new(4, "web");
        request.url = Some("https://git.example.com/acme/web".to_string());

        let body = serde_json::to_value(request).unwrap();
        assert_eq!(
            body,
            json!({"project_id": 4, "name": "web", "url": "https://git.example.com/acme/web"})
        );
    }
}
