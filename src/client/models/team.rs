//! Team and team member models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Team resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Team ID
    pub id: i64,

    /// Team name (unique within the service)
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Member of a team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free-form role, e.g. "developer" or "lead"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Request body for creating a team
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateTeamRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}

/// Request body for adding a member to a team
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddTeamMemberRequest {
    pub team_id: i64,

    pub email: String,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_round_trip() {
        let doc = json!({"id": 2, "name": "Platform", "description": "Infra and tooling"});
        let team: Team = serde_json::from_value(doc.clone()).unwrap();

        assert_eq!(team.name, "Platform");
        assert_eq!(serde_json::to_value(&team).unwrap(), doc);
    }

    #[test]
    fn test_member_tolerates_sparse_payload() {
        let member: TeamMember = serde_json::from_value(json!({"email": "dev@example.com"})).unwrap();
        assert_eq!(member.email.as_deref(), Some("dev@example.com"));
        assert!(member.id.is_none());
    }

    #[test]
    fn test_add_member_body() {
        let request = AddTeamMemberRequest {
            team_id: 2,
            email: "dev@example.com".to_string(),
            name: "Dev One".to_string(),
            role: None,
        };

        assert_eq!(
            serde_json::to_value(request).unwrap(),
            json!({"team_id": 2, "email": "dev@example.com", "name": "Dev One"})
        );
    }
}
