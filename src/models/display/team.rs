//! Team and team member display models

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_opt_timestamp, or_missing};
use komet::client::models::{Team, TeamMember};

/// Team display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct TeamDisplay {
    #[tabled(rename = "TEAM ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,

    #[tabled(rename = "CREATED")]
    pub created_at: String,
}

impl From<&Team> for TeamDisplay {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id,
            name: team.name.clone(),
            description: or_missing(team.description.as_deref()),
            created_at: format_opt_timestamp(team.created_at.as_deref()),
        }
    }
}

impl From<Team> for TeamDisplay {
    fn from(team: Team) -> Self {
        TeamDisplay::from(&team)
    }
}

/// Team member display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MemberDisplay {
    /// Membership ID (what `team remove-member` takes)
    #[tabled(rename = "MEMBER ID")]
    pub id: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "ROLE")]
    pub role: String,

    #[tabled(rename = "JOINED")]
    pub joined_at: String,
}

impl From<&TeamMember> for MemberDisplay {
    fn from(member: &TeamMember) -> Self {
        Self {
            id: or_missing(member.id),
            email: or_missing(member.email.as_deref()),
            name: or_missing(member.name.as_deref()),
            role: or_missing(member.role.as_deref()),
            joined_at: format_opt_timestamp(member.joined_at.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_display() {
        let team: Team = serde_json::from_value(json!({
            "id": 2,
            "name": "Platform",
            "description": null
        }))
        .unwrap();

        let display = TeamDisplay::from(team);
        assert_eq!(display.id, 2);
        assert_eq!(display.description, "--");
    }

    #[test]
    fn test_member_display_from_sparse_member() {
        let member: TeamMember = serde_json::from_value(json!({
            "id": 40,
            "email": "ana@example.com",
            "role": "lead"
        }))
        .unwrap();

        let display = MemberDisplay::from(&member);
        assert_eq!(display.id, "40");
        assert_eq!(display.name, "--");
        assert_eq!(display.role, "lead");
    }
}
