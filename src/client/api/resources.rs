//! Resource API trait for project, repository and team operations

use async_trait::async_trait;

use crate::client::models::{
    AddTeamMemberRequest, CreateProjectRequest, CreateRepositoryRequest, CreateTeamRequest,
    Project, Repository, StatusMessage, Team, TeamMember,
};
use crate::error::Result;

/// Resource CRUD operations for the metrics service
///
/// List reads never fail: when the service errors or cannot be reached they
/// log the failure and return an empty list, so callers cannot tell "nothing
/// on the server" from "request failed". Every other operation returns the
/// failure with a message suitable for showing to a user.
#[async_trait]
pub trait ResourceApi: Send + Sync {
    // ========================================================================
    // Projects
    // ========================================================================

    /// List all projects
    async fn list_projects(&self) -> Vec<Project>;

    /// Get a single project
    async fn get_project(&self, project_id: i64) -> Result<Project>;

    /// Create a project
    async fn create_project(&self, request: &CreateProjectRequest) -> Result<Project>;

    /// Delete a project and everything the service hangs off it
    async fn delete_project(&self, project_id: i64) -> Result<StatusMessage>;

    // ========================================================================
    // Repositories
    // ========================================================================

    /// List repositories across all projects
    async fn list_repositories(&self) -> Vec<Repository>;

    /// List repositories of one project
    async fn list_project_repositories(&self, project_id: i64) -> Vec<Repository>;

    /// Register a repository under a project
    async fn create_repository(&self, request: &CreateRepositoryRequest) -> Result<Repository>;

    /// Ask the service to pull fresh history for a repository
    async fn sync_repository(&self, repository_id: i64) -> Result<StatusMessage>;

    // ========================================================================
    // Teams
    // ========================================================================

    /// List all teams
    async fn list_teams(&self) -> Vec<Team>;

    /// Get a single team
    async fn get_team(&self, team_id: i64) -> Result<Team>;

    /// Create a team
    async fn create_team(&self, request: &CreateTeamRequest) -> Result<Team>;

    /// Delete a team. Members go with it.
    async fn delete_team(&self, team_id: i64) -> Result<StatusMessage>;

    /// List members of a team
    async fn list_team_members(&self, team_id: i64) -> Vec<TeamMember>;

    /// Add a member to the team named in the request
    async fn add_team_member(&self, request: &AddTeamMemberRequest) -> Result<TeamMember>;

    /// Remove a member by member ID
    async fn remove_team_member(&self, member_id: i64) -> Result<StatusMessage>;
}
