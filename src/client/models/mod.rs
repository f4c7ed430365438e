//! Metrics service data models
//!
//! Request and response types for every resource and report the service
//! exposes, organized by resource type.

mod ack;
mod metrics;
mod project;
mod repo;
mod team;

pub use ack::{MockDataSummary, StatusMessage};
pub use metrics::{
    ActiveContributors, BottleneckReport, CommitsPerPerson, ContributorCommitStats,
    EmployeeCareReport, PrNeedingAttention, PrsNeedingAttention, ProjectEffectiveness,
    RepositoryEffectiveness, TeamEffectiveness, TechnicalDebtReport,
};
pub use project::{CreateProjectRequest, Project};
pub use repo::{CreateRepositoryRequest, Repository};
pub use team::{AddTeamMemberRequest, CreateTeamRequest, Team, TeamMember};
