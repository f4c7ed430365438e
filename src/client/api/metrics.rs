//! Metrics API trait for analytics reports

use async_trait::async_trait;

use crate::client::models::{
    ActiveContributors, BottleneckReport, CommitsPerPerson, EmployeeCareReport,
    PrsNeedingAttention, ProjectEffectiveness, RepositoryEffectiveness, TeamEffectiveness,
    TechnicalDebtReport,
};
use crate::error::Result;

/// Analytics reports computed by the metrics service
///
/// `period_days` is the trailing window; `None` sends the 30-day default.
/// Every report read returns its failure to the caller.
#[async_trait]
pub trait MetricsApi: Send + Sync {
    // ========================================================================
    // Project scope
    // ========================================================================

    /// Effectiveness aggregated over the project's repositories
    async fn project_effectiveness(
        &self,
        project_id: i64,
        period_days: Option<u32>,
    ) -> Result<ProjectEffectiveness>;

    async fn project_technical_debt(
        &self,
        project_id: i64,
        period_days: Option<u32>,
    ) -> Result<TechnicalDebtReport>;

    async fn project_bottlenecks(
        &self,
        project_id: i64,
        period_days: Option<u32>,
    ) -> Result<BottleneckReport>;

    async fn project_employee_care(
        &self,
        project_id: i64,
        period_days: Option<u32>,
    ) -> Result<EmployeeCareReport>;

    /// Pull requests sorted by time in review.
    ///
    /// `min_hours` defaults to 0 (every open PR) and `limit` to 5.
    async fn prs_needing_attention(
        &self,
        project_id: i64,
        min_hours: Option<f64>,
        limit: Option<u32>,
    ) -> Result<PrsNeedingAttention>;

    async fn active_contributors(
        &self,
        project_id: i64,
        period_days: Option<u32>,
    ) -> Result<ActiveContributors>;

    async fn commits_per_person(
        &self,
        project_id: i64,
        period_days: Option<u32>,
    ) -> Result<CommitsPerPerson>;

    // ========================================================================
    // Repository scope
    // ========================================================================

    async fn repository_effectiveness(
        &self,
        repository_id: i64,
        period_days: Option<u32>,
    ) -> Result<RepositoryEffectiveness>;

    async fn repository_technical_debt(
        &self,
        repository_id: i64,
        period_days: Option<u32>,
    ) -> Result<TechnicalDebtReport>;

    async fn repository_bottlenecks(
        &self,
        repository_id: i64,
        period_days: Option<u32>,
    ) -> Result<BottleneckReport>;

    async fn repository_employee_care(
        &self,
        repository_id: i64,
        period_days: Option<u32>,
    ) -> Result<EmployeeCareReport>;

    // ========================================================================
    // Team scope
    // ========================================================================

    async fn team_effectiveness(
        &self,
        team_id: i64,
        period_days: Option<u32>,
    ) -> Result<TeamEffectiveness>;

    async fn team_technical_debt(
        &self,
        team_id: i64,
        period_days: Option<u32>,
    ) -> Result<TechnicalDebtReport>;

    async fn team_bottlenecks(
        &self,
        team_id: i64,
        period_days: Option<u32>,
    ) -> Result<BottleneckReport>;
}
