//! Mock data API trait

use async_trait::async_trait;

use crate::client::models::{MockDataSummary, StatusMessage};
use crate::error::Result;

/// Demo data lifecycle on the metrics service
#[async_trait]
pub trait MockDataApi: Send + Sync {
    /// Generate the global demo dataset
    async fn generate_mock_data(&self) -> Result<MockDataSummary>;

    /// Generate demo activity for one project, optionally attributed to a team
    async fn generate_project_mock_data(
        &self,
        project_id: i64,
        team_id: Option<i64>,
    ) -> Result<MockDataSummary>;

    /// Remove all generated data
    async fn clear_mock_data(&self) -> Result<StatusMessage>;
}
