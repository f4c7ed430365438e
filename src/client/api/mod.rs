//! API trait definitions split by responsibility
//!
//! This module organizes the metrics service surface into focused sub-traits:
//! - [`ResourceApi`] - Project, repository and team CRUD
//! - [`MetricsApi`] - Analytics reports
//! - [`MockDataApi`] - Demo data lifecycle
//!
//! The [`KometApi`](super::KometApi) super-trait combines all three.

mod metrics;
mod mock_data;
mod resources;

pub use metrics::MetricsApi;
pub use mock_data::MockDataApi;
pub use resources::ResourceApi;
