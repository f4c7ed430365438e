//! Display model implementations for table output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names.

mod common;
mod project;
mod repo;
mod report;
mod team;

pub use project::ProjectDisplay;
pub use repo::RepoDisplay;
pub use report::{ContributorDisplay, PrDisplay, report_rows};
pub use team::{MemberDisplay, TeamDisplay};
