//! Repository display model

use serde::Serialize;
use tabled::Tabled;

use super::common::{format_opt_timestamp, or_missing};
use komet::client::models::Repository;

/// Repository display model for table output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct RepoDisplay {
    #[tabled(rename = "REPO ID")]
    pub id: i64,

    #[tabled(rename = "PROJECT")]
    pub project_id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "URL")]
    pub url: String,

    /// Last time the service touched the repository (sync or edit)
    #[tabled(rename = "UPDATED")]
    pub updated_at: String,
}

impl From<&Repository> for RepoDisplay {
    fn from(repo: &Repository) -> Self {
        let updated = repo.updated_at.as_deref().or(repo.created_at.as_deref());

        Self {
            id: repo.id,
            project_id: or_missing(repo.project_id),
            name: repo.name.clone(),
            url: or_missing(repo.url.as_deref()),
            updated_at: format_opt_timestamp(updated),
        }
    }
}

impl From<Repository> for RepoDisplay {
    fn from(repo: Repository) -> Self {
        RepoDisplay::from(&repo)
    }
}
