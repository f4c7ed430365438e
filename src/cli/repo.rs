//! Repository management commands

use crate::cli::CommandContext;
use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::models::RepoDisplay;
use crate::output;
use komet::Result;
use komet::client::ResourceApi;
use komet::client::models::{CreateRepositoryRequest, Repository};

/// Run the repo list command, scoped to one project when given
pub async fn list(opts: &GlobalOptions, project: Option<i64>) -> Result<()> {
    match project {
        Some(project_id) => {
            run_list_command::<Repository, RepoDisplay, _, _>(
                opts,
                "project repositories",
                |client| async move { client.list_project_repositories(project_id).await },
            )
            .await
        }
        None => {
            run_list_command::<Repository, RepoDisplay, _, _>(
                opts,
                "repositories",
                |client| async move { client.list_repositories().await },
            )
            .await
        }
    }
}

/// Register a repository under a project
pub async fn create(
    opts: &GlobalOptions,
    project_id: i64,
    name: &str,
    external_id: Option<String>,
    url: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let mut request = CreateRepositoryRequest::new(project_id, name);
    request.external_id = external_id;
    request.url = url;
    request.description = description;

    let repo = ctx.client.create_repository(&request).await?;

    output::print_done(
        &repo,
        ctx.format,
        &format!("Repository \"{}\" created (ID: {})", repo.name, repo.id),
    )
}

/// Trigger a repository sync
pub async fn sync(opts: &GlobalOptions, repository_id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let ack = ctx.client.sync_repository(repository_id).await?;

    let summary = ack
        .message
        .clone()
        .unwrap_or_else(|| format!("Sync started for repository {}", repository_id));
    output::print_done(&ack, ctx.format, &summary)
}
