//! Project management commands

use log::debug;

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, OutputFormat, confirm};
use crate::models::ProjectDisplay;
use crate::output;
use komet::Result;
use komet::client::ResourceApi;
use komet::client::models::{CreateProjectRequest, Project};

/// Run the project list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<Project, ProjectDisplay, _, _>(opts, "projects", |client| async move {
        client.list_projects().await
    })
    .await
}

/// Show one project
pub async fn get(opts: &GlobalOptions, project_id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let project = ctx.client.get_project(project_id).await?;
    output::print_record::<Project, ProjectDisplay>(&project, ctx.format)
}

/// Create a project
pub async fn create(
    opts: &GlobalOptions,
    name: &str,
    external_id: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let mut request = CreateProjectRequest::new(name);
    if let Some(external_id) = external_id {
        request = request.external_id(external_id);
    }
    if let Some(description) = description {
        request = request.description(description);
    }

    debug!("Creating project {}", name);
    let project = ctx.client.create_project(&request).await?;

    output::print_done(
        &project,
        ctx.format,
        &format!("Project \"{}\" created (ID: {})", project.name, project.id),
    )?;
    if ctx.format == OutputFormat::Table {
        eprintln!(
            "→ Register a repository: komet repo create --project {} --name <NAME>",
            project.id
        );
    }

    Ok(())
}

/// Delete a project after confirmation
pub async fn delete(opts: &GlobalOptions, project_id: i64, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !confirm(
        &format!("Delete project {} and all of its repositories?", project_id),
        yes,
    )? {
        eprintln!("Cancelled.");
        return Ok(());
    }

    let ack = ctx.client.delete_project(project_id).await?;

    let summary = ack
        .message
        .clone()
        .unwrap_or_else(|| format!("Project {} deleted", project_id));
    output::print_done(&ack, ctx.format, &summary)
}
