//! Demo data commands

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat, confirm};
use crate::output;
use komet::Result;
use komet::client::MockDataApi;

/// Generate demo data, globally or for a single project
pub async fn generate(opts: &GlobalOptions, project: Option<i64>, team: Option<i64>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let summary = match project {
        Some(project_id) => {
            ctx.client
                .generate_project_mock_data(project_id, team)
                .await?
        }
        None => ctx.client.generate_mock_data().await?,
    };

    let mut line = summary
        .message
        .clone()
        .unwrap_or_else(|| "Demo data generated".to_string());
    if let (Some(prs), Some(issues)) = (summary.pull_requests_count, summary.issues_count) {
        line.push_str(&format!(" ({} pull requests, {} issues)", prs, issues));
    }

    output::print_done(&summary, ctx.format, &line)?;
    if let (OutputFormat::Table, Some(note)) = (ctx.format, summary.note.as_deref()) {
        eprintln!("  {}", note);
    }

    Ok(())
}

/// Remove all generated data after confirmation
pub async fn clear(opts: &GlobalOptions, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !confirm("Remove all generated demo data?", yes)? {
        eprintln!("Cancelled.");
        return Ok(());
    }

    let ack = ctx.client.clear_mock_data().await?;

    let summary = ack
        .message
        .clone()
        .unwrap_or_else(|| "Demo data cleared".to_string());
    output::print_done(&ack, ctx.format, &summary)
}
