//! Analytics report commands

use log::debug;
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::{
    CommandContext, OutputFormat, PeriodArgs, ProjectMetric, RepositoryMetric, TeamMetric,
};
use crate::models::{ContributorDisplay, PrDisplay};
use crate::output;
use komet::Result;
use komet::client::MetricsApi;

fn print_plain<T: Serialize>(report: &T, format: OutputFormat) -> Result<()> {
    output::print_report(report, format, &[])
}

/// Show a project-level report
pub async fn project(
    opts: &GlobalOptions,
    project_id: i64,
    metric: ProjectMetric,
    period: PeriodArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = &ctx.client;
    let days = period.period_days;

    debug!("Fetching {:?} for project {}", metric, project_id);

    match metric {
        ProjectMetric::Effectiveness => {
            print_plain(&client.project_effectiveness(project_id, days).await?, ctx.format)
        }
        ProjectMetric::TechnicalDebt => {
            print_plain(&client.project_technical_debt(project_id, days).await?, ctx.format)
        }
        ProjectMetric::Bottlenecks => {
            print_plain(&client.project_bottlenecks(project_id, days).await?, ctx.format)
        }
        ProjectMetric::EmployeeCare => {
            print_plain(&client.project_employee_care(project_id, days).await?, ctx.format)
        }
        ProjectMetric::ActiveContributors => {
            print_plain(&client.active_contributors(project_id, days).await?, ctx.format)
        }
        ProjectMetric::CommitsPerPerson => {
            let report = client.commits_per_person(project_id, days).await?;
            output::print_report(&report, ctx.format, &["contributors"])?;

            if ctx.format == OutputFormat::Table {
                let rows: Vec<ContributorDisplay> = report
                    .contributors
                    .iter()
                    .flatten()
                    .map(ContributorDisplay::from)
                    .collect();
                output::print_section("Contributors", &rows);
            }
            Ok(())
        }
    }
}

/// Show a repository-level report
pub async fn repository(
    opts: &GlobalOptions,
    repository_id: i64,
    metric: RepositoryMetric,
    period: PeriodArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = &ctx.client;
    let days = period.period_days;

    debug!("Fetching {:?} for repository {}", metric, repository_id);

    match metric {
        RepositoryMetric::Effectiveness => print_plain(
            &client.repository_effectiveness(repository_id, days).await?,
            ctx.format,
        ),
        RepositoryMetric::TechnicalDebt => print_plain(
            &client.repository_technical_debt(repository_id, days).await?,
            ctx.format,
        ),
        RepositoryMetric::Bottlenecks => print_plain(
            &client.repository_bottlenecks(repository_id, days).await?,
            ctx.format,
        ),
        RepositoryMetric::EmployeeCare => print_plain(
            &client.repository_employee_care(repository_id, days).await?,
            ctx.format,
        ),
    }
}

/// Show a team-level report
pub async fn team(
    opts: &GlobalOptions,
    team_id: i64,
    metric: TeamMetric,
    period: PeriodArgs,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let client = &ctx.client;
    let days = period.period_days;

    debug!("Fetching {:?} for team {}", metric, team_id);

    match metric {
        TeamMetric::Effectiveness => {
            print_plain(&client.team_effectiveness(team_id, days).await?, ctx.format)
        }
        TeamMetric::TechnicalDebt => {
            print_plain(&client.team_technical_debt(team_id, days).await?, ctx.format)
        }
        TeamMetric::Bottlenecks => {
            print_plain(&client.team_bottlenecks(team_id, days).await?, ctx.format)
        }
    }
}

/// Show the pull requests waiting longest for review
pub async fn attention(
    opts: &GlobalOptions,
    project_id: i64,
    min_hours: Option<f64>,
    limit: Option<u32>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let report = ctx
        .client
        .prs_needing_attention(project_id, min_hours, limit)
        .await?;

    if ctx.format == OutputFormat::Json {
        return output::print_report(&report, ctx.format, &[]);
    }

    let rows: Vec<PrDisplay> = report.prs.iter().flatten().map(PrDisplay::from).collect();
    println!("{}", output::table::format_table(&rows));
    if let Some(total) = report.total_count {
        eprintln!("{} of {} pull requests shown", rows.len(), total);
    }

    Ok(())
}
