//! Team and team membership commands

use crate::cli::args::GlobalOptions;
use crate::cli::handlers::run_list_command;
use crate::cli::{CommandContext, confirm};
use crate::models::{MemberDisplay, TeamDisplay};
use crate::output;
use komet::Result;
use komet::client::ResourceApi;
use komet::client::models::{AddTeamMemberRequest, CreateTeamRequest, Team, TeamMember};

/// Run the team list command
pub async fn list(opts: &GlobalOptions) -> Result<()> {
    run_list_command::<Team, TeamDisplay, _, _>(opts, "teams", |client| async move {
        client.list_teams().await
    })
    .await
}

/// Show one team
pub async fn get(opts: &GlobalOptions, team_id: i64) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let team = ctx.client.get_team(team_id).await?;
    output::print_record::<Team, TeamDisplay>(&team, ctx.format)
}

/// Create a team
pub async fn create(opts: &GlobalOptions, name: &str, description: Option<String>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let mut request = CreateTeamRequest::new(name);
    request.description = description;

    let team = ctx.client.create_team(&request).await?;

    output::print_done(
        &team,
        ctx.format,
        &format!("Team \"{}\" created (ID: {})", team.name, team.id),
    )
}

/// Delete a team after confirmation
pub async fn delete(opts: &GlobalOptions, team_id: i64, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !confirm(&format!("Delete team {}?", team_id), yes)? {
        eprintln!("Cancelled.");
        return Ok(());
    }

    let ack = ctx.client.delete_team(team_id).await?;

    let summary = ack
        .message
        .clone()
        .unwrap_or_else(|| format!("Team {} deleted", team_id));
    output::print_done(&ack, ctx.format, &summary)
}

/// List the members of a team
pub async fn members(opts: &GlobalOptions, team_id: i64) -> Result<()> {
    run_list_command::<TeamMember, MemberDisplay, _, _>(
        opts,
        "team members",
        |client| async move { client.list_team_members(team_id).await },
    )
    .await
}

/// Add a member to a team
pub async fn add_member(
    opts: &GlobalOptions,
    team_id: i64,
    email: &str,
    name: &str,
    role: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    let request = AddTeamMemberRequest {
        team_id,
        email: email.to_string(),
        name: name.to_string(),
        role,
    };

    let member = ctx.client.add_team_member(&request).await?;

    let summary = match member.id {
        Some(id) => format!("Added {} to team {} (member ID: {})", email, team_id, id),
        None => format!("Added {} to team {}", email, team_id),
    };
    output::print_done(&member, ctx.format, &summary)
}

/// Remove a team membership after confirmation
pub async fn remove_member(opts: &GlobalOptions, member_id: i64, yes: bool) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    if !confirm(&format!("Remove team member {}?", member_id), yes)? {
        eprintln!("Cancelled.");
        return Ok(());
    }

    let ack = ctx.client.remove_team_member(member_id).await?;

    let summary = ack
        .message
        .clone()
        .unwrap_or_else(|| format!("Team member {} removed", member_id));
    output::print_done(&ack, ctx.format, &summary)
}
