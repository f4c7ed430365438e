//! Komet CLI - engineering-effectiveness metrics from the terminal

use clap::Parser;

mod cli;
mod models;
mod output;

use cli::args::GlobalOptions;
use cli::{
    Cli, Commands, MetricsCommands, MockCommands, ProjectCommands, RepoCommands, TeamCommands,
};
use komet::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "warn,komet=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("komet version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Project(cmd) => match cmd {
            ProjectCommands::List => cli::project::list(&opts).await,
            ProjectCommands::Get { project_id } => cli::project::get(&opts, project_id).await,
            ProjectCommands::Create {
                name,
                external_id,
                description,
            } => cli::project::create(&opts, &name, external_id, description).await,
            ProjectCommands::Delete { project_id, yes } => {
                cli::project::delete(&opts, project_id, yes).await
            }
        },
        Commands::Repo(cmd) => match cmd {
            RepoCommands::List { project } => cli::repo::list(&opts, project).await,
            RepoCommands::Create {
                project,
                name,
                external_id,
                url,
                description,
            } => cli::repo::create(&opts, project, &name, external_id, url, description).await,
            RepoCommands::Sync { repository_id } => cli::repo::sync(&opts, repository_id).await,
        },
        Commands::Team(cmd) => match cmd {
            TeamCommands::List => cli::team::list(&opts).await,
            TeamCommands::Get { team_id } => cli::team::get(&opts, team_id).await,
            TeamCommands::Create { name, description } => {
                cli::team::create(&opts, &name, description).await
            }
            TeamCommands::Delete { team_id, yes } => cli::team::delete(&opts, team_id, yes).await,
            TeamCommands::Members { team_id } => cli::team::members(&opts, team_id).await,
            TeamCommands::AddMember {
                team,
                email,
                name,
                role,
            } => cli::team::add_member(&opts, team, &email, &name, role).await,
            TeamCommands::RemoveMember { member_id, yes } => {
                cli::team::remove_member(&opts, member_id, yes).await
            }
        },
        Commands::Metrics(cmd) => match cmd {
            MetricsCommands::Project {
                project_id,
                metric,
                period,
            } => cli::metrics::project(&opts, project_id, metric, period).await,
            MetricsCommands::Repo {
                repository_id,
                metric,
                period,
            } => cli::metrics::repository(&opts, repository_id, metric, period).await,
            MetricsCommands::Team {
                team_id,
                metric,
                period,
            } => cli::metrics::team(&opts, team_id, metric, period).await,
            MetricsCommands::Attention {
                project_id,
                min_hours,
                limit,
            } => cli::metrics::attention(&opts, project_id, min_hours, limit).await,
        },
        Commands::Mock(cmd) => match cmd {
            MockCommands::Generate { project, team } => {
                cli::mock::generate(&opts, project, team).await
            }
            MockCommands::Clear { yes } => cli::mock::clear(&opts, yes).await,
        },
    }
}
