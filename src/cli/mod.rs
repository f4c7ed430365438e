//! CLI command definitions and handlers

use clap::{Parser, Subcommand, ValueEnum};

pub mod args;
pub mod context;
pub mod handlers;
pub mod init;
pub mod metrics;
pub mod mock;
pub mod project;
pub mod repo;
pub mod status;
pub mod team;

pub use args::{OutputFormat, PeriodArgs};
pub use context::CommandContext;

/// Komet CLI - engineering-effectiveness metrics from the terminal
#[derive(Parser, Debug)]
#[command(name = "komet")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "KOMET_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "KOMET_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Metrics service base address (e.g. http://localhost:8000/api/v1)
    #[arg(long, global = true, env = "API_BASE_URL")]
    pub api_base: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "KOMET_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize Komet configuration
    Init,

    /// Show configuration status
    Status,

    /// Display version information
    Version,

    /// Manage projects
    #[command(subcommand)]
    Project(ProjectCommands),

    /// Manage repositories
    #[command(subcommand)]
    Repo(RepoCommands),

    /// Manage teams and their members
    #[command(subcommand)]
    Team(TeamCommands),

    /// Show analytics reports
    #[command(subcommand)]
    Metrics(MetricsCommands),

    /// Generate or clear demo data
    #[command(subcommand)]
    Mock(MockCommands),
}

/// Project management subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// List all projects
    #[command(visible_alias = "ls")]
    List,

    /// Show one project
    #[command(visible_alias = "g")]
    Get {
        /// Project ID
        project_id: i64,
    },

    /// Create a project
    #[command(after_help = "EXAMPLES:\n  \
            komet project create --name Billing\n  \
            komet project create --name Billing --external-id BILL --description \"Invoices\"")]
    Create {
        /// Project name
        #[arg(long, short = 'n')]
        name: String,
        /// Identifier in the upstream tracker
        #[arg(long)]
        external_id: Option<String>,
        /// Free-form description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a project
    Delete {
        /// Project ID
        project_id: i64,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Repository management subcommands
#[derive(Subcommand, Debug)]
pub enum RepoCommands {
    /// List repositories, optionally only those of one project
    #[command(visible_alias = "ls")]
    List {
        /// Only repositories belonging to this project
        #[arg(long, short = 'p')]
        project: Option<i64>,
    },

    /// Register a repository under a project
    Create {
        /// Owning project ID
        #[arg(long, short = 'p')]
        project: i64,
        /// Repository name
        #[arg(long, short = 'n')]
        name: String,
        /// Identifier in the upstream forge
        #[arg(long)]
        external_id: Option<String>,
        /// Clone or browse URL
        #[arg(long)]
        url: Option<String>,
        /// Free-form description
        #[arg(long)]
        description: Option<String>,
    },

    /// Ask the service to re-sync a repository
    Sync {
        /// Repository ID
        repository_id: i64,
    },
}

/// Team management subcommands
#[derive(Subcommand, Debug)]
pub enum TeamCommands {
    /// List all teams
    #[command(visible_alias = "ls")]
    List,

    /// Show one team
    #[command(visible_alias = "g")]
    Get {
        /// Team ID
        team_id: i64,
    },

    /// Create a team
    Create {
        /// Team name
        #[arg(long, short = 'n')]
        name: String,
        /// Free-form description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a team
    Delete {
        /// Team ID
        team_id: i64,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// List the members of a team
    Members {
        /// Team ID
        team_id: i64,
    },

    /// Add a member to a team
    #[command(after_help = "EXAMPLES:\n  \
            komet team add-member --team 2 --email ana@example.com --name \"Ana Lima\"\n  \
            komet team add-member --team 2 --email ana@example.com --name Ana --role lead")]
    AddMember {
        /// Team ID
        #[arg(long, short = 't')]
        team: i64,
        /// Member email
        #[arg(long, short = 'e')]
        email: String,
        /// Member display name
        #[arg(long, short = 'n')]
        name: String,
        /// Role within the team
        #[arg(long, short = 'r')]
        role: Option<String>,
    },

    /// Remove a member from a team
    RemoveMember {
        /// Membership ID (see `komet team members`)
        member_id: i64,
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Reports available for a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ProjectMetric {
    Effectiveness,
    TechnicalDebt,
    Bottlenecks,
    EmployeeCare,
    ActiveContributors,
    CommitsPerPerson,
}

/// Reports available for a repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RepositoryMetric {
    Effectiveness,
    TechnicalDebt,
    Bottlenecks,
    EmployeeCare,
}

/// Reports available for a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TeamMetric {
    Effectiveness,
    TechnicalDebt,
    Bottlenecks,
}

/// Analytics report subcommands
#[derive(Subcommand, Debug)]
pub enum MetricsCommands {
    /// Project-level report
    #[command(after_help = "EXAMPLES:\n  \
            komet metrics project 3 effectiveness\n  \
            komet metrics project 3 commits-per-person --period-days 7\n  \
            komet metrics project 3 bottlenecks --format json")]
    Project {
        /// Project ID
        project_id: i64,
        /// Report to show
        #[arg(value_enum)]
        metric: ProjectMetric,
        #[command(flatten)]
        period: PeriodArgs,
    },

    /// Repository-level report
    Repo {
        /// Repository ID
        repository_id: i64,
        /// Report to show
        #[arg(value_enum)]
        metric: RepositoryMetric,
        #[command(flatten)]
        period: PeriodArgs,
    },

    /// Team-level report
    Team {
        /// Team ID
        team_id: i64,
        /// Report to show
        #[arg(value_enum)]
        metric: TeamMetric,
        #[command(flatten)]
        period: PeriodArgs,
    },

    /// Pull requests waiting longest for review
    Attention {
        /// Project ID
        project_id: i64,
        /// Only PRs in review at least this many hours [default: 0]
        #[arg(long)]
        min_hours: Option<f64>,
        /// Maximum PRs to return [default: 5]
        #[arg(long, short = 'n', value_parser = clap::value_parser!(u32).range(1..=20))]
        limit: Option<u32>,
    },
}

/// Demo data subcommands
#[derive(Subcommand, Debug)]
pub enum MockCommands {
    /// Generate demo data, globally or for one project
    #[command(after_help = "EXAMPLES:\n  \
            komet mock generate\n  \
            komet mock generate --project 3 --team 2")]
    Generate {
        /// Generate activity for this project only
        #[arg(long, short = 'p')]
        project: Option<i64>,
        /// Attribute the generated activity to this team
        #[arg(long, short = 't', requires = "project")]
        team: Option<i64>,
    },

    /// Remove all generated data
    Clear {
        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Ask before a destructive action unless `--yes` was given
pub fn confirm(prompt: &str, yes: bool) -> komet::Result<bool> {
    if yes {
        return Ok(true);
    }

    let confirmed = dialoguer::Confirm::with_theme(&dialoguer::theme::ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()?;

    Ok(confirmed)
}
