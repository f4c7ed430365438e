//! Common CLI types shared across commands

use clap::Args;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per entry (default)
    #[default]
    Table,
    /// JSON format - raw service payload for scripts
    Json,
}

/// Reporting window shared by the metrics commands.
#[derive(Args, Debug, Default, Clone, Copy)]
pub struct PeriodArgs {
    /// Trailing window in days [default: 30]
    #[arg(long, short = 'd', value_parser = clap::value_parser!(u32).range(1..=365))]
    pub period_days: Option<u32>,
}
