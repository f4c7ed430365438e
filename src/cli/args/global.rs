//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// The base address resolves as: `--api-base` flag > `API_BASE_URL` > config
/// file > built-in default. This struct captures the flag/env layer; the rest
/// is applied in `CommandContext`.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Output format (table, json)
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.komet/config.yaml)
    pub config: Option<String>,

    /// Base address override
    pub api_base: Option<String>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            config: cli.config.clone(),
            api_base: cli.api_base.clone(),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Get base address override as `Option<&str>`.
    pub fn api_base_ref(&self) -> Option<&str> {
        self.api_base.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_global_options_from_cli() {
        let cli = Cli::parse_from([
            "komet",
            "--format",
            "json",
            "--config",
            "/tmp/komet.yaml",
            "--api-base",
            "http://metrics.internal:8000/api/v1",
            "status",
        ]);

        let opts = GlobalOptions::from_cli(&cli);
        assert_eq!(opts.format, OutputFormat::Json);
        assert_eq!(opts.config_ref(), Some("/tmp/komet.yaml"));
        assert_eq!(opts.api_base_ref(), Some("http://metrics.internal:8000/api/v1"));
    }

    #[test]
    fn test_global_options_none_accessors() {
        let opts = GlobalOptions {
            format: OutputFormat::Table,
            config: None,
            api_base: None,
        };

        assert_eq!(opts.config_ref(), None);
        assert_eq!(opts.api_base_ref(), None);
    }
}
