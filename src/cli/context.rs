//! Command execution context
//!
//! Loads configuration, applies the base address override and builds the
//! API client shared by every service-backed command.

use log::debug;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use komet::{Config, KometClient, Result};

/// Context for command execution containing the client and output format.
pub struct CommandContext {
    /// API client bound to the configured base address
    pub client: KometClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns an error if an explicit config file is missing or unreadable,
    /// or if the resolved base address is not an http(s) URL.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_at(opts.config_ref())?.with_api_base(opts.api_base_ref());
        let client = KometClient::from_config(&config)?;

        debug!(
            "Using metrics service at {} (timeout {}s)",
            client.base_url(),
            config.timeout_secs
        );

        Ok(Self {
            client,
            format: opts.format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn opts(config: Option<String>, api_base: Option<&str>) -> GlobalOptions {
        GlobalOptions {
            format: OutputFormat::Json,
            config,
            api_base: api_base.map(String::from),
        }
    }

    #[test]
    fn test_override_wins_over_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api_base: http://from-file:8000/api/v1\n").unwrap();

        let ctx = CommandContext::new(&opts(
            Some(path.to_string_lossy().into_owned()),
            Some("http://override:9000/api/v1/"),
        ))
        .unwrap();

        assert_eq!(ctx.client.base_url(), "http://override:9000/api/v1");
        assert_eq!(ctx.format, OutputFormat::Json);
    }

    #[test]
    fn test_config_file_base_used_without_override() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api_base: http://from-file:8000/api/v1\n").unwrap();

        let ctx =
            CommandContext::new(&opts(Some(path.to_string_lossy().into_owned()), None)).unwrap();

        assert_eq!(ctx.client.base_url(), "http://from-file:8000/api/v1");
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.yaml");

        let result = CommandContext::new(&opts(Some(path.to_string_lossy().into_owned()), None));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_base_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api_base: localhost:8000\n").unwrap();

        let result = CommandContext::new(&opts(Some(path.to_string_lossy().into_owned()), None));
        assert!(result.is_err());
    }
}
