//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use komet::{Config, Error, Result};
use komet::error::ConfigError;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "Komet Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;

    let config = match Config::load_at(opts.config_ref()) {
        Ok(config) => {
            if config_path.exists() {
                println!("Config file: {}", config_path.display().to_string().cyan());
            } else {
                println!(
                    "{} No config file at {} (using defaults)",
                    "○".dimmed(),
                    config_path.display()
                );
                println!("  → Run 'komet init' to create one");
            }
            config
        }
        Err(Error::Config(ConfigError::NotFound)) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!("Run {} to create a configuration file.", "komet init".cyan());
            println!();
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    println!();

    let source = if opts.api_base_ref().is_some() {
        "--api-base / API_BASE_URL"
    } else if config_path.exists() {
        "config file"
    } else {
        "default"
    };
    let config = config.with_api_base(opts.api_base_ref());

    match config.validate() {
        Ok(()) => println!(
            "{} API base: {} ({})",
            "✓".green(),
            config.api_base.cyan(),
            source.dimmed()
        ),
        Err(err) => println!("{} {}", "✗".red(), err),
    }
    println!("{} Request timeout: {}s", "○".dimmed(), config.timeout_secs);
    println!();

    Ok(())
}
