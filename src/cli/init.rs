//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use komet::{Config, Result};

/// Run the init command
///
/// Writes the config file. The base address comes from `--api-base` when
/// given, otherwise it is prompted for with the current value as default.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}", "Welcome to Komet!".bold().green());
    println!("Let's point the CLI at your metrics service.\n");

    let path = Config::resolve_path(opts.config_ref())?;
    let existing = if path.exists() {
        Config::load_from(path.clone())?
    } else {
        Config::default()
    };

    let api_base = match opts.api_base_ref() {
        Some(base) => base.to_string(),
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Metrics service base address")
            .default(existing.api_base.clone())
            .interact_text()?,
    };

    let config = existing.with_api_base(Some(api_base.trim()));
    config.validate()?;
    config.save_to(path.clone())?;

    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        path.display()
    );
    println!("  API base: {}", config.api_base.bold());

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "komet status".cyan());
    println!("  {} - List projects", "komet project list".cyan());

    Ok(())
}
