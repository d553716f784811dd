use anyhow::{Context, Result};
use console::{Emoji, style};
use std::fs;

use crate::config::Config;

static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "");
static CHECK: Emoji<'_, '_> = Emoji("✅ ", "[OK] ");
static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");

pub async fn run(force: bool) -> Result<()> {
    println!();
    println!("{}", style(" SenateGraph - Initialization ").bold().reverse());
    println!();

    let config_dir = Config::config_dir()?;
    let config_path = Config::config_path()?;

    // Check if config already exists
    if config_path.exists() && !force {
        println!(
            "{}Configuration already exists at {}",
            WARN,
            style(config_path.display()).cyan()
        );
        println!("  Use {} to overwrite", style("--force").yellow());
        return Ok(());
    }

    fs::create_dir_all(&config_dir).context("Failed to create config directory")?;

    let config_content = toml::to_string_pretty(&Config::default())?;
    fs::write(&config_path, config_content).context("Failed to write config file")?;

    println!(
        "{}Created configuration at {}",
        CHECK,
        style(config_path.display()).cyan()
    );

    println!();
    println!("{}", style("━".repeat(50)).dim());
    println!();
    println!("{}Next steps:", ROCKET);
    println!();
    println!("  Point {} at your graph document, then:", style("data_path").yellow());
    println!("    {} senategraph serve", style("$").dim());
    println!();

    Ok(())
}
