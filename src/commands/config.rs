use anyhow::Result;
use clarity_core::config::{API_KEY_ENV, ClarityConfig};
use owo_colors::OwoColorize;

pub fn run(init: bool) -> Result<()> {
    let path = ClarityConfig::config_path()?;

    if init {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }
        ClarityConfig::create_default_config(&path)?;
        println!("{}", format!("Created {}", path.display()).green());
        return Ok(());
    }

    println!("{}", path.display());
    if !path.exists() {
        println!(
            "{}",
            "(not created yet; run `clarity config --init`)".dimmed()
        );
    }

    let config = ClarityConfig::load()?;
    let key_status = if config.api_key().is_ok() {
        "set".green().to_string()
    } else {
        format!("missing (set {API_KEY_ENV})").red().to_string()
    };
    println!("API key: {}", key_status);
    println!("Day starts at {} · {} min between tasks", config.day_start, config.buffer_minutes);

    Ok(())
}
