//! Configuration inspection commands

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration after file and environment layering
    Show,
    /// Check the effective configuration without running
    Validate,
}

pub fn run(cmd: ConfigCommands, config: &Config) -> Result<()> {
    match cmd {
        ConfigCommands::Show => show(config),
        ConfigCommands::Validate => validate(config),
    }
}

fn show(config: &Config) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}

fn validate(config: &Config) -> Result<()> {
    config.validate()?;
    println!("Configuration is valid");
    Ok(())
}
