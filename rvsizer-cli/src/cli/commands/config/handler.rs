//! Config command handler

use anyhow::Result;
use colored::*;

use super::ConfigCommands;
use crate::config::Config;

pub fn handle_config_command(cmd: ConfigCommands) -> Result<()> {
    let path = Config::config_path();

    match cmd {
        ConfigCommands::Show => {
            let config = Config::load()?;
            let source = if path.exists() {
                path.display().to_string()
            } else {
                format!("{} (not found, using defaults)", path.display())
            };

            println!("Config file: {}", source.cyan());
            println!();
            println!("{}", config.to_toml()?);
        }
        ConfigCommands::Path => println!("{}", path.display()),
    }

    Ok(())
}
