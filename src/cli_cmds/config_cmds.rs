use anyhow::{Context, Result};
use std::path::Path;

use super::device_cmds::print_json;
use crate::cli::ConfigAction;
use crate::config::Config;

pub fn cmd_config(action: ConfigAction, config: &Config, path: &Path, json: bool) -> Result<()> {
    match action {
        ConfigAction::Path => {
            println!("{}", path.display());
        }
        ConfigAction::Show => {
            if json {
                print_json(config)?;
            } else {
                let text = toml::to_string_pretty(config).context("Failed to render config")?;
                print!("{}", text);
            }
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                println!("Config already exists at {}", path.display());
                println!("Use --force to overwrite it.");
                return Ok(());
            }
            config.save_to(path)?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}
