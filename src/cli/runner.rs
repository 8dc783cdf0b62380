use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use super::{Cli, Commands};
use crate::cli_cmds::*;
use crate::config::Config;
use crate::logging;
use crate::tv::TvClient;
use tracing::debug;

pub(crate) async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path)?;
    if let Some(host) = cli.host {
        config.device.host = host;
    }
    if let Some(port) = cli.port {
        config.device.port = port;
    }

    let client = TvClient::new(config.address(), config.alias_table(), config.timing());
    debug!(
        address = %client.address(),
        aliases = client.aliases().len(),
        "client ready"
    );

    let ok = match cli.command {
        Some(Commands::Send { commands }) => cmd_send(&client, &commands, cli.json).await?,
        Some(Commands::Status) => cmd_status(&client, cli.json).await?,
        Some(Commands::Discover) => cmd_discover(&client, cli.json).await?,
        Some(Commands::Aliases) => {
            cmd_aliases(client.aliases(), cli.json)?;
            true
        }
        Some(Commands::Config { action }) => {
            cmd_config(action, &config, &config_path, cli.json)?;
            true
        }
        Some(Commands::Remote) | None => {
            // Interactive mode
            cmd_remote(&client).await?;
            true
        }
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
