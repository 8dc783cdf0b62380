mod cli;
mod cli_cmds;
mod config;
mod logging;
mod tv;

use anyhow::Result;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    cli::run().await
}
