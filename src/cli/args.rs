use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "philips-remote")]
#[command(version)]
#[command(about = "Remote control for Philips Smart TVs over the local JointSpace API")]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Option<Commands>,

    /// TV host name or IP address
    #[arg(long, global = true, env = "PHILIPS_TV_HOST")]
    pub(crate) host: Option<String>,

    /// TV API port
    #[arg(long, global = true)]
    pub(crate) port: Option<u16>,

    /// Config file to use instead of the default location
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub(crate) json: bool,

    /// More log output (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub(crate) verbose: u8,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Press one or more buttons, e.g. `send VolumeUp Confirm`
    Send {
        /// Logical command names
        #[arg(required = true)]
        commands: Vec<String>,
    },
    /// Check whether the TV is reachable
    Status,
    /// List the keys the TV reports as supported
    Discover,
    /// Show the fallback table used for each button
    Aliases,
    /// Interactive remote in the terminal (default)
    Remote,
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
    /// Write a config file with default values
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}
