mod config_cmds;
mod device_cmds;
mod remote;

pub use config_cmds::cmd_config;
pub use device_cmds::{cmd_aliases, cmd_discover, cmd_send, cmd_status};
pub use remote::cmd_remote;
