mod args;
mod runner;

pub(crate) use args::{Cli, Commands, ConfigAction};
pub(crate) use runner::run;
