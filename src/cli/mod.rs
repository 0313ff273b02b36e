//! Command-line launcher.

mod args;
mod commands;
mod errors;

pub use args::{parse_args, Cli};
pub use commands::run;
pub use errors::{CliError, CliResult};
