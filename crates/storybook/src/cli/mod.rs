//! Command-line interface module.

mod commands;
mod generate;
mod serve;

pub use commands::{Cli, Commands};
pub use generate::run_generate;
pub use serve::run_serve;
