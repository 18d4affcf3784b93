//! One module per subcommand. Each exposes an `execute` entry point.

pub mod completions;
pub mod components;
pub mod config;
pub mod generate;
pub mod init;
