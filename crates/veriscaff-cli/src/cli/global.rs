//! Flags shared by every subcommand, flattened into [`super::Cli`].

use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// Repeat for more detail: `-v` steps, `-vv` every file, `-vvv` filesystem calls.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Logging verbosity on stderr:
    (none)  - warnings and errors
    -v      - one line per scaffold step
    -vv     - every directory and file
    -vvv    - filesystem adapter calls
RUST_LOG overrides this mapping."
    )]
    pub verbose: u8,

    /// Only errors reach the terminal. JSON output is still printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Also set by `NO_COLOR` (<https://no-color.org>). Any value other than
    /// an empty string or a falsey word such as `0` or `false` turns it on.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Explicit config file; must exist.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,

    /// Copy of the log stream without colour, appended to FILE.
    #[arg(
        long = "log-file",
        global = true,
        value_name = "FILE",
        help = "Append logs to a file"
    )]
    pub log_file: Option<PathBuf>,
}

/// How command results are rendered on stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, Plain otherwise.
    #[default]
    Auto,
    /// Coloured, with progress and next steps.
    Human,
    /// Same text, no colour.
    Plain,
    /// One JSON document per command.
    Json,
}
