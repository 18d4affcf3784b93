//! CLI argument definitions using the clap derive API.
//!
//! Argument names, aliases, help text and value enums live here. Commands
//! receive the parsed structs and never touch clap themselves.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "veriscaff",
    bin_name = "veriscaff",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "UVM verification project scaffolding",
    long_about = "veriscaff generates a ready-to-simulate UVM verification project \
                  for a bus protocol: RTL stubs, agent components, tests, \
                  simulator scripts, FPGA build flow, docs and CI.",
    after_help = "EXAMPLES:\n\
        \x20 veriscaff generate DemoBus --protocol AXI4 --simulator dsim\n\
        \x20 veriscaff generate SpiBridge --protocol spi --no-impl -o ~/work\n\
        \x20 veriscaff components apb --output-dir verification/uvm\n\
        \x20 veriscaff completions bash > /usr/share/bash-completion/completions/veriscaff",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a complete verification project.
    #[command(
        visible_alias = "new",
        about = "Generate a verification project",
        after_help = "EXAMPLES:\n\
            \x20 veriscaff generate DemoBus\n\
            \x20 veriscaff generate DemoBus --protocol apb --simulator questa\n\
            \x20 veriscaff generate DemoBus --no-impl --dry-run"
    )]
    Generate(GenerateArgs),

    /// Emit only the seven protocol UVM components.
    #[command(
        visible_alias = "comp",
        about = "Generate the UVM agent components for a protocol",
        after_help = "EXAMPLES:\n\
            \x20 veriscaff components axi4\n\
            \x20 veriscaff components spi --output-dir verification/uvm"
    )]
    Components(ComponentsArgs),

    /// Initialise a veriscaff configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 veriscaff init           # platform config directory\n\
            \x20 veriscaff init --local   # .veriscaff.toml in CWD"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 veriscaff completions bash > ~/.local/share/bash-completion/completions/veriscaff\n\
            \x20 veriscaff completions zsh  > ~/.zfunc/_veriscaff\n\
            \x20 veriscaff completions fish > ~/.config/fish/completions/veriscaff.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the veriscaff configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 veriscaff config get defaults.protocol\n\
            \x20 veriscaff config set defaults.simulator questa\n\
            \x20 veriscaff config list"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `veriscaff generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project name; also the name of the created directory.
    #[arg(value_name = "PROJECT_NAME", help = "Project name")]
    pub name: String,

    /// Bus protocol, e.g. AXI4, APB, SPI.
    #[arg(
        short = 'p',
        long = "protocol",
        value_name = "PROTOCOL",
        help = "Bus protocol [default: AXI4]"
    )]
    pub protocol: Option<String>,

    /// Target simulator used in scripts and filelists.
    #[arg(
        short = 's',
        long = "simulator",
        value_name = "SIMULATOR",
        help = "Target simulator [default: dsim]"
    )]
    pub simulator: Option<String>,

    /// Skip the FPGA implementation flow under `impl/`.
    #[arg(long = "no-impl", help = "Skip FPGA implementation files")]
    pub no_impl: bool,

    /// Directory in which the project directory is created.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Parent directory for the project"
    )]
    pub output_dir: PathBuf,

    /// Render everything in memory and list it without writing.
    #[arg(long = "dry-run", help = "Show what would be generated")]
    pub dry_run: bool,
}

// ── components ────────────────────────────────────────────────────────────────

/// Arguments for `veriscaff components`.
#[derive(Debug, Args)]
pub struct ComponentsArgs {
    /// Bus protocol; lower-cased in file names.
    #[arg(value_name = "PROTOCOL", help = "Bus protocol")]
    pub protocol: String,

    /// Directory that receives the component files.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Output directory"
    )]
    pub output_dir: PathBuf,

    /// Render in memory and list the files without writing.
    #[arg(long = "dry-run", help = "Show what would be generated")]
    pub dry_run: bool,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `veriscaff init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write to `.veriscaff.toml` in the current directory.
    #[arg(
        long = "local",
        help = "Create local configuration in current directory"
    )]
    pub local: bool,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `veriscaff completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `veriscaff config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.protocol`.
        key: String,
    },
    /// Set a configuration key in the active config file.
    Set {
        /// Dotted key path.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}
