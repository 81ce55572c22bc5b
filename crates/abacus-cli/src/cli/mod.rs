//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No calculator logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "abacus",
    bin_name = "abacus",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f9ee} Arithmetic and trigonometric calculator",
    long_about = "Abacus evaluates simple expressions such as '2 + 3', 'sqrt(16)', \
                  '20% of 150', '5!' or 'sin(90)'.  Without an expression it \
                  starts an interactive prompt.",
    after_help = "EXAMPLES:\n\
        \x20 abacus                     # interactive prompt\n\
        \x20 abacus 2 + 3\n\
        \x20 abacus '20% of 150'\n\
        \x20 abacus --angle-unit radians 'sin(1.5708)'\n\
        \x20 abacus completions bash > /usr/share/bash-completion/completions/abacus",
    args_conflicts_with_subcommands = true,
    disable_help_subcommand = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Launch the graphical interface.
    #[arg(long = "gui", help = "Launch the graphical interface")]
    pub gui: bool,

    /// Override the configured angle unit for trig functions.
    #[arg(
        long = "angle-unit",
        value_name = "UNIT",
        value_enum,
        help = "Angle unit for sin/cos/tan"
    )]
    pub angle_unit: Option<AngleUnit>,

    /// Expression to evaluate once.  Words are joined with spaces, so
    /// `abacus 2 + 3` and `abacus "2 + 3"` are the same.
    #[arg(
        value_name = "EXPRESSION",
        trailing_var_arg = true,
        allow_negative_numbers = true,
        help = "Expression to evaluate (omit for the interactive prompt)"
    )]
    pub expression: Vec<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The batch-mode expression, if one was given.
    pub fn expression(&self) -> Option<String> {
        if self.expression.is_empty() {
            None
        } else {
            Some(self.expression.join(" "))
        }
    }
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 abacus completions bash > ~/.local/share/bash-completion/completions/abacus\n\
            \x20 abacus completions zsh  > ~/.zfunc/_abacus\n\
            \x20 abacus completions fish > ~/.config/fish/completions/abacus.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Abacus configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 abacus config get calculator.angle_unit\n\
            \x20 abacus config list\n\
            \x20 abacus config path"
    )]
    Config(ConfigCommands),
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `abacus completions`.
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

/// Subcommands for `abacus config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `calculator.angle_unit`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Angle units accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum AngleUnit {
    /// Also accepted as `deg`.
    #[value(alias = "deg")]
    Degrees,
    /// Also accepted as `rad`.
    #[value(alias = "rad")]
    Radians,
}

impl std::fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Degrees => write!(f, "degrees"),
            Self::Radians => write!(f, "radians"),
        }
    }
}

impl From<AngleUnit> for abacus_core::domain::AngleUnit {
    fn from(unit: AngleUnit) -> Self {
        match unit {
            AngleUnit::Degrees => Self::Degrees,
            AngleUnit::Radians => Self::Radians,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
