//! Flags shared by batch mode, the REPL and the `config`/`completions`
//! subcommands.

use clap::Args;
use std::path::PathBuf;

/// Flags accepted before or after any subcommand.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log calculator activity to stderr; repeat for more detail.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log calculator activity to stderr (-v, -vv, -vvv)",
        long_help = "Log calculator activity to stderr:
    (none)  - Warnings only, such as a bad config value
    -v      - Each batch evaluation and REPL start/stop
    -vv     - Every recorded calculation and rejected operation
    -vvv    - History storage access and per-line session spans"
    )]
    pub verbose: u8,

    /// Print results and errors only.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Print results and errors only"
    )]
    pub quiet: bool,

    /// Plain results and errors. `NO_COLOR` (<https://no-color.org>) has the
    /// same effect.
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// TOML file read instead of the per-user `abacus.toml`.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read settings from this TOML file"
    )]
    pub config: Option<PathBuf>,

    /// How results, history and errors are rendered on stdout.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Result format; json prints one JSON value per line"
    )]
    pub output_format: OutputFormat,
}

/// Rendering for results, history listings and recoverable errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    /// Bold results, coloured status markers.
    Human,
    /// `2 + 3 = 5` lines without escape codes.
    Plain,
    /// One JSON value per line: records, history arrays, errors.
    Json,
}
