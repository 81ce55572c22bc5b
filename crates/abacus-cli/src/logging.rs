//! Tracing subscriber initialisation.
//!
//! The binary is the only place a subscriber is installed. The calculator
//! core and the history adapters emit events and never configure output.
//!
//! # What each verbosity level shows
//!
//! | Flag(s)   | Shown on stderr                                         |
//! |-----------|---------------------------------------------------------|
//! | `--quiet` | failures only                                           |
//! | (none)    | warnings, e.g. an unknown `output.format` in config     |
//! | `-v`      | batch evaluations, REPL start and shutdown              |
//! | `-vv`     | every recorded calculation and every rejected operation |
//! | `-vvv`    | history storage access and per-line session spans       |
//!
//! `RUST_LOG` replaces the whole table when set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// How much of the calculator's activity is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verbosity {
    Failures,
    Warnings,
    Lifecycle,
    Calculations,
    Storage,
}

impl Verbosity {
    fn from_args(args: &GlobalArgs) -> Self {
        if args.quiet {
            return Self::Failures;
        }
        match args.verbose {
            0 => Self::Warnings,
            1 => Self::Lifecycle,
            2 => Self::Calculations,
            _ => Self::Storage,
        }
    }

    /// Filter directives for the three workspace crates.
    ///
    /// Lifecycle events live in the binary, calculations in the core and
    /// storage access in the adapters, so each step opens one more crate.
    fn directives(self) -> String {
        let (cli, core, adapters) = match self {
            Self::Failures => ("error", "error", "error"),
            Self::Warnings => ("warn", "warn", "warn"),
            Self::Lifecycle => ("info", "warn", "warn"),
            Self::Calculations => ("debug", "debug", "warn"),
            Self::Storage => ("trace", "trace", "trace"),
        };
        format!("abacus={cli},abacus_core={core},abacus_adapters={adapters}")
    }
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let verbosity = Verbosity::from_args(args);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.directives()));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    // stderr keeps results on stdout pipeable
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install the log subscriber: {e}"))?;

    Ok(())
}
