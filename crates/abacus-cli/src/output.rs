//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum as _;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// An explicit `--output-format` wins over `output.format` from config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = if args.output_format == OutputFormat::Auto {
            OutputFormat::from_str(&config.output.format, true).unwrap_or_else(|_| {
                tracing::warn!(format = %config.output.format, "Unknown output format in config");
                OutputFormat::Auto
            })
        } else {
            args.output_format
        };

        let stdout_is_tty = io::stdout().is_terminal();

        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = match requested {
            OutputFormat::Auto if stdout_is_tty => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || !stdout_is_tty
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────
    //
    // Chatter (print, success, info, header) is dropped in quiet mode and in
    // JSON mode, where stdout carries one JSON value per line.

    /// Generic message.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.silenced() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// A calculation result. Printed even in quiet mode, since it is the
    /// whole point of a batch invocation.
    pub fn result(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            msg.to_owned()
        } else {
            msg.bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.silenced() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Error indicator: `✗ <msg>`.  *Not* suppressed in quiet mode.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        let line = if self.no_color {
            format!("\u{2717} {msg}") // ✗
        } else {
            format!("{} {}", "\u{2717}".red().bold(), msg.red())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.silenced() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.silenced() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Prompt text without a trailing newline.
    pub fn prompt(&self, text: &str) -> io::Result<()> {
        let text = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().to_string()
        };
        self.term.write_str(&text)?;
        self.term.flush()
    }

    /// A `{"status": ...}` line in JSON mode, a success line otherwise.
    pub fn status(&self, status: &str, msg: &str) -> io::Result<()> {
        if self.is_json() {
            self.json(&serde_json::json!({ "status": status }))
        } else {
            self.success(msg)
        }
    }

    /// Serialize `value` as a single JSON line.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let line = serde_json::to_string(value).map_err(io::Error::other)?;
        self.term.write_line(&line)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` if quiet mode suppresses most output.
    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    /// `true` when results should be emitted as JSON.
    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }

    fn silenced(&self) -> bool {
        self.quiet || self.is_json()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
