//! Line-oriented calculator session shared by batch mode and the REPL.
//!
//! A [`Session`] owns the [`Calculator`] for one process run. Each input
//! line is either a [`ReplCommand`] or an expression handed to
//! [`Calculator::evaluate`].

use std::io::BufRead;

use abacus_core::{application::Calculator, domain::CalculationRecord, error::CalcError};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::{
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

const HELP_TEXT: &str = "\
Expressions:
  a + b, a - b, a * b, a / b     arithmetic (also × and ÷)
  a ^ b, a ** b                  power
  sqrt(x)                        square root
  p% of n                        percentage, e.g. 20% of 150
  n!                             factorial (0 to 170)
  ln(x), log(x), log(x, base)    logarithms (log(x) is natural)
  sin(x), cos(x), tan(x)         trigonometry in the configured angle unit

Commands:
  history                        show recent calculations
  last                           show the most recent calculation
  clear                          clear the history
  help                           show this help
  quit, exit                     leave the calculator";

/// Session-level commands recognised instead of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand {
    History,
    Clear,
    Last,
    Help,
    Quit,
}

impl ReplCommand {
    /// Recognise a command word, ignoring case and surrounding whitespace.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_lowercase().as_str() {
            "history" => Some(Self::History),
            "clear" => Some(Self::Clear),
            "last" => Some(Self::Last),
            "help" => Some(Self::Help),
            "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// Whether the session should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Serialize)]
struct ErrorReport<'a> {
    error: String,
    category: &'a str,
    suggestions: Vec<String>,
}

/// A calculator plus the output it reports to.
pub struct Session {
    calculator: Calculator,
    output: OutputManager,
    history_limit: usize,
}

impl Session {
    pub fn new(calculator: Calculator, output: OutputManager, history_limit: usize) -> Self {
        Self {
            calculator,
            output,
            history_limit,
        }
    }

    /// Handle one input line.
    ///
    /// Blank lines are ignored. Calculator failures are returned to the
    /// caller, which decides whether they end the session.
    #[instrument(skip(self), level = "debug")]
    pub fn handle(&self, line: &str) -> CliResult<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        if let Some(command) = ReplCommand::parse(line) {
            debug!(?command, "Session command");
            return self.run_command(command);
        }

        self.calculator.evaluate(line)?;
        let record = self.calculator.last_record()?;
        self.show_record(&record)?;
        Ok(Flow::Continue)
    }

    /// Read lines from `input` until `quit`, `exit` or end of input.
    ///
    /// Recoverable calculator errors are reported and the loop carries on;
    /// anything else ends the session with that error.
    pub fn run_loop<R: BufRead>(
        &self,
        mut input: R,
        prompt: &str,
        interactive: bool,
    ) -> CliResult<()> {
        let mut line = String::new();
        loop {
            if interactive {
                self.output.prompt(prompt)?;
            }

            line.clear();
            let read = input
                .read_line(&mut line)
                .with_cli_context(|| "Failed to read input")?;
            if read == 0 {
                if interactive {
                    // leave the cursor on a fresh line after ^D
                    self.output.print("")?;
                }
                self.output.info("Goodbye!")?;
                return Ok(());
            }

            match self.handle(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return Ok(()),
                Err(CliError::Core(err)) if err.is_recoverable() => self.report(&err)?,
                Err(err) => return Err(err),
            }
        }
    }

    /// Print a calculator error without ending the session.
    pub fn report(&self, err: &CalcError) -> CliResult<()> {
        debug!(error = %err, "Reporting recoverable error");

        if self.output.is_json() {
            let category = format!("{:?}", err.category()).to_lowercase();
            self.output.json(&ErrorReport {
                error: err.to_string(),
                category: &category,
                suggestions: err.suggestions(),
            })?;
            return Ok(());
        }

        self.output.error(&err.to_string())?;
        if let Some(hint) = err.suggestions().first() {
            self.output.print(&format!("  {hint}"))?;
        }
        Ok(())
    }

    /// Welcome text for interactive sessions.
    pub fn banner(&self) -> CliResult<()> {
        self.output.header(&format!("Abacus {}", abacus_core::VERSION))?;
        self.output.print(&format!(
            "Angles are in {}. Type 'help' for commands, 'quit' to exit.",
            self.calculator.angle_unit()
        ))?;
        Ok(())
    }

    // ── commands ──────────────────────────────────────────────────────────

    fn run_command(&self, command: ReplCommand) -> CliResult<Flow> {
        match command {
            ReplCommand::History => self.show_history()?,
            ReplCommand::Clear => {
                self.calculator.clear_history()?;
                self.output.status("cleared", "History cleared")?;
            }
            ReplCommand::Last => {
                let record = self.calculator.last_record()?;
                self.show_record(&record)?;
            }
            ReplCommand::Help if self.output.is_json() => {
                self.output.json(&serde_json::json!({ "help": HELP_TEXT }))?;
            }
            ReplCommand::Help => self.output.print(HELP_TEXT)?,
            ReplCommand::Quit => {
                self.output.info("Goodbye!")?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn show_record(&self, record: &CalculationRecord) -> CliResult<()> {
        if self.output.is_json() {
            self.output.json(record)?;
        } else {
            self.output.result(&record.to_string())?;
        }
        Ok(())
    }

    fn show_history(&self) -> CliResult<()> {
        let records = self.calculator.history()?;
        let shown = &records[records.len().saturating_sub(self.history_limit)..];

        if self.output.is_json() {
            self.output.json(shown)?;
            return Ok(());
        }

        if records.is_empty() {
            self.output.info("History is empty")?;
            return Ok(());
        }

        self.output.header("History:")?;
        for record in shown {
            self.output
                .print(&format!("  {}. {}", record.sequence(), record))?;
        }
        if shown.len() < records.len() {
            self.output.print(&format!(
                "  ({} older entries not shown)",
                records.len() - shown.len()
            ))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::global::{GlobalArgs, OutputFormat};
    use crate::config::AppConfig;
    use abacus_adapters::InMemoryHistory;
    use abacus_core::application::ApplicationError;
    use std::io::Cursor;

    fn session_with_limit(limit: usize) -> Session {
        let args = GlobalArgs {
            verbose: 0,
            quiet: true,
            no_color: true,
            config: None,
            output_format: OutputFormat::Plain,
        };
        let output = OutputManager::new(&args, &AppConfig::default());
        Session::new(
            Calculator::new(Box::new(InMemoryHistory::new())),
            output,
            limit,
        )
    }

    fn session() -> Session {
        session_with_limit(10)
    }

    #[test]
    fn parse_commands_case_insensitively() {
        assert_eq!(ReplCommand::parse(" History "), Some(ReplCommand::History));
        assert_eq!(ReplCommand::parse("EXIT"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("quit"), Some(ReplCommand::Quit));
        assert_eq!(ReplCommand::parse("2 + 3"), None);
    }

    #[test]
    fn expression_is_recorded() {
        let s = session();
        assert_eq!(s.handle("2 + 3").unwrap(), Flow::Continue);
        assert_eq!(s.calculator.history_len().unwrap(), 1);
        assert_eq!(s.calculator.last_result().unwrap(), 5.0);
    }

    #[test]
    fn blank_line_is_ignored() {
        let s = session();
        assert_eq!(s.handle("   \n").unwrap(), Flow::Continue);
        assert_eq!(s.calculator.history_len().unwrap(), 0);
    }

    #[test]
    fn quit_ends_session() {
        assert_eq!(session().handle("quit").unwrap(), Flow::Quit);
    }

    #[test]
    fn clear_empties_history() {
        let s = session();
        s.handle("1 + 1").unwrap();
        s.handle("clear").unwrap();
        assert_eq!(s.calculator.history_len().unwrap(), 0);
    }

    #[test]
    fn last_on_empty_history_fails() {
        let err = session().handle("last").unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(CalcError::Application(ApplicationError::EmptyHistory))
        ));
    }

    #[test]
    fn domain_error_is_returned() {
        let err = session().handle("5 / 0").unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn history_and_help_do_not_record() {
        let s = session_with_limit(1);
        s.handle("1 + 1").unwrap();
        s.handle("2 + 2").unwrap();
        s.handle("history").unwrap();
        s.handle("help").unwrap();
        assert_eq!(s.calculator.history_len().unwrap(), 2);
    }

    #[test]
    fn zero_history_limit_still_lists_older_entries() {
        let s = session_with_limit(0);
        s.handle("1 + 1").unwrap();
        assert_eq!(s.handle("history").unwrap(), Flow::Continue);
        assert_eq!(s.calculator.history_len().unwrap(), 1);
    }

    #[test]
    fn json_session_commands_succeed() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: true,
            config: None,
            output_format: OutputFormat::Json,
        };
        let output = OutputManager::new(&args, &AppConfig::default());
        let s = Session::new(Calculator::new(Box::new(InMemoryHistory::new())), output, 5);
        let input = Cursor::new("2 + 3\nhelp\nclear\nhistory\n");
        s.run_loop(input, "calc> ", false).unwrap();
        assert_eq!(s.calculator.history_len().unwrap(), 0);
    }

    #[test]
    fn loop_continues_after_errors() {
        let s = session();
        let input = Cursor::new("2 + 3\nbogus\n5 / 0\n4!\n");
        s.run_loop(input, "calc> ", false).unwrap();
        assert_eq!(s.calculator.history_len().unwrap(), 2);
        assert_eq!(s.calculator.last_result().unwrap(), 24.0);
    }

    #[test]
    fn loop_stops_at_quit() {
        let s = session();
        let input = Cursor::new("1 + 1\nexit\n2 + 2\n");
        s.run_loop(input, "calc> ", false).unwrap();
        assert_eq!(s.calculator.history_len().unwrap(), 1);
    }

    #[test]
    fn loop_ends_at_eof() {
        let s = session();
        s.run_loop(Cursor::new(""), "calc> ", false).unwrap();
        assert_eq!(s.calculator.history_len().unwrap(), 0);
    }

    #[test]
    fn report_accepts_every_category() {
        let s = session();
        s.report(&CalcError::Application(ApplicationError::EmptyHistory))
            .unwrap();
    }
}
