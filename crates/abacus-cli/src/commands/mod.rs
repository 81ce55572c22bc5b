//! Command handlers.
//!
//! Each handler takes already-parsed arguments plus the pieces of startup
//! state it needs, and returns a [`CliResult`](crate::error::CliResult).

pub mod completions;
pub mod config;
pub mod eval;
pub mod repl;

use abacus_adapters::InMemoryHistory;
use abacus_core::application::Calculator;

use crate::{config::AppConfig, output::OutputManager, session::Session};

/// Wire a fresh in-memory history into a calculator session.
pub fn build_session(config: &AppConfig, output: OutputManager) -> Session {
    let calculator = Calculator::new(Box::new(InMemoryHistory::new()))
        .with_angle_unit(config.calculator.angle_unit);
    Session::new(calculator, output, config.calculator.history_display_limit)
}
