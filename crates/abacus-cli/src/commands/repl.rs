//! Interactive read-eval-print loop.

use std::io::{self, IsTerminal as _};

use tracing::info;

use crate::{config::AppConfig, error::CliResult, session::Session};

/// Run the prompt on stdin until `quit` or end of input.
///
/// Banner and prompt are only written when stdin is a terminal, so piped
/// input produces nothing but results.
pub fn execute(session: Session, config: &AppConfig) -> CliResult<()> {
    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    info!(interactive, "Starting REPL");

    if interactive && config.repl.banner {
        session.banner()?;
    }

    session.run_loop(stdin.lock(), &config.repl.prompt, interactive)
}
