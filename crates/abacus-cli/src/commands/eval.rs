//! Batch mode: evaluate one expression (or session command) and exit.

use tracing::info;

use crate::{error::CliResult, session::Session};

pub fn execute(expression: &str, session: Session) -> CliResult<()> {
    info!(expression, "Batch evaluation");
    session.handle(expression)?;
    Ok(())
}
