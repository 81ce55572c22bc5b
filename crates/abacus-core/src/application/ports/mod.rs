//! Application ports (traits) for external dependencies.
//!
//! - **Driven (Output) Ports**: called by the calculator, implemented by
//!   infrastructure
//!   - `HistoryLog`: append-only calculation history
//!
//! Adapters in `abacus-adapters` implement these.

pub mod output;

pub use output::HistoryLog;

#[cfg(test)]
pub use output::MockHistoryLog;
