//! Abacus Core - calculator logic behind ports and adapters
//!
//! This crate provides the domain and application layers of the Abacus
//! calculator. The history is a driven port so the facade never owns a
//! global log.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           abacus-cli (CLI)              │
//! │      (REPL, batch mode, config)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │     (Calculator facade, evaluate)       │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │           (Driven: HistoryLog)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    abacus-adapters (Infrastructure)     │
//! │            (InMemoryHistory)            │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (operations, Expression, records)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use abacus_adapters::InMemoryHistory;
//! use abacus_core::prelude::*;
//!
//! let calc = Calculator::new(Box::new(InMemoryHistory::new()));
//!
//! assert_eq!(calc.evaluate("20% of 150").unwrap(), 30.0);
//! assert_eq!(calc.factorial(5.0).unwrap(), 120.0);
//! assert_eq!(calc.history().unwrap()[1].to_string(), "5! = 120");
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{Calculator, ports::HistoryLog};
    pub use crate::domain::{
        AngleUnit, BinaryOperator, CalculationRecord, Expression, TrigFunction, operations,
    };
    pub use crate::error::{CalcError, CalcResult, ErrorCategory};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
