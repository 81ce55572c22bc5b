//! Application layer - use case orchestration.
//!
//! Coordinates the domain layer with the history port.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::Calculator;
