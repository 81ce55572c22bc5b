//! Infrastructure adapters for Abacus.
//!
//! This crate implements the ports defined in `abacus-core::application::ports`.

pub mod history;

// Re-export commonly used adapters
pub use history::InMemoryHistory;
