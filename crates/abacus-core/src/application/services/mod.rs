//! Application services - orchestrate use cases.

pub mod calculator;

pub use calculator::Calculator;
