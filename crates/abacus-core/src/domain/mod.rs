//! Domain layer: pure calculator logic.
//!
//! No I/O and no history. Everything here is a value type, a pure function,
//! or a parser:
//!
//! - [`operations`]: the operation library (`divide`, `factorial`, ...)
//! - [`Expression`]: the tagged expression grammar and its parser
//! - [`CalculationRecord`]: one logged expression/result pair
//! - value objects: [`AngleUnit`], [`TrigFunction`], [`BinaryOperator`]

pub mod error;
pub mod expression;
pub mod operations;
pub mod record;
pub mod value_objects;

pub use error::{DomainError, ParseError};
pub use expression::Expression;
pub use record::CalculationRecord;
pub use value_objects::{AngleUnit, BinaryOperator, TrigFunction};
