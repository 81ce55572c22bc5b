// ============================================================================
// domain/error.rs - MATHEMATICAL DOMAIN AND GRAMMAR ERRORS
// ============================================================================

use thiserror::Error;

/// A mathematically undefined operation.
///
/// Domain errors abort the computation before anything is recorded.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Cannot calculate square root of negative number {value}")]
    NegativeSquareRoot { value: f64 },

    #[error("Factorial is only defined for non-negative integers, got {value}")]
    InvalidFactorial { value: f64 },

    #[error("Logarithm is only defined for positive numbers, got {value}")]
    NonPositiveLogarithm { value: f64 },

    #[error("Logarithm base must be positive and not equal to 1, got {base}")]
    InvalidLogarithmBase { base: f64 },

    #[error("{operation} is undefined for the given operands")]
    UndefinedResult { operation: &'static str },

    #[error("{operation} result is too large to represent")]
    Overflow { operation: &'static str },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DivisionByZero => vec!["Use a non-zero divisor".into()],
            Self::NegativeSquareRoot { .. } => vec![
                "Square roots are only defined for x >= 0".into(),
                "Example: sqrt(16)".into(),
            ],
            Self::InvalidFactorial { .. } => vec![
                "Factorials take a whole number >= 0".into(),
                "Example: 5!".into(),
            ],
            Self::NonPositiveLogarithm { .. } => vec![
                "The logarithm argument must be greater than 0".into(),
                "Example: log(100, 10)".into(),
            ],
            Self::InvalidLogarithmBase { .. } => vec![
                "Use a positive base other than 1".into(),
                "Use ln(x) for the natural logarithm".into(),
            ],
            Self::Overflow { .. } => vec!["Try smaller operands".into()],
            Self::UndefinedResult { operation: "power" } => {
                vec!["Negative bases need a whole-number exponent".into()]
            }
            Self::UndefinedResult { operation: "expression" } => {
                vec!["Check for a zero divisor inside the expression".into()]
            }
            Self::UndefinedResult { .. } => vec!["Check the operands".into()],
        }
    }
}

/// Input text did not match any known expression form.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid expression: '{input}'")]
    InvalidExpression { input: String },

    #[error("Unknown function '{name}'")]
    UnknownFunction { name: String },

    #[error("{name}() takes {expected} argument(s), got {found}")]
    WrongArity {
        name: String,
        expected: &'static str,
        found: usize,
    },
}

impl ParseError {
    pub(crate) fn invalid(input: impl Into<String>) -> Self {
        Self::InvalidExpression {
            input: input.into(),
        }
    }

    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidExpression { .. } => vec![
                "Examples: 2 + 3, 2 ** 8, sqrt(16), 20% of 150, 5!, log(100, 10), sin(90)".into(),
                "Type 'help' for the full list".into(),
            ],
            Self::UnknownFunction { .. } => {
                vec!["Known functions: sqrt, ln, log, sin, cos, tan".into()]
            }
            Self::WrongArity { name, .. } => vec![format!("Check the arguments to {name}()")],
        }
    }
}
