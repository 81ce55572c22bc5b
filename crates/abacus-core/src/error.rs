//! Unified error handling for Abacus Core.
//!
//! [`CalcError`] wraps domain, parse and application errors behind one type
//! with a category and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, ParseError};

/// Root error type for Abacus Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    /// Mathematically undefined operation. Nothing was recorded.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Input did not match the expression grammar. Nothing was computed.
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Orchestration or state failure.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl CalcError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Parse(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(_) => ErrorCategory::Domain,
            Self::Parse(_) => ErrorCategory::Parse,
            Self::Application(e) => e.category(),
        }
    }

    /// Whether the session can carry on after this error.
    ///
    /// Every category except `Internal` leaves the calculator usable.
    pub fn is_recoverable(&self) -> bool {
        self.category() != ErrorCategory::Internal
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Invalid mathematical input.
    Domain,
    /// Unrecognised expression syntax.
    Parse,
    /// Query against an empty history.
    EmptyState,
    Internal,
}

/// Convenient result type alias.
pub type CalcResult<T> = Result<T, CalcError>;
