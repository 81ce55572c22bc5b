//! Application layer errors.
//!
//! These errors represent failures in orchestration and state, not
//! mathematics. Mathematical errors are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while coordinating the calculator and its history.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// A last-result query was made before anything was calculated.
    #[error("No calculations in history")]
    EmptyHistory,

    /// History access failed (lock poisoned).
    #[error("History log is unavailable")]
    HistoryLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyHistory => vec![
                "Calculate something first, e.g. 2 + 3".into(),
                "The history is empty after 'clear'".into(),
            ],
            Self::HistoryLockError => vec![
                "The history log was left in an inconsistent state".into(),
                "Restart the calculator".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyHistory => ErrorCategory::EmptyState,
            Self::HistoryLockError => ErrorCategory::Internal,
        }
    }
}
