//! Driven (output) ports - implemented by infrastructure.

use crate::domain::CalculationRecord;
use crate::error::CalcResult;

/// Port for the calculation history.
///
/// Implemented by:
/// - `abacus_adapters::history::InMemoryHistory`
///
/// ## Contract
///
/// - Insertion order is preserved; `records()` returns oldest first.
/// - Records are never modified or removed individually; `clear()` is the
///   only way to shrink the log.
/// - `next_sequence()` is the sequence number the next appended record must
///   carry. It restarts at 1 after `clear()`.
#[cfg_attr(test, mockall::automock)]
pub trait HistoryLog: Send + Sync {
    /// Append one record.
    fn append(&self, record: CalculationRecord) -> CalcResult<()>;

    /// All records, oldest first.
    fn records(&self) -> CalcResult<Vec<CalculationRecord>>;

    /// The most recent record, if any.
    fn last(&self) -> CalcResult<Option<CalculationRecord>>;

    /// Number of records.
    fn len(&self) -> CalcResult<usize>;

    /// Remove every record.
    fn clear(&self) -> CalcResult<()>;

    /// Sequence number for the next record.
    fn next_sequence(&self) -> CalcResult<u64> {
        Ok(self.len()? as u64 + 1)
    }

    fn is_empty(&self) -> CalcResult<bool> {
        Ok(self.len()? == 0)
    }
}
