//! In-memory history log.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use abacus_core::{
    application::{ApplicationError, ports::HistoryLog},
    domain::CalculationRecord,
    error::CalcResult,
};
use tracing::trace;

/// Append-only, unbounded history held in memory.
///
/// Cloning is cheap and clones share the same records, so a caller can keep
/// a handle for inspection after boxing one into a
/// [`Calculator`](abacus_core::application::Calculator).
#[derive(Clone, Debug, Default)]
pub struct InMemoryHistory {
    inner: Arc<RwLock<Vec<CalculationRecord>>>,
}

impl InMemoryHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> CalcResult<RwLockReadGuard<'_, Vec<CalculationRecord>>> {
        self.inner
            .read()
            .map_err(|_| ApplicationError::HistoryLockError.into())
    }

    fn write(&self) -> CalcResult<RwLockWriteGuard<'_, Vec<CalculationRecord>>> {
        self.inner
            .write()
            .map_err(|_| ApplicationError::HistoryLockError.into())
    }
}

impl HistoryLog for InMemoryHistory {
    fn append(&self, record: CalculationRecord) -> CalcResult<()> {
        let mut inner = self.write()?;
        trace!(sequence = record.sequence(), "Appending record");
        inner.push(record);
        Ok(())
    }

    fn records(&self) -> CalcResult<Vec<CalculationRecord>> {
        Ok(self.read()?.clone())
    }

    fn last(&self) -> CalcResult<Option<CalculationRecord>> {
        Ok(self.read()?.last().cloned())
    }

    fn len(&self) -> CalcResult<usize> {
        Ok(self.read()?.len())
    }

    fn clear(&self) -> CalcResult<()> {
        self.write()?.clear();
        Ok(())
    }
}
