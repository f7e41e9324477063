//! In-memory query source
//!
//! Backs the demo server and the test suite. Each query takes a scoped read
//! lock that is released on every exit path; writers going through
//! `replace` may interleave between a request's count and page queries,
//! which the protocol tolerates.

use std::sync::{RwLock, RwLockReadGuard};

use crate::query::{SearchFilter, SortOrder};
use crate::record::Record;

use super::errors::{SourceError, SourceResult};
use super::QuerySource;

/// Query source over an in-memory record list
pub struct MemorySource<R> {
    records: RwLock<Vec<R>>,
}

impl<R> MemorySource<R> {
    /// Creates a source over the given records
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Replaces the backing record list
    pub fn replace(&self, records: Vec<R>) -> SourceResult<()> {
        let mut guard = self
            .records
            .write()
            .map_err(|_| SourceError::unavailable("lock poisoned"))?;
        *guard = records;
        Ok(())
    }

    fn read(&self) -> SourceResult<RwLockReadGuard<'_, Vec<R>>> {
        self.records
            .read()
            .map_err(|_| SourceError::unavailable("lock poisoned"))
    }
}

impl<R: Record + Clone> QuerySource<R> for MemorySource<R> {
    fn count_all(&self) -> SourceResult<u64> {
        Ok(self.read()?.len() as u64)
    }

    fn count_matching(&self, filter: &SearchFilter) -> SourceResult<u64> {
        let records = self.read()?;
        Ok(records.iter().filter(|r| filter.matches(*r)).count() as u64)
    }

    fn fetch_page(
        &self,
        filter: &SearchFilter,
        order: &SortOrder,
        start: usize,
        length: usize,
    ) -> SourceResult<Vec<R>> {
        let records = self.read()?;

        let mut matched: Vec<R> = records
            .iter()
            .filter(|r| filter.matches(*r))
            .cloned()
            .collect();

        // Stable sort: records equal under the order keep insertion order
        matched.sort_by(|a, b| order.compare(a, b));

        Ok(matched.into_iter().skip(start).take(length).collect())
    }
}
