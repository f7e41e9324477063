//! Query source adapter
//!
//! The seam between the query core and a backing store. Any store that can
//! count records and fetch a filtered, ordered window can serve a grid; the
//! filter and sort values are passed down so a smarter store may translate
//! them instead of evaluating them row by row.

mod errors;
mod memory;

pub use errors::{SourceError, SourceResult};
pub use memory::MemorySource;

use crate::query::{SearchFilter, SortOrder};

/// Capability interface a backing store implements to serve grid queries
pub trait QuerySource<R> {
    /// Counts all records, ignoring any filter
    fn count_all(&self) -> SourceResult<u64>;

    /// Counts records matching the filter
    fn count_matching(&self, filter: &SearchFilter) -> SourceResult<u64>;

    /// Fetches the filtered, ordered window `[start, start + length)`.
    ///
    /// The returned page is fully materialized. A window past the end of
    /// the filtered set is an empty vector, not an error.
    fn fetch_page(
        &self,
        filter: &SearchFilter,
        order: &SortOrder,
        start: usize,
        length: usize,
    ) -> SourceResult<Vec<R>>;
}
