//! Pagination executor
//!
//! Runs a grid query against a source in a strict order:
//!
//! 1. Count all records, ignoring the filter
//! 2. Count records matching the filter
//! 3. Fetch the filtered, ordered window, eagerly materialized
//!
//! The count queries and the page query share the same filter value. The two
//! store round-trips are not required to see the same snapshot; under
//! concurrent writes the counts and the page may differ slightly, which the
//! wire protocol tolerates.

use crate::source::QuerySource;

use super::errors::QueryResult;
use super::filter::SearchFilter;
use super::sort::SortOrder;

/// Result of executing one grid query
#[derive(Debug, Clone)]
pub struct PageData<R> {
    /// Count of all records, ignoring the filter
    pub records_total: u64,
    /// Count of records matching the filter
    pub records_filtered: u64,
    /// The materialized page, at most `length` records
    pub rows: Vec<R>,
}

/// Executes filter + sort + window queries against a source
pub struct PageExecutor;

impl PageExecutor {
    /// Runs the three-step query.
    ///
    /// `start` past the filtered set yields an empty page. `length` of zero
    /// yields an empty page with both counts still computed. Negative values
    /// cannot reach this function; the request layer rejects them.
    pub fn execute<R, S: QuerySource<R>>(
        source: &S,
        filter: &SearchFilter,
        order: &SortOrder,
        start: usize,
        length: usize,
    ) -> QueryResult<PageData<R>> {
        let records_total = source.count_all()?;
        let records_filtered = source.count_matching(filter)?;

        let rows = if length == 0 {
            Vec::new()
        } else {
            source.fetch_page(filter, order, start, length)?
        };

        Ok(PageData {
            records_total,
            records_filtered,
            rows,
        })
    }
}
