//! Grid engine
//!
//! Orchestrates one page request: resolve columns, build the shared search
//! predicate, build the sort order, execute the count and page queries,
//! assemble the response. The engine holds no per-request state; requests
//! may run concurrently against it.

use serde::Serialize;

use crate::columns::ColumnRegistry;
use crate::query::{PageExecutor, SearchFilter, SortOrder};
use crate::record::Record;
use crate::source::QuerySource;

use super::errors::GridResult;
use super::request::GridRequest;
use super::response::GridResponse;

/// Serves grid page requests for one entity over one source
pub struct GridEngine<S> {
    registry: ColumnRegistry,
    source: S,
}

impl<S> GridEngine<S> {
    /// Creates an engine over a registry and a query source
    pub fn new(registry: ColumnRegistry, source: S) -> Self {
        Self { registry, source }
    }

    /// Returns the column registry
    pub fn registry(&self) -> &ColumnRegistry {
        &self.registry
    }

    /// Serves one page request.
    ///
    /// Unknown or unsortable sort columns come back as validation errors;
    /// callers answer those in-protocol via `GridResponse::failure`. Store
    /// failures come back as `GridError::Store`.
    pub fn page<R>(&self, request: &GridRequest) -> GridResult<GridResponse<R>>
    where
        R: Record + Serialize,
        S: QuerySource<R>,
    {
        let filter = SearchFilter::build(&self.registry, &request.search);
        let order = SortOrder::build(&self.registry, request.sort_column, request.sort_direction)?;

        let page = PageExecutor::execute(
            &self.source,
            &filter,
            &order,
            request.start,
            request.length,
        )?;

        Ok(GridResponse::assemble(
            request.draw,
            page.records_total,
            page.records_filtered,
            page.rows,
            request.length,
        ))
    }
}
