//! Dynamic query construction and execution
//!
//! The core of the crate. A grid request turns into three values — a search
//! predicate, a sort order, and an offset/length window — and the executor
//! runs them against a query source in a strict order:
//!
//! 1. Count all records, ignoring the filter
//! 2. Count records matching the filter
//! 3. Fetch the filtered, ordered, windowed page (eagerly materialized)
//!
//! # Invariants
//!
//! - One predicate value is shared by the count query and the page query;
//!   the two can never diverge.
//! - Sorting resolves fields through the column registry; there is no
//!   per-column branch anywhere in this module.
//! - A window starting past the filtered set is an empty page, not an error.

mod errors;
mod executor;
mod filter;
mod sort;

pub use errors::{QueryError, QueryResult};
pub use executor::{PageData, PageExecutor};
pub use filter::SearchFilter;
pub use sort::{SortDirection, SortOrder};
