//! gridserve - a storage-agnostic server-side paging engine for grid UIs
//!
//! Answers paginated, sorted, substring-filtered listing requests in the
//! DataTables server-side wire shape (draw, recordsTotal, recordsFiltered,
//! page of rows).

pub mod cli;
pub mod columns;
pub mod grid;
pub mod http_server;
pub mod observability;
pub mod people;
pub mod query;
pub mod record;
pub mod source;
