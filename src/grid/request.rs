//! Grid request parsing
//!
//! Parses the DataTables query parameters into a validated `GridRequest`.
//! Negative `start` or `length` is rejected here, not clamped; the sort
//! column index is carried through unresolved so the registry decides
//! whether it exists.

use std::collections::HashMap;

use crate::query::SortDirection;

use super::errors::{GridError, GridResult};

/// Page size used when the caller sends no `length`
pub const DEFAULT_PAGE_LENGTH: usize = 10;

/// Largest page any caller may request
pub const MAX_PAGE_LENGTH: usize = 1000;

/// A validated grid page request
#[derive(Debug, Clone)]
pub struct GridRequest {
    /// Opaque caller token, echoed back verbatim
    pub draw: i64,
    /// Records to skip
    pub start: usize,
    /// Records to return
    pub length: usize,
    /// Wire index of the sort column, unresolved
    pub sort_column: i64,
    /// Sort direction
    pub sort_direction: SortDirection,
    /// Free-text search, possibly empty
    pub search: String,
}

impl GridRequest {
    /// Parses query parameters into a request.
    ///
    /// Absent parameters take protocol defaults (`draw` 0, `start` 0,
    /// `length` `DEFAULT_PAGE_LENGTH`, column 0, direction descending,
    /// empty search). Malformed integers, negative `start`/`length` and a
    /// `length` above `max_length` are validation errors.
    pub fn parse(params: &HashMap<String, String>, max_length: usize) -> GridResult<Self> {
        let draw = parse_integer(params, "draw", 0)?;
        let start = parse_integer(params, "start", 0)?;
        let length = parse_integer(params, "length", DEFAULT_PAGE_LENGTH as i64)?;
        let sort_column = parse_integer(params, "order[0][column]", 0)?;

        if start < 0 {
            return Err(GridError::validation(format!(
                "start must be non-negative, got {}",
                start
            )));
        }

        if length < 0 {
            return Err(GridError::validation(format!(
                "length must be non-negative, got {}",
                length
            )));
        }

        let length = length as usize;
        if length > max_length {
            return Err(GridError::validation(format!(
                "length {} exceeds maximum {}",
                length, max_length
            )));
        }

        let sort_direction = SortDirection::parse(
            params
                .get("order[0][dir]")
                .map(String::as_str)
                .unwrap_or(""),
        );

        let search = params
            .get("search[value]")
            .cloned()
            .unwrap_or_default();

        Ok(Self {
            draw,
            start: start as usize,
            length,
            sort_column,
            sort_direction,
            search,
        })
    }

    /// Best-effort draw token for answering requests that failed parsing.
    ///
    /// The protocol wants `draw` echoed even on error responses; a draw the
    /// parser cannot read falls back to 0.
    pub fn draw_hint(params: &HashMap<String, String>) -> i64 {
        params
            .get("draw")
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(0)
    }
}

/// Parses one integer parameter, with a default when absent
fn parse_integer(params: &HashMap<String, String>, key: &str, default: i64) -> GridResult<i64> {
    match params.get(key) {
        None => Ok(default),
        Some(raw) => raw.parse::<i64>().map_err(|_| {
            GridError::validation(format!("invalid integer for {}: '{}'", key, raw))
        }),
    }
}
