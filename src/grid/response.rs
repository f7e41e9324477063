//! Grid response assembly
//!
//! Pure construction of the wire response. The assembler is the last line
//! of defense for the count invariants: whatever the executor produced,
//! a response never reports `recordsFiltered > recordsTotal` and never
//! carries more rows than the requested length.

use serde::Serialize;

/// Wire response for one grid page
#[derive(Debug, Clone, Serialize)]
pub struct GridResponse<T: Serialize> {
    /// Echo of the request's draw token
    pub draw: i64,

    /// Count of all records, ignoring the filter
    #[serde(rename = "recordsTotal")]
    pub records_total: u64,

    /// Count of records matching the filter
    #[serde(rename = "recordsFiltered")]
    pub records_filtered: u64,

    /// The page of rows
    pub data: Vec<T>,

    /// Error message, present only on failed requests
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> GridResponse<T> {
    /// Assembles a success response, enforcing the count invariants.
    pub fn assemble(
        draw: i64,
        records_total: u64,
        records_filtered: u64,
        mut data: Vec<T>,
        length: usize,
    ) -> Self {
        let records_filtered = records_filtered.min(records_total);

        let row_cap = usize::try_from(records_filtered)
            .unwrap_or(usize::MAX)
            .min(length);
        data.truncate(row_cap);

        Self {
            draw,
            records_total,
            records_filtered,
            data,
            error: None,
        }
    }

    /// Builds an in-protocol failure response: error populated, empty data,
    /// zero counts, draw still echoed.
    pub fn failure(draw: i64, message: impl Into<String>) -> Self {
        Self {
            draw,
            records_total: 0,
            records_filtered: 0,
            data: Vec::new(),
            error: Some(message.into()),
        }
    }
}
