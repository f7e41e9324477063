//! Column descriptor table
//!
//! A descriptor binds a wire column index to a field name and kind plus the
//! searchable/sortable capability flags. Adding a column to a grid is a
//! registry entry, not a new code branch in the filter or sort path.

use super::errors::{ColumnError, ColumnResult};

/// The closed set of field kinds the engine can filter and sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Text,
    Date,
}

impl ColumnKind {
    /// Returns the kind name for logs and explain output
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Integer => "integer",
            ColumnKind::Text => "text",
            ColumnKind::Date => "date",
        }
    }
}

/// Static metadata for one grid column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// Wire index the protocol sends in `order[0][column]`
    pub index: u32,
    /// Field name resolved against the entity's `Record` accessor
    pub field: &'static str,
    /// Field kind, drives stringification and comparison dispatch
    pub kind: ColumnKind,
    /// Whether free-text search probes this column
    pub searchable: bool,
    /// Whether the protocol may order by this column
    pub sortable: bool,
}

impl ColumnDescriptor {
    /// Creates a descriptor that is both searchable and sortable
    pub fn new(index: u32, field: &'static str, kind: ColumnKind) -> Self {
        Self {
            index,
            field,
            kind,
            searchable: true,
            sortable: true,
        }
    }

    /// Overrides the searchable flag
    pub fn with_searchable(mut self, searchable: bool) -> Self {
        self.searchable = searchable;
        self
    }

    /// Overrides the sortable flag
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }
}

/// Immutable index → descriptor lookup table, built once at startup
#[derive(Debug, Clone)]
pub struct ColumnRegistry {
    columns: Vec<ColumnDescriptor>,
}

impl ColumnRegistry {
    /// Creates a registry from a fixed descriptor list
    pub fn new(columns: Vec<ColumnDescriptor>) -> Self {
        Self { columns }
    }

    /// Resolves a wire column index to its descriptor.
    ///
    /// Indices outside the table (including negative ones) yield
    /// `ColumnError::Unknown`; callers surface that as a request
    /// validation error.
    pub fn resolve(&self, index: i64) -> ColumnResult<&ColumnDescriptor> {
        self.columns
            .iter()
            .find(|c| i64::from(c.index) == index)
            .ok_or(ColumnError::Unknown(index))
    }

    /// Iterates the columns free-text search may probe
    pub fn searchable(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter().filter(|c| c.searchable)
    }

    /// Iterates all descriptors in registration order
    pub fn iter(&self) -> impl Iterator<Item = &ColumnDescriptor> {
        self.columns.iter()
    }

    /// Returns the number of registered columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if no columns are registered
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
