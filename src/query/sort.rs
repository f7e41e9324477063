//! Sort order construction
//!
//! An order is (field, direction), resolved once through the column registry.
//! Comparison dispatches on the field value's variant tag, so any column kind
//! the registry exposes sorts through the same code path.

use std::cmp::Ordering;

use crate::columns::ColumnRegistry;
use crate::record::{compare_values, Record};

use super::errors::{QueryError, QueryResult};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Maps the protocol's direction token.
    ///
    /// `"asc"` is ascending; any other token, including an absent or
    /// malformed one, is descending. The permissive default is part of the
    /// wire contract.
    pub fn parse(token: &str) -> Self {
        if token == "asc" {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    /// Returns the direction token for logs
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

/// Ordering over entities by one registry column
#[derive(Debug, Clone)]
pub struct SortOrder {
    field: &'static str,
    direction: SortDirection,
}

impl SortOrder {
    /// Builds an order for a wire column index.
    ///
    /// Unknown indices and columns not flagged sortable are errors; the
    /// engine never falls back to sorting by an arbitrary field.
    pub fn build(
        registry: &ColumnRegistry,
        column_index: i64,
        direction: SortDirection,
    ) -> QueryResult<Self> {
        let column = registry.resolve(column_index)?;

        if !column.sortable {
            return Err(QueryError::UnsortableColumn(column.field));
        }

        Ok(Self {
            field: column.field,
            direction,
        })
    }

    /// Compares two records under this order
    pub fn compare<R: Record>(&self, a: &R, b: &R) -> Ordering {
        let ordering = compare_values(a.field(self.field).as_ref(), b.field(self.field).as_ref());

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Returns the resolved field name
    pub fn field(&self) -> &'static str {
        self.field
    }

    /// Returns the direction
    pub fn direction(&self) -> SortDirection {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{ColumnDescriptor, ColumnKind};
    use crate::people::Person;
    use chrono::NaiveDate;

    fn person(id: i64, name: &str) -> Person {
        Person {
            id,
            name: name.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_direction_parse_permissive_default() {
        assert_eq!(SortDirection::parse("asc"), SortDirection::Ascending);
        assert_eq!(SortDirection::parse("desc"), SortDirection::Descending);
        assert_eq!(SortDirection::parse(""), SortDirection::Descending);
        assert_eq!(SortDirection::parse("ASC"), SortDirection::Descending);
        assert_eq!(SortDirection::parse("garbage"), SortDirection::Descending);
    }

    #[test]
    fn test_build_resolves_field() {
        let registry = crate::people::column_registry();
        let order = SortOrder::build(&registry, 1, SortDirection::Ascending).unwrap();
        assert_eq!(order.field(), "name");
    }

    #[test]
    fn test_build_unknown_column() {
        let registry = crate::people::column_registry();
        let err = SortOrder::build(&registry, 99, SortDirection::Ascending).unwrap_err();
        assert!(matches!(err, QueryError::UnknownColumn(99)));
    }

    #[test]
    fn test_build_unsortable_column() {
        let registry = ColumnRegistry::new(vec![
            ColumnDescriptor::new(0, "id", ColumnKind::Integer),
            ColumnDescriptor::new(1, "name", ColumnKind::Text).with_sortable(false),
        ]);
        let err = SortOrder::build(&registry, 1, SortDirection::Ascending).unwrap_err();
        assert!(matches!(err, QueryError::UnsortableColumn("name")));
    }

    #[test]
    fn test_compare_ascending_and_descending() {
        let registry = crate::people::column_registry();
        let ann = person(1, "Ann");
        let bob = person(2, "Bob");

        let asc = SortOrder::build(&registry, 1, SortDirection::Ascending).unwrap();
        assert_eq!(asc.compare(&ann, &bob), Ordering::Less);

        let desc = SortOrder::build(&registry, 1, SortDirection::Descending).unwrap();
        assert_eq!(desc.compare(&ann, &bob), Ordering::Greater);
    }
}
