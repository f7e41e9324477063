//! Free-text search predicate
//!
//! One `SearchFilter` value is built per request and evaluated by both the
//! filtered-count query and the page query. A record matches when any
//! searchable column's rendered text contains the search term.
//!
//! Matching is byte-wise and case-sensitive; the per-kind rendering rules
//! live in `FieldValue::search_text`.

use crate::columns::ColumnRegistry;
use crate::record::Record;

/// Predicate over an entity built from a request's search text
#[derive(Debug, Clone)]
pub struct SearchFilter {
    term: Option<String>,
    fields: Vec<&'static str>,
}

impl SearchFilter {
    /// Builds the predicate for a search string.
    ///
    /// An empty string produces a match-everything predicate; otherwise the
    /// predicate is the OR across the registry's searchable columns of a
    /// substring test against each column's rendered text.
    pub fn build(registry: &ColumnRegistry, search_text: &str) -> Self {
        let term = if search_text.is_empty() {
            None
        } else {
            Some(search_text.to_string())
        };

        Self {
            term,
            fields: registry.searchable().map(|c| c.field).collect(),
        }
    }

    /// Returns true if the predicate matches every record
    pub fn is_match_all(&self) -> bool {
        self.term.is_none()
    }

    /// Returns the search term, if any
    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    /// Evaluates the predicate against a record.
    ///
    /// Missing fields never match.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        let term = match &self.term {
            None => return true,
            Some(t) => t.as_str(),
        };

        self.fields.iter().any(|field| {
            record
                .field(field)
                .map(|value| value.search_text().contains(term))
                .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{ColumnDescriptor, ColumnKind};
    use crate::people::Person;
    use chrono::NaiveDate;

    fn person(id: i64, name: &str, y: i32, m: u32, d: u32) -> Person {
        Person {
            id,
            name: name.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        }
    }

    fn registry() -> ColumnRegistry {
        crate::people::column_registry()
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let filter = SearchFilter::build(&registry(), "");
        assert!(filter.is_match_all());
        assert!(filter.matches(&person(1, "Ann", 2000, 1, 5)));
    }

    #[test]
    fn test_name_substring_match() {
        let filter = SearchFilter::build(&registry(), "nn");
        assert!(filter.matches(&person(1, "Ann", 2000, 1, 5)));
        assert!(!filter.matches(&person(2, "Bob", 1999, 12, 3)));
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let filter = SearchFilter::build(&registry(), "ann");
        assert!(!filter.matches(&person(1, "Ann", 2000, 1, 5)));
    }

    #[test]
    fn test_integer_rendered_as_decimal() {
        let filter = SearchFilter::build(&registry(), "42");
        assert!(filter.matches(&person(42, "Ann", 2000, 1, 5)));
        assert!(filter.matches(&person(142, "Bob", 1999, 12, 3)));
        assert!(!filter.matches(&person(7, "Cid", 1980, 6, 6)));
    }

    #[test]
    fn test_date_rendered_without_leading_zeros() {
        let filter = SearchFilter::build(&registry(), "3/12/1999");
        assert!(filter.matches(&person(2, "Bob", 1999, 12, 3)));
        assert!(!filter.matches(&person(1, "Ann", 2000, 1, 5)));

        // "03/12/1999" must not match: the rendered text has no padding
        let padded = SearchFilter::build(&registry(), "03/12/1999");
        assert!(!padded.matches(&person(2, "Bob", 1999, 12, 3)));
    }

    #[test]
    fn test_unsearchable_column_not_probed() {
        let registry = ColumnRegistry::new(vec![
            ColumnDescriptor::new(0, "id", ColumnKind::Integer).with_searchable(false),
            ColumnDescriptor::new(1, "name", ColumnKind::Text),
            ColumnDescriptor::new(2, "date_of_birth", ColumnKind::Date),
        ]);
        let filter = SearchFilter::build(&registry, "42");
        assert!(!filter.matches(&person(42, "Ann", 2000, 1, 5)));
    }
}
