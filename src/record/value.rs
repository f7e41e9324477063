//! Tagged field values with search stringification and ordering

use std::cmp::Ordering;

use chrono::NaiveDate;

/// A single field value read from an entity
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Integer(i64),
    Text(&'a str),
    Date(NaiveDate),
}

impl<'a> FieldValue<'a> {
    /// Renders the value as the text free-text search probes.
    ///
    /// - Integer: plain decimal, no separators
    /// - Text: verbatim (matching is case-sensitive)
    /// - Date: `d/m/YYYY` with no leading zeros on day or month; this exact
    ///   format is part of the wire contract and must not change
    pub fn search_text(&self) -> String {
        match self {
            FieldValue::Integer(n) => n.to_string(),
            FieldValue::Text(s) => (*s).to_string(),
            FieldValue::Date(d) => d.format("%-d/%-m/%Y").to_string(),
        }
    }

    /// Type tag used to order values of different kinds
    fn type_order(&self) -> u8 {
        match self {
            FieldValue::Integer(_) => 0,
            FieldValue::Text(_) => 1,
            FieldValue::Date(_) => 2,
        }
    }
}

/// Compares two optional field values for sorting.
///
/// Ordering rules:
/// - missing < present
/// - values of different kinds order by type tag
/// - same kind, natural ordering
pub fn compare_values(a: Option<&FieldValue<'_>>, b: Option<&FieldValue<'_>>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a_val), Some(b_val)) => {
            let a_type = a_val.type_order();
            let b_type = b_val.type_order();

            if a_type != b_type {
                return a_type.cmp(&b_type);
            }

            match (a_val, b_val) {
                (FieldValue::Integer(a_n), FieldValue::Integer(b_n)) => a_n.cmp(b_n),
                (FieldValue::Text(a_s), FieldValue::Text(b_s)) => a_s.cmp(b_s),
                (FieldValue::Date(a_d), FieldValue::Date(b_d)) => a_d.cmp(b_d),
                _ => Ordering::Equal,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_integer_search_text() {
        assert_eq!(FieldValue::Integer(42).search_text(), "42");
        assert_eq!(FieldValue::Integer(-7).search_text(), "-7");
        assert_eq!(FieldValue::Integer(1000000).search_text(), "1000000");
    }

    #[test]
    fn test_text_search_text() {
        assert_eq!(FieldValue::Text("Ann").search_text(), "Ann");
    }

    #[test]
    fn test_date_search_text_no_leading_zeros() {
        assert_eq!(
            FieldValue::Date(date(1999, 12, 3)).search_text(),
            "3/12/1999"
        );
        assert_eq!(FieldValue::Date(date(2000, 1, 5)).search_text(), "5/1/2000");
        assert_eq!(
            FieldValue::Date(date(1984, 10, 24)).search_text(),
            "24/10/1984"
        );
    }

    #[test]
    fn test_compare_same_kind() {
        let a = FieldValue::Integer(1);
        let b = FieldValue::Integer(2);
        assert_eq!(compare_values(Some(&a), Some(&b)), Ordering::Less);

        let a = FieldValue::Text("bob");
        let b = FieldValue::Text("ann");
        assert_eq!(compare_values(Some(&a), Some(&b)), Ordering::Greater);

        let a = FieldValue::Date(date(1999, 12, 3));
        let b = FieldValue::Date(date(2000, 1, 5));
        assert_eq!(compare_values(Some(&a), Some(&b)), Ordering::Less);
    }

    #[test]
    fn test_compare_missing_sorts_first() {
        let v = FieldValue::Integer(0);
        assert_eq!(compare_values(None, Some(&v)), Ordering::Less);
        assert_eq!(compare_values(Some(&v), None), Ordering::Greater);
        assert_eq!(compare_values(None, None), Ordering::Equal);
    }

    #[test]
    fn test_compare_cross_kind_by_tag() {
        let n = FieldValue::Integer(5);
        let s = FieldValue::Text("5");
        assert_eq!(compare_values(Some(&n), Some(&s)), Ordering::Less);
    }
}
