//! Demo entity: a people listing
//!
//! The entity served by the bundled server. Its column registry fixes the
//! wire mapping `0 → id`, `1 → name`, `2 → date_of_birth`, which an
//! unmodified grid client depends on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::columns::{ColumnDescriptor, ColumnKind, ColumnRegistry};
use crate::record::{FieldValue, Record};

/// One row of the people listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub date_of_birth: NaiveDate,
}

impl Record for Person {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "id" => Some(FieldValue::Integer(self.id)),
            "name" => Some(FieldValue::Text(&self.name)),
            "date_of_birth" => Some(FieldValue::Date(self.date_of_birth)),
            _ => None,
        }
    }
}

/// Builds the fixed column registry for the people grid
pub fn column_registry() -> ColumnRegistry {
    ColumnRegistry::new(vec![
        ColumnDescriptor::new(0, "id", ColumnKind::Integer),
        ColumnDescriptor::new(1, "name", ColumnKind::Text),
        ColumnDescriptor::new(2, "date_of_birth", ColumnKind::Date),
    ])
}

/// Built-in sample data used when no data file is configured
pub fn sample_people() -> Vec<Person> {
    fn p(id: i64, name: &str, y: i32, m: u32, d: u32) -> Person {
        Person {
            id,
            name: name.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(y, m, d).expect("valid date literal"),
        }
    }

    vec![
        p(1, "Ann Baker", 2000, 1, 5),
        p(2, "Bob Moran", 1999, 12, 3),
        p(3, "Carla Espinoza", 1984, 7, 21),
        p(4, "Dmitri Volkov", 1991, 2, 8),
        p(5, "Edith Marsh", 1975, 10, 30),
        p(6, "Farid Khalil", 1988, 3, 14),
        p(7, "Grace Odum", 1996, 11, 2),
        p(8, "Hana Sato", 1979, 6, 17),
        p(9, "Ivo Petrov", 2001, 9, 9),
        p(10, "June Park", 1993, 4, 26),
    ]
}
