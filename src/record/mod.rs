//! Record field access
//!
//! Entities expose their fields through the `Record` trait as tagged
//! `FieldValue` variants. This replaces runtime member reflection with a
//! closed, typed accessor set: the registry names a field, the entity hands
//! back the value, and filtering/sorting dispatch on the variant tag.

mod value;

pub use value::{compare_values, FieldValue};

/// Typed field access for a grid entity.
///
/// `field` returns `None` for names the entity does not carry; the query
/// layer treats a missing field as a non-match (filter) and as the lowest
/// ordering position (sort).
pub trait Record {
    /// Returns the value of the named field, if the entity has it
    fn field(&self, name: &str) -> Option<FieldValue<'_>>;
}
