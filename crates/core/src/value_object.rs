//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new value from the old one.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (a filter selection, a rendered row)
/// - **Entity**: has identity (a product with id 7 is the same product whatever its name)
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct SearchQuery(String);
///
/// impl ValueObject for SearchQuery {}
///
/// assert_eq!(SearchQuery("milk".into()), SearchQuery("milk".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
