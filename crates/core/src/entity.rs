//! Entity trait: identity across the reference collections.

/// Entity marker + minimal interface.
///
/// Reference records (users, categories, products) are entities: they are
/// looked up and joined by identifier, never by value.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
