//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Purchases and quotations are entities: their quantities change during an
/// allocation run while their identity stays fixed.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
