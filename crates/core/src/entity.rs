//! Entity traits: identity + the one field a store is allowed to change.

use crate::id::EntityId;
use crate::value_object::Quantity;

/// Entity marker + minimal interface.
///
/// The identifier is fixed at construction and never changes; a store keys
/// entities by it and treats every other field as opaque.
pub trait Entity: Clone {
    /// Returns the entity identifier.
    fn id(&self) -> EntityId;
}

/// An entity carrying a stock quantity that the store may update.
///
/// Entities are values: an update never mutates in place, it derives a new
/// value via [`Stocked::with_quantity`] and the store swaps it in.
pub trait Stocked: Entity {
    fn quantity(&self) -> Quantity;

    /// Returns a copy of `self` with only the quantity changed.
    fn with_quantity(&self, quantity: Quantity) -> Self;
}
