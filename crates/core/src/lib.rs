//! `stockroom-core` — building blocks shared by every entity store.
//!
//! This crate contains **pure** primitives (no IO): entity capabilities,
//! identifiers, validated values and the store error taxonomy.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::{Entity, Stocked};
pub use error::{StoreError, StoreResult};
pub use id::EntityId;
pub use value_object::{Quantity, ValueObject};
