//! Value objects: equality by value, not identity.
//!
//! Value objects have **no identity**. Two value objects with the same values
//! are equal, and "changing" one means building a new one.

use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// Marker trait for value objects.
///
/// - **Value Object**: no identity (`Quantity(10) == Quantity(10)`)
/// - **Entity**: has identity (two items with the same `EntityId` are the same item)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// A stock quantity. Never negative.
///
/// Deserialization goes through [`Quantity::new`], so a persisted negative
/// quantity is rejected at parse time instead of slipping into a store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Quantity(i64);

impl ValueObject for Quantity {}

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    pub fn new(value: i64) -> StoreResult<Self> {
        if value < 0 {
            return Err(StoreError::invalid_value(format!(
                "quantity cannot be negative (got {value})"
            )));
        }
        Ok(Self(value))
    }

    /// A quantity from an unsigned count, which can never be negative.
    pub const fn from_count(count: u32) -> Self {
        Self(count as i64)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for Quantity {
    type Error = StoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for i64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}
