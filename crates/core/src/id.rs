//! Integer entity identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;

/// Identifier of a stored entity.
///
/// Serialized as a bare integer so persisted records read `"id": 7`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(i32);

impl EntityId {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl core::fmt::Display for EntityId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i32> for EntityId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

impl From<EntityId> for i32 {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

impl FromStr for EntityId {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i32>()
            .map_err(|e| StoreError::invalid_value(format!("EntityId: {e}")))?;
        Ok(Self(value))
    }
}
