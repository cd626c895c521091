//! Text encoding of a log: a pretty-printed JSON array with one
//! field-labeled object per entity.
//!
//! An empty store encodes to `[]`. Decoding is strict: a record missing a
//! field, carrying an unknown field, or holding an invalid value (e.g. a
//! negative quantity) is a `Format` error whose message names the problem.

use serde::Serialize;
use serde::de::DeserializeOwned;

use stockroom_core::{StoreError, StoreResult};

pub fn encode<T: Serialize>(entities: &[T]) -> StoreResult<String> {
    let mut text = serde_json::to_string_pretty(entities)
        .map_err(|e| StoreError::format(format!("failed to encode entities: {e}")))?;
    text.push('\n');
    Ok(text)
}

pub fn decode<T: DeserializeOwned>(text: &str) -> StoreResult<Vec<T>> {
    serde_json::from_str(text).map_err(|e| StoreError::format(e.to_string()))
}
