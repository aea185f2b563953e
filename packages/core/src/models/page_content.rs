//! Persisted Page Content
//!
//! `PageContent` is the only shape that crosses the persistence boundary:
//! `{"blocks": [...]}`. Page storage treats it as an opaque JSON document.

use crate::collection::BlockCollection;
use crate::models::Block;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The persisted document for one page
///
/// Produced by `BlockCollection::serialize`, which guarantees that
/// `blocks[i].order() == i`.
///
/// Deserializing goes through `BlockCollection::hydrate`: it never fails on
/// malformed blocks, it repairs or drops them and renumbers the survivors.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct PageContent {
    pub blocks: Vec<Block>,
}

impl PageContent {
    /// Convert to an untyped JSON value for opaque storage
    pub fn to_value(&self) -> serde_json::Value {
        // Block and its props only contain strings, integers, booleans and
        // string-keyed maps, which always serialize.
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({ "blocks": [] }))
    }
}

impl<'de> Deserialize<'de> for PageContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Ok(BlockCollection::hydrate(&raw).serialize())
    }
}
