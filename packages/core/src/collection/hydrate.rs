//! Hydration of untrusted page content
//!
//! Stored content may come from older editors, hand edits or corrupted
//! writes. Hydration never fails: it keeps whatever valid subset survives.
//!
//! Per element of `blocks`:
//! - not an object, or missing/unknown `type`: dropped
//! - `props` decoded leniently against the kind's defaults
//! - missing, empty or duplicate `id`: replaced with a fresh id
//! - `order` kept when it is a non-negative integer, otherwise the index

use crate::collection::BlockCollection;
use crate::models::{Block, BlockId, BlockProps, BlockType};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// What hydration had to repair or discard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HydrateReport {
    /// Indices (in the raw `blocks` array) of dropped elements
    pub dropped: Vec<usize>,
    /// Blocks that received a freshly generated id
    pub reassigned_ids: Vec<BlockId>,
}

impl HydrateReport {
    pub fn is_clean(&self) -> bool {
        self.dropped.is_empty() && self.reassigned_ids.is_empty()
    }
}

impl BlockCollection {
    /// Build a collection from a loosely-typed persisted document
    ///
    /// Malformed input degrades to an empty or partial collection. The
    /// selection starts out empty.
    pub fn hydrate(raw: &Value) -> Self {
        Self::hydrate_with_report(raw).0
    }

    /// Like [`Self::hydrate`], for JSON text; unparsable text yields an empty collection
    pub fn hydrate_str(raw: &str) -> Self {
        match serde_json::from_str::<Value>(raw) {
            Ok(value) => Self::hydrate(&value),
            Err(err) => {
                tracing::warn!("Page content is not valid JSON, starting empty: {}", err);
                Self::new()
            }
        }
    }

    /// Hydrate and describe every repair that was made
    pub fn hydrate_with_report(raw: &Value) -> (Self, HydrateReport) {
        let mut report = HydrateReport::default();

        let Some(elements) = raw.get("blocks").and_then(Value::as_array) else {
            if !raw.is_null() {
                tracing::warn!("Page content has no 'blocks' array, starting empty");
            }
            return (Self::new(), report);
        };

        let mut seen: HashSet<String> = HashSet::with_capacity(elements.len());
        let mut blocks = Vec::with_capacity(elements.len());

        for (index, element) in elements.iter().enumerate() {
            let Some(object) = element.as_object() else {
                tracing::warn!("Dropping block {}: not an object", index);
                report.dropped.push(index);
                continue;
            };

            let Some(block_type) = read_type(object) else {
                let tag = object.get("type").cloned().unwrap_or_default();
                tracing::warn!("Dropping block {}: unknown or missing type {}", index, tag);
                report.dropped.push(index);
                continue;
            };

            let id = match object.get("id").and_then(Value::as_str) {
                Some(id) if !id.is_empty() && !seen.contains(id) => BlockId::from(id),
                other => {
                    let fresh = BlockId::generate(block_type);
                    tracing::warn!(
                        "Block {} has {} id, assigning '{}'",
                        index,
                        if other.is_some() { "a duplicate or empty" } else { "no" },
                        fresh
                    );
                    report.reassigned_ids.push(fresh.clone());
                    fresh
                }
            };
            seen.insert(id.as_str().to_string());

            let order = object
                .get("order")
                .and_then(Value::as_u64)
                .and_then(|order| u32::try_from(order).ok())
                .unwrap_or_else(|| u32::try_from(index).unwrap_or(u32::MAX));

            let defaults = BlockProps::default_for(block_type);
            let props = match object.get("props").and_then(Value::as_object) {
                Some(props) => defaults.merge_json(props),
                None => defaults,
            };

            blocks.push(Block::from_parts(id, order, props));
        }

        if !report.is_clean() {
            tracing::info!(
                "Hydrated {} blocks ({} dropped, {} ids reassigned)",
                blocks.len(),
                report.dropped.len(),
                report.reassigned_ids.len()
            );
        }

        (
            Self {
                blocks,
                selected_id: None,
            },
            report,
        )
    }
}

fn read_type(object: &Map<String, Value>) -> Option<BlockType> {
    object
        .get("type")
        .and_then(Value::as_str)
        .and_then(|tag| tag.parse().ok())
}
