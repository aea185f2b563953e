//! User commands dispatched into the block engine

use crate::collection::BlockCollection;
use crate::models::{BlockId, BlockType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One user-initiated edit
///
/// Serialized with an `op` tag so hosts can send batches over the wire:
/// `{"op": "updateProps", "id": "text-...", "patch": {"text": "Hi"}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum EditorCommand {
    AddBlock {
        #[serde(rename = "blockType")]
        block_type: BlockType,
    },
    DeleteBlock {
        id: BlockId,
    },
    Reorder {
        from: usize,
        to: usize,
    },
    /// Drop the `active` block onto the slot of `over`
    MoveBlock {
        active: BlockId,
        over: BlockId,
    },
    UpdateProps {
        id: BlockId,
        patch: Map<String, Value>,
    },
    Select {
        #[serde(default)]
        id: Option<BlockId>,
    },
}

impl EditorCommand {
    /// Run the command against a collection, producing the next state
    pub fn apply_to(self, collection: BlockCollection) -> BlockCollection {
        match self {
            Self::AddBlock { block_type } => collection.add_block(block_type),
            Self::DeleteBlock { id } => collection.delete_block(&id),
            Self::Reorder { from, to } => collection.reorder(from, to),
            Self::MoveBlock { active, over } => collection.move_block(&active, &over),
            Self::UpdateProps { id, patch } => collection.update_props(&id, &patch),
            Self::Select { id } => collection.select(id.as_ref()),
        }
    }
}
