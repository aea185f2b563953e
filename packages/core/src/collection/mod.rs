//! Block Collection Engine
//!
//! Maintains the ordered, uniquely-keyed sequence of blocks being edited for
//! one page, plus the current selection.
//!
//! # Architecture
//!
//! - **Functional Updates**: every mutation consumes the collection and
//!   returns the next state; nothing else holds a reference to it
//! - **No-Op On Bad Arguments**: unknown ids and out-of-range indices come
//!   from racy UI events (pointer drags, stale references) and are ignored
//! - **Position Is Authoritative**: a block's `order` is rewritten from its
//!   index by [`BlockCollection::serialize`]
//!
//! # Examples
//!
//! ```rust
//! use pagecraft_core::collection::BlockCollection;
//! use pagecraft_core::models::BlockType;
//!
//! let collection = BlockCollection::new()
//!     .add_block(BlockType::Heading)
//!     .add_block(BlockType::Text)
//!     .reorder(0, 1);
//!
//! let content = collection.serialize();
//! assert_eq!(content.blocks[0].block_type(), BlockType::Text);
//! assert_eq!(content.blocks[1].order(), 1);
//! ```

mod hydrate;
pub mod ordering;

pub use hydrate::HydrateReport;

#[cfg(test)]
mod collection_test;

use crate::models::{Block, BlockId, BlockType, PageContent};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Ordered blocks of one page plus the selected block
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockCollection {
    blocks: Vec<Block>,
    selected_id: Option<BlockId>,
}

impl BlockCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from already decoded blocks
    ///
    /// A block whose id repeats an earlier block's id keeps its place and
    /// props but receives a freshly generated id.
    pub fn from_blocks(blocks: impl IntoIterator<Item = Block>) -> Self {
        let mut seen = HashSet::new();
        let blocks = blocks
            .into_iter()
            .map(|block| {
                if seen.insert(block.id().clone()) {
                    return block;
                }
                let fresh = BlockId::generate(block.block_type());
                tracing::warn!("Duplicate block id '{}', assigning '{}'", block.id(), fresh);
                seen.insert(fresh.clone());
                Block::from_parts(fresh, block.order(), block.props().clone())
            })
            .collect();
        Self {
            blocks,
            selected_id: None,
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id() == id)
    }

    /// Index of the block with the given id
    pub fn position(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id() == id)
    }

    pub fn contains(&self, id: &BlockId) -> bool {
        self.position(id).is_some()
    }

    /// Id of the selected block; always present in the collection when set
    pub fn selected_id(&self) -> Option<&BlockId> {
        self.selected_id.as_ref()
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.selected_id.as_ref().and_then(|id| self.get(id))
    }

    /// Append a default block of the given kind and select it
    #[must_use]
    pub fn add_block(mut self, block_type: BlockType) -> Self {
        let order = u32::try_from(self.blocks.len()).unwrap_or(u32::MAX);
        let block = Block::new_default(block_type, order);
        tracing::debug!("Adding {} block '{}' at {}", block_type, block.id(), order);

        self.selected_id = Some(block.id().clone());
        self.blocks.push(block);
        self
    }

    /// Remove the block with the given id
    ///
    /// Deleting an absent id is a no-op. Removing the selected block clears
    /// the selection.
    #[must_use]
    pub fn delete_block(mut self, id: &BlockId) -> Self {
        let Some(index) = self.position(id) else {
            tracing::debug!("Ignoring delete of unknown block '{}'", id);
            return self;
        };

        self.blocks.remove(index);
        if self.selected_id.as_ref() == Some(id) {
            self.selected_id = None;
        }
        self
    }

    /// Move the block at `from` to `to`, shifting the blocks in between
    ///
    /// Equivalent to removing the block at `from` and inserting it at `to`
    /// in the shortened list. Out-of-range indices are a no-op.
    #[must_use]
    pub fn reorder(mut self, from: usize, to: usize) -> Self {
        if !ordering::move_item(&mut self.blocks, from, to) {
            tracing::debug!(
                "Ignoring reorder {} -> {} on {} blocks",
                from,
                to,
                self.blocks.len()
            );
        }
        self
    }

    /// Drag-and-drop adapter: move `active` into the slot held by `over`
    ///
    /// Resolves both ids to indices and delegates to [`Self::reorder`].
    /// Unknown ids, or dropping a block onto itself, leave the collection
    /// unchanged.
    #[must_use]
    pub fn move_block(self, active: &BlockId, over: &BlockId) -> Self {
        if active == over {
            return self;
        }
        match (self.position(active), self.position(over)) {
            (Some(from), Some(to)) => self.reorder(from, to),
            _ => {
                tracing::debug!("Ignoring move of '{}' over '{}'", active, over);
                self
            }
        }
    }

    /// Shallow-merge `patch` into the props of the block with the given id
    ///
    /// The block's id, kind and order are preserved. Fields that do not fit
    /// the block kind's schema are ignored; an unknown id is a no-op.
    #[must_use]
    pub fn update_props(mut self, id: &BlockId, patch: &Map<String, Value>) -> Self {
        match self.position(id) {
            Some(index) => {
                let merged = self.blocks[index].with_merged_props(patch);
                self.blocks[index] = merged;
            }
            None => tracing::debug!("Ignoring props update for unknown block '{}'", id),
        }
        self
    }

    /// Select a block, or clear the selection with `None`
    ///
    /// Selecting an id that is not in the collection clears the selection.
    #[must_use]
    pub fn select(mut self, id: Option<&BlockId>) -> Self {
        self.selected_id = id.filter(|id| self.contains(id)).cloned();
        self
    }

    /// Produce the persisted document with `order` rewritten from position
    pub fn serialize(&self) -> PageContent {
        let mut blocks = self.blocks.clone();
        ordering::renumber(&mut blocks);
        PageContent { blocks }
    }
}

impl<'a> IntoIterator for &'a BlockCollection {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl From<PageContent> for BlockCollection {
    fn from(content: PageContent) -> Self {
        Self::from_blocks(content.blocks)
    }
}
