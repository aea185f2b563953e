//! Block Data Structures
//!
//! This module defines the `Block` type: one unit of page content with a
//! fixed kind and kind-specific properties.
//!
//! # Architecture
//!
//! - **Closed Variant Set**: `heading | text | image | button | spacer`
//! - **Sum-Typed Props**: `BlockProps` carries one strongly-typed record per
//!   variant, so the block kind is derived from the props and can never
//!   disagree with them
//! - **Stable Wire Shape**: serializes as
//!   `{"id": "...", "type": "...", "order": 0, "props": {...}}`
//!
//! # Examples
//!
//! ```rust
//! use pagecraft_core::models::{create_default, is_valid_type, BlockType};
//!
//! let block = create_default("heading", 0)?;
//! assert_eq!(block.block_type(), BlockType::Heading);
//! assert!(block.id().as_str().starts_with("heading-"));
//!
//! assert!(is_valid_type("spacer"));
//! assert!(!is_valid_type("carousel"));
//! # Ok::<(), pagecraft_core::models::BlockModelError>(())
//! ```

use crate::models::{ButtonProps, HeadingProps, ImageProps, SpacerProps, TextProps};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the block model
///
/// Only programming errors surface here; untrusted stored content is
/// handled leniently by `BlockCollection::hydrate` instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlockModelError {
    #[error("Invalid block type: {0}")]
    InvalidBlockType(String),

    #[error("Invalid heading level: {0} (expected 1-6)")]
    InvalidHeadingLevel(u8),
}

impl BlockModelError {
    /// Create an invalid block type error
    pub fn invalid_block_type(candidate: impl Into<String>) -> Self {
        Self::InvalidBlockType(candidate.into())
    }
}

/// The closed set of block kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Heading,
    Text,
    Image,
    Button,
    Spacer,
}

impl BlockType {
    /// Every block kind, in block-library order
    pub const ALL: [BlockType; 5] = [
        Self::Heading,
        Self::Text,
        Self::Image,
        Self::Button,
        Self::Spacer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Heading => "heading",
            Self::Text => "text",
            Self::Image => "image",
            Self::Button => "button",
            Self::Spacer => "spacer",
        }
    }
}

impl FromStr for BlockType {
    type Err = BlockModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|block_type| block_type.as_str() == s)
            .ok_or_else(|| BlockModelError::invalid_block_type(s))
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Membership test against the known block kinds
///
/// Used when reading stored content so that unknown or corrupted type tags
/// are rejected per block instead of failing the whole page.
pub fn is_valid_type(candidate: &str) -> bool {
    candidate.parse::<BlockType>().is_ok()
}

/// Identifier of a block, unique within one page
///
/// Generated ids take the form `<type>-<uuid v7>`: the v7 UUID carries a
/// millisecond timestamp followed by random bits, and the generator is
/// monotonic within the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(String);

impl BlockId {
    /// Generate a fresh id for a block of the given kind
    pub fn generate(block_type: BlockType) -> Self {
        Self(format!("{}-{}", block_type, Uuid::now_v7()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for BlockId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl PartialEq<str> for BlockId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for BlockId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Variant-specific properties; the variant *is* the block's type
#[derive(Debug, Clone, PartialEq)]
pub enum BlockProps {
    Heading(HeadingProps),
    Text(TextProps),
    Image(ImageProps),
    Button(ButtonProps),
    Spacer(SpacerProps),
}

impl BlockProps {
    /// Default props for a block kind
    pub fn default_for(block_type: BlockType) -> Self {
        match block_type {
            BlockType::Heading => Self::Heading(HeadingProps::default()),
            BlockType::Text => Self::Text(TextProps::default()),
            BlockType::Image => Self::Image(ImageProps::default()),
            BlockType::Button => Self::Button(ButtonProps::default()),
            BlockType::Spacer => Self::Spacer(SpacerProps::default()),
        }
    }

    pub fn block_type(&self) -> BlockType {
        match self {
            Self::Heading(_) => BlockType::Heading,
            Self::Text(_) => BlockType::Text,
            Self::Image(_) => BlockType::Image,
            Self::Button(_) => BlockType::Button,
            Self::Spacer(_) => BlockType::Spacer,
        }
    }

    /// Shallow-merge a JSON patch, staying within the same variant
    pub fn merge_json(&self, patch: &Map<String, Value>) -> Self {
        match self {
            Self::Heading(props) => Self::Heading(props.merge_json(patch)),
            Self::Text(props) => Self::Text(props.merge_json(patch)),
            Self::Image(props) => Self::Image(props.merge_json(patch)),
            Self::Button(props) => Self::Button(props.merge_json(patch)),
            Self::Spacer(props) => Self::Spacer(props.merge_json(patch)),
        }
    }
}

impl Serialize for BlockProps {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Heading(props) => props.serialize(serializer),
            Self::Text(props) => props.serialize(serializer),
            Self::Image(props) => props.serialize(serializer),
            Self::Button(props) => props.serialize(serializer),
            Self::Spacer(props) => props.serialize(serializer),
        }
    }
}

/// One unit of page content
///
/// `id` and the block kind never change after creation. `order` is
/// informational; the position inside the owning collection is
/// authoritative and `order` is rewritten from it on save.
///
/// Blocks are not `Deserialize` on their own; stored documents are decoded
/// through `BlockCollection::hydrate`, which `PageContent` also uses.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    id: BlockId,
    order: u32,
    props: BlockProps,
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Block", 4)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("type", &self.block_type())?;
        state.serialize_field("order", &self.order)?;
        state.serialize_field("props", &self.props)?;
        state.end()
    }
}

impl Block {
    /// Create a block of the given kind with a fresh id and default props
    pub fn new_default(block_type: BlockType, order: u32) -> Self {
        Self {
            id: BlockId::generate(block_type),
            order,
            props: BlockProps::default_for(block_type),
        }
    }

    /// Assemble a block from already validated parts
    pub fn from_parts(id: BlockId, order: u32, props: BlockProps) -> Self {
        Self { id, order, props }
    }

    pub fn id(&self) -> &BlockId {
        &self.id
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn block_type(&self) -> BlockType {
        self.props.block_type()
    }

    pub fn props(&self) -> &BlockProps {
        &self.props
    }

    /// Copy of this block with `patch` shallow-merged into its props
    ///
    /// The id, kind and order are preserved.
    pub fn with_merged_props(&self, patch: &Map<String, Value>) -> Self {
        Self {
            id: self.id.clone(),
            order: self.order,
            props: self.props.merge_json(patch),
        }
    }

    pub(crate) fn set_order(&mut self, order: u32) {
        self.order = order;
    }
}

/// Create a default block from a type tag
///
/// # Errors
///
/// Returns `BlockModelError::InvalidBlockType` if `block_type` is not one of
/// the five known kinds. Callers holding a `BlockType` should use
/// [`Block::new_default`] instead.
pub fn create_default(block_type: &str, order: u32) -> Result<Block, BlockModelError> {
    let block_type = block_type.parse::<BlockType>()?;
    Ok(Block::new_default(block_type, order))
}
