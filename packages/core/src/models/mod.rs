//! Data Models
//!
//! This module contains the page content data structures:
//!
//! - `Block` - One typed unit of page content (heading, text, image, button, spacer)
//! - `BlockProps` and the per-variant props records
//! - `PageContent` - The persisted `{ blocks }` document
//!
//! Each block kind keeps its props record in its own module so that adding a
//! kind is a local change plus a compile-checked update of every `match`.

mod block;
mod button_block;
mod heading_block;
mod image_block;
mod page_content;
mod props;
mod spacer_block;
mod text_block;


pub use block::{
    create_default, is_valid_type, Block, BlockId, BlockModelError, BlockProps, BlockType,
};
pub use button_block::ButtonProps;
pub use heading_block::HeadingProps;
pub use image_block::{ImageProps, PLACEHOLDER_IMAGE_SRC};
pub use page_content::PageContent;
pub use props::{Alignment, ButtonSize, ButtonVariant, HeadingLevel, TextAlignment};
pub use spacer_block::SpacerProps;
pub use text_block::TextProps;
