//! Block Rendering
//!
//! The renderer contract: hosts render each block through a per-variant
//! method, dispatched on the block's props variant by an exhaustive `match`.
//! Adding a block kind therefore fails to compile until every renderer
//! handles it.
//!
//! Every block reaching a renderer has a known kind and props matching that
//! kind; the type system guarantees this for any `Block` value.

mod html;

pub use html::HtmlRenderer;

use crate::models::{Block, BlockProps, ButtonProps, HeadingProps, ImageProps, SpacerProps, TextProps};

/// Per-variant rendering of blocks into some output (`String`, UI nodes, ...)
pub trait BlockRenderer {
    type Output;

    fn heading(&mut self, block: &Block, props: &HeadingProps) -> Self::Output;
    fn text(&mut self, block: &Block, props: &TextProps) -> Self::Output;
    fn image(&mut self, block: &Block, props: &ImageProps) -> Self::Output;
    fn button(&mut self, block: &Block, props: &ButtonProps) -> Self::Output;
    fn spacer(&mut self, block: &Block, props: &SpacerProps) -> Self::Output;

    /// Dispatch one block to the method for its kind
    fn render(&mut self, block: &Block) -> Self::Output {
        match block.props() {
            BlockProps::Heading(props) => self.heading(block, props),
            BlockProps::Text(props) => self.text(block, props),
            BlockProps::Image(props) => self.image(block, props),
            BlockProps::Button(props) => self.button(block, props),
            BlockProps::Spacer(props) => self.spacer(block, props),
        }
    }
}
