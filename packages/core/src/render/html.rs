//! HTML rendering of page blocks
//!
//! Produces Tailwind-classed HTML fragments. Text content and attribute
//! values are escaped; props never reach the output unescaped.

use super::BlockRenderer;
use crate::collection::BlockCollection;
use crate::models::{
    Alignment, Block, BlockId, ButtonProps, ButtonSize, ButtonVariant, HeadingProps, ImageProps,
    PageContent, SpacerProps, TextProps,
};
use html_escape::{encode_double_quoted_attribute as escape_attr, encode_text as escape_text};
use regex::Regex;
use std::sync::OnceLock;

const CSS_VALUE_PATTERN: &str =
    r"^(?:[#A-Za-z0-9.%-]+|(?i:rgba?|hsla?)\([0-9.%, ]+\))$";

/// Renders blocks to HTML strings
///
/// The published view renders bare blocks. The editor view wraps each block
/// in a `div` carrying its id and kind, and highlights the selected block.
#[derive(Debug, Clone, Default)]
pub struct HtmlRenderer {
    editor: bool,
    selected: Option<BlockId>,
}

impl HtmlRenderer {
    /// Renderer for published pages
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer for the editor canvas
    pub fn editor(selected: Option<BlockId>) -> Self {
        Self {
            editor: true,
            selected,
        }
    }

    /// Render a persisted document, blocks in order
    pub fn render_page(&mut self, content: &PageContent) -> String {
        self.render_all(content.blocks.iter())
    }

    /// Render the editor canvas for a collection, highlighting its selection
    pub fn render_collection(collection: &BlockCollection) -> String {
        Self::editor(collection.selected_id().cloned()).render_all(collection.iter())
    }

    fn render_all<'a>(&mut self, blocks: impl Iterator<Item = &'a Block>) -> String {
        blocks
            .map(|block| self.render(block))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn wrap(&self, block: &Block, inner: String) -> String {
        if !self.editor {
            return inner;
        }
        let selected = self.selected.as_ref() == Some(block.id());
        format!(
            r#"<div class="block{}" data-block-id="{}" data-block-type="{}">{}</div>"#,
            if selected { " block-selected" } else { "" },
            escape_attr(block.id().as_str()),
            block.block_type(),
            inner
        )
    }
}

impl BlockRenderer for HtmlRenderer {
    type Output = String;

    fn heading(&mut self, block: &Block, props: &HeadingProps) -> String {
        let level = props.level.get();
        let size = match level {
            1 => "text-4xl md:text-5xl",
            2 => "text-3xl md:text-4xl",
            3 => "text-2xl md:text-3xl",
            4 => "text-xl md:text-2xl",
            5 => "text-lg md:text-xl",
            _ => "text-base md:text-lg",
        };
        let inner = format!(
            r#"<h{level} class="font-bold {size} text-{align}"{style}>{text}</h{level}>"#,
            level = level,
            size = size,
            align = props.alignment.as_str(),
            style = style_attr(&[("color", props.color.as_deref())]),
            text = escape_text(&props.text),
        );
        self.wrap(block, inner)
    }

    fn text(&mut self, block: &Block, props: &TextProps) -> String {
        let inner = format!(
            r#"<p class="text-{}"{}>{}</p>"#,
            props.alignment.as_str(),
            style_attr(&[
                ("font-size", props.font_size.as_deref()),
                ("color", props.color.as_deref()),
            ]),
            escape_text(&props.text),
        );
        self.wrap(block, inner)
    }

    fn image(&mut self, block: &Block, props: &ImageProps) -> String {
        let placement = match props.alignment {
            Alignment::Left => "mr-auto",
            Alignment::Center => "mx-auto",
            Alignment::Right => "ml-auto",
        };
        let inner = format!(
            r#"<div class="{}"><img src="{}" alt="{}"{} class="max-w-full h-auto{}"></div>"#,
            placement,
            escape_attr(&props.src),
            escape_attr(&props.alt),
            style_attr(&[
                ("width", props.width.as_deref()),
                ("height", props.height.as_deref()),
            ]),
            if props.is_rounded() { " rounded-xl" } else { "" },
        );
        self.wrap(block, inner)
    }

    fn button(&mut self, block: &Block, props: &ButtonProps) -> String {
        let justify = match props.alignment {
            Alignment::Left => "justify-start",
            Alignment::Center => "justify-center",
            Alignment::Right => "justify-end",
        };
        let variant = match props.variant {
            ButtonVariant::Primary => "bg-blue-500 hover:bg-blue-600 text-white",
            ButtonVariant::Secondary => "bg-gray-500 hover:bg-gray-600 text-white",
            ButtonVariant::Outline => "border-2 border-blue-500 text-blue-500 hover:bg-blue-50",
        };
        let size = match props.size {
            ButtonSize::Sm => "px-4 py-2 text-sm",
            ButtonSize::Md => "px-6 py-3 text-base",
            ButtonSize::Lg => "px-8 py-4 text-lg",
        };
        let inner = format!(
            r#"<div class="flex {}"><a href="{}" class="inline-block rounded-lg font-medium transition-colors {} {}">{}</a></div>"#,
            justify,
            escape_attr(&props.href),
            variant,
            size,
            escape_text(&props.text),
        );
        self.wrap(block, inner)
    }

    fn spacer(&mut self, block: &Block, props: &SpacerProps) -> String {
        let outline = if self.editor {
            r#" class="border-2 border-dashed border-gray-200""#
        } else {
            ""
        };
        let inner = format!(
            r#"<div{}{}></div>"#,
            style_attr(&[("height", Some(props.height.as_str()))]),
            outline
        );
        self.wrap(block, inner)
    }
}

/// ` style="k: v; ..."` for the present, safe declarations, or nothing
fn style_attr(declarations: &[(&str, Option<&str>)]) -> String {
    let body = declarations
        .iter()
        .filter_map(|(property, value)| {
            let value = (*value)?.trim();
            if is_safe_css_value(value) {
                Some(format!("{}: {}", property, value))
            } else {
                tracing::debug!("Dropping unsafe {} value {:?}", property, value);
                None
            }
        })
        .collect::<Vec<_>>()
        .join("; ");
    if body.is_empty() {
        String::new()
    } else {
        format!(r#" style="{}""#, escape_attr(&body))
    }
}

/// Whether a prop value can stand alone as one CSS declaration value
///
/// Accepts lengths, keywords, hex colours and `rgb()`/`rgba()`/`hsl()`/
/// `hsla()` colours. Anything able to end the declaration or load a
/// resource (`;`, braces, quotes, `url(`, `expression(`) is rejected.
fn is_safe_css_value(value: &str) -> bool {
    static CSS_VALUE_REGEX: OnceLock<Regex> = OnceLock::new();
    let css_value_regex = CSS_VALUE_REGEX.get_or_init(|| Regex::new(CSS_VALUE_PATTERN).unwrap());
    css_value_regex.is_match(value)
}
