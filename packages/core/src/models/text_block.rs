//! Text Block Properties

use crate::models::props::{PatchReader, TextAlignment};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Properties of a paragraph of running text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextProps {
    pub text: String,
    pub alignment: TextAlignment,
    /// CSS font size, e.g. `"18px"`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Default for TextProps {
    fn default() -> Self {
        Self {
            text: "New text block. Write your content here.".to_string(),
            alignment: TextAlignment::Left,
            font_size: None,
            color: None,
        }
    }
}

impl TextProps {
    /// Shallow-merge a JSON patch into a copy of these props
    pub fn merge_json(&self, patch: &Map<String, Value>) -> Self {
        let reader = PatchReader::new(patch, "text");
        Self {
            text: reader.field("text", self.text.clone()),
            alignment: reader.field("alignment", self.alignment),
            font_size: reader.optional("fontSize", self.font_size.clone()),
            color: reader.optional("color", self.color.clone()),
        }
    }
}
