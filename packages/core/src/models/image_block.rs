//! Image Block Properties

use crate::models::props::{Alignment, PatchReader};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Placeholder shown for freshly added image blocks
pub const PLACEHOLDER_IMAGE_SRC: &str = "https://via.placeholder.com/800x400";

/// Properties of an image block
///
/// `width` and `height` are CSS lengths passed straight through to the
/// rendered element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageProps {
    pub src: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    pub alignment: Alignment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounded: Option<bool>,
}

impl Default for ImageProps {
    fn default() -> Self {
        Self {
            src: PLACEHOLDER_IMAGE_SRC.to_string(),
            alt: "Placeholder image".to_string(),
            width: None,
            height: None,
            alignment: Alignment::Center,
            rounded: Some(false),
        }
    }
}

impl ImageProps {
    /// Shallow-merge a JSON patch into a copy of these props
    pub fn merge_json(&self, patch: &Map<String, Value>) -> Self {
        let reader = PatchReader::new(patch, "image");
        Self {
            src: reader.field("src", self.src.clone()),
            alt: reader.field("alt", self.alt.clone()),
            width: reader.optional("width", self.width.clone()),
            height: reader.optional("height", self.height.clone()),
            alignment: reader.field("alignment", self.alignment),
            rounded: reader.optional("rounded", self.rounded),
        }
    }

    pub fn is_rounded(&self) -> bool {
        self.rounded.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let props = ImageProps::default();
        assert_eq!(props.src, PLACEHOLDER_IMAGE_SRC);
        assert_eq!(props.alignment, Alignment::Center);
        assert!(!props.is_rounded());
    }

    #[test]
    fn test_merge_sets_dimensions_and_rounding() {
        let patch = json!({"src": "/media/cat.png", "width": "320px", "rounded": true});
        let merged = ImageProps::default().merge_json(patch.as_object().unwrap());

        assert_eq!(merged.src, "/media/cat.png");
        assert_eq!(merged.width.as_deref(), Some("320px"));
        assert_eq!(merged.height, None);
        assert!(merged.is_rounded());
    }
}
