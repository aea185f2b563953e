//! Heading Block Properties
//!
//! A heading renders as `<h1>` through `<h6>` depending on `level`.

use crate::models::props::{Alignment, HeadingLevel, PatchReader};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Properties of a heading block
///
/// # Examples
///
/// ```rust
/// use pagecraft_core::models::{Alignment, HeadingProps};
///
/// let props = HeadingProps::default();
/// assert_eq!(props.level.get(), 2);
/// assert_eq!(props.alignment, Alignment::Left);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeadingProps {
    pub text: String,
    pub level: HeadingLevel,
    pub alignment: Alignment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Default for HeadingProps {
    fn default() -> Self {
        Self {
            text: "New heading".to_string(),
            level: HeadingLevel::default(),
            alignment: Alignment::Left,
            color: None,
        }
    }
}

impl HeadingProps {
    /// Shallow-merge a JSON patch into a copy of these props
    pub fn merge_json(&self, patch: &Map<String, Value>) -> Self {
        let reader = PatchReader::new(patch, "heading");
        Self {
            text: reader.field("text", self.text.clone()),
            level: reader.field("level", self.level),
            alignment: reader.field("alignment", self.alignment),
            color: reader.optional("color", self.color.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_updates_given_fields_only() {
        let patch = json!({"text": "Welcome", "level": 1});
        let merged = HeadingProps::default().merge_json(patch.as_object().unwrap());

        assert_eq!(merged.text, "Welcome");
        assert_eq!(merged.level.get(), 1);
        assert_eq!(merged.alignment, Alignment::Left);
        assert_eq!(merged.color, None);
    }

    #[test]
    fn test_merge_rejects_out_of_range_level() {
        let patch = json!({"level": 9});
        let merged = HeadingProps::default().merge_json(patch.as_object().unwrap());
        assert_eq!(merged.level.get(), 2);
    }

    #[test]
    fn test_color_omitted_when_unset() {
        let value = serde_json::to_value(HeadingProps::default()).unwrap();
        assert_eq!(
            value,
            json!({"text": "New heading", "level": 2, "alignment": "left"})
        );
    }
}
