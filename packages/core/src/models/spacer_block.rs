//! Spacer Block Properties

use crate::models::props::PatchReader;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Vertical whitespace; `height` is a CSS length such as `"40px"`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacerProps {
    pub height: String,
}

impl Default for SpacerProps {
    fn default() -> Self {
        Self {
            height: "40px".to_string(),
        }
    }
}

impl SpacerProps {
    /// Shallow-merge a JSON patch into a copy of these props
    pub fn merge_json(&self, patch: &Map<String, Value>) -> Self {
        let reader = PatchReader::new(patch, "spacer");
        Self {
            height: reader.field("height", self.height.clone()),
        }
    }
}
