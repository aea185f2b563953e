//! Button Block Properties

use crate::models::props::{Alignment, ButtonSize, ButtonVariant, PatchReader};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Properties of a call-to-action button linking to `href`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonProps {
    pub text: String,
    pub href: String,
    pub variant: ButtonVariant,
    pub alignment: Alignment,
    pub size: ButtonSize,
}

impl Default for ButtonProps {
    fn default() -> Self {
        Self {
            text: "Click".to_string(),
            href: "#".to_string(),
            variant: ButtonVariant::Primary,
            alignment: Alignment::Center,
            size: ButtonSize::Md,
        }
    }
}

impl ButtonProps {
    /// Shallow-merge a JSON patch into a copy of these props
    pub fn merge_json(&self, patch: &Map<String, Value>) -> Self {
        let reader = PatchReader::new(patch, "button");
        Self {
            text: reader.field("text", self.text.clone()),
            href: reader.field("href", self.href.clone()),
            variant: reader.field("variant", self.variant),
            alignment: reader.field("alignment", self.alignment),
            size: reader.field("size", self.size),
        }
    }
}
