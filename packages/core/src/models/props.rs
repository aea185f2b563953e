//! Shared Block Property Types
//!
//! Enumerations reused across block variants (alignment, heading level,
//! button styling) and the lenient patch reader that every props struct
//! uses to merge loosely-typed JSON into its strongly-typed fields.
//!
//! # Lenient Merging
//!
//! Stored page content and property-panel edits arrive as untyped JSON. The
//! [`PatchReader`] applies one field at a time:
//!
//! - key absent: the current value is kept
//! - value decodes into the field's type: the new value wins
//! - value does not decode (wrong type, out of range, unknown variant): the
//!   current value is kept and the rejection is logged at `debug`
//! - optional field set to `null`: the value is cleared

use crate::models::BlockModelError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Horizontal alignment for headings, images and buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Alignment for running text, which additionally supports justification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl TextAlignment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
            Self::Justify => "justify",
        }
    }
}

/// Visual style of a button block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
}

impl ButtonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Outline => "outline",
        }
    }
}

/// Size of a button block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// Heading level, always within `1..=6`
///
/// Serialized as a bare integer. Values outside the range fail to decode,
/// which makes the lenient reader keep the previous level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct HeadingLevel(u8);

impl HeadingLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 6;

    pub fn new(level: u8) -> Result<Self, BlockModelError> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(BlockModelError::InvalidHeadingLevel(level))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for HeadingLevel {
    fn default() -> Self {
        Self(2)
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = BlockModelError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl From<HeadingLevel> for u8 {
    fn from(level: HeadingLevel) -> Self {
        level.0
    }
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reads individual fields out of a JSON patch object
///
/// `variant` only labels log output so a rejected field can be traced back
/// to the block kind it was aimed at.
pub(crate) struct PatchReader<'a> {
    patch: &'a Map<String, Value>,
    variant: &'static str,
}

impl<'a> PatchReader<'a> {
    pub(crate) fn new(patch: &'a Map<String, Value>, variant: &'static str) -> Self {
        Self { patch, variant }
    }

    /// Merge a required field
    pub(crate) fn field<T: DeserializeOwned>(&self, key: &str, current: T) -> T {
        match self.patch.get(key) {
            None => current,
            Some(value) => match serde_json::from_value::<T>(value.clone()) {
                Ok(decoded) => decoded,
                Err(err) => {
                    tracing::debug!(
                        "Ignoring {} prop '{}' = {}: {}",
                        self.variant,
                        key,
                        value,
                        err
                    );
                    current
                }
            },
        }
    }

    /// Merge an optional field; an explicit `null` clears it
    pub(crate) fn optional<T: DeserializeOwned>(&self, key: &str, current: Option<T>) -> Option<T> {
        match self.patch.get(key) {
            None => current,
            Some(Value::Null) => None,
            Some(value) => match serde_json::from_value::<T>(value.clone()) {
                Ok(decoded) => Some(decoded),
                Err(err) => {
                    tracing::debug!(
                        "Ignoring {} prop '{}' = {}: {}",
                        self.variant,
                        key,
                        value,
                        err
                    );
                    current
                }
            },
        }
    }
}
