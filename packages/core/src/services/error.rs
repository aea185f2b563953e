//! Service Layer Error Types
//!
//! This module defines error types for page service operations, providing
//! detailed error handling for persistence and ownership failures.

use crate::models::BlockModelError;
use thiserror::Error;

/// Page service operation errors
///
/// Returned by every `PageService` implementation. The editor surfaces
/// these to the user; none of them corrupt the in-memory collection.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PageServiceError {
    /// Page not found by ID
    #[error("Page not found: {page_id}")]
    PageNotFound { page_id: String },

    /// Site not found by ID
    #[error("Site not found: {site_id}")]
    SiteNotFound { site_id: String },

    /// Caller does not own the site the page belongs to
    #[error("Access denied to page: {page_id}")]
    AccessDenied { page_id: String },

    /// Slug is malformed or already used within the site
    #[error("Invalid slug '{slug}': {reason}")]
    InvalidSlug { slug: String, reason: String },

    /// Content could not be encoded or decoded
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Block model rejected the input
    #[error("Block model error: {0}")]
    BlockModel(#[from] BlockModelError),

    /// Underlying storage failed
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl PageServiceError {
    /// Create a page not found error
    pub fn page_not_found(page_id: impl Into<String>) -> Self {
        Self::PageNotFound {
            page_id: page_id.into(),
        }
    }

    /// Create a site not found error
    pub fn site_not_found(site_id: impl Into<String>) -> Self {
        Self::SiteNotFound {
            site_id: site_id.into(),
        }
    }

    /// Create an access denied error
    pub fn access_denied(page_id: impl Into<String>) -> Self {
        Self::AccessDenied {
            page_id: page_id.into(),
        }
    }

    /// Create an invalid slug error
    pub fn invalid_slug(slug: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSlug {
            slug: slug.into(),
            reason: reason.into(),
        }
    }

    /// Create a storage error
    pub fn storage_error(msg: impl Into<String>) -> Self {
        Self::StorageError(msg.into())
    }

    /// Whether the error means the page does not exist for this caller
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PageNotFound { .. } | Self::SiteNotFound { .. })
    }
}

impl From<serde_json::Error> for PageServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
