//! PageService Trait - Page Content Persistence Boundary
//!
//! The block editor only needs two things from storage: the raw content
//! document of a page and a way to overwrite it. Everything else about
//! sites and pages (titles, slugs, publishing) lives behind this trait.
//!
//! # Contract
//!
//! - `load_page_content` returns the stored document as untyped JSON. Callers
//!   treat it as untrusted and always pass it through
//!   `BlockCollection::hydrate`.
//! - `save_page_content` overwrites the stored document with the full
//!   serialized collection. There is no merging: the last writer wins.
//! - Implementations enforce that the caller owns the page's site.
//!
//! # Examples
//!
//! ```rust
//! use pagecraft_core::collection::BlockCollection;
//! use pagecraft_core::models::BlockType;
//! use pagecraft_core::services::{InMemoryPageStore, PageService};
//!
//! # tokio_test::block_on(async {
//! let store = InMemoryPageStore::new();
//! let site = store.create_site("user-1", "My site").await;
//! let page = store.create_page(&site.id, "Home", "home").await?;
//!
//! let pages = store.for_owner("user-1");
//! let raw = pages.load_page_content(&page.id).await?;
//! let collection = BlockCollection::hydrate(&raw).add_block(BlockType::Heading);
//! pages.save_page_content(&page.id, &collection.serialize()).await?;
//! # Ok::<(), pagecraft_core::services::PageServiceError>(())
//! # }).unwrap();
//! ```

use crate::models::PageContent;
use crate::services::PageServiceError;
use async_trait::async_trait;
use serde_json::Value;

/// Abstraction over page content persistence
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so one service instance can be
/// shared across request handlers.
#[async_trait]
pub trait PageService: Send + Sync {
    /// Load the raw content document of a page
    ///
    /// # Errors
    ///
    /// - `PageNotFound` if no such page exists
    /// - `AccessDenied` if the caller does not own the page's site
    async fn load_page_content(&self, page_id: &str) -> Result<Value, PageServiceError>;

    /// Overwrite the content document of a page
    ///
    /// # Errors
    ///
    /// - `PageNotFound` if no such page exists
    /// - `AccessDenied` if the caller does not own the page's site
    /// - `StorageError` / `SerializationError` if the write fails
    async fn save_page_content(
        &self,
        page_id: &str,
        content: &PageContent,
    ) -> Result<(), PageServiceError>;
}
