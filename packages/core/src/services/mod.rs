//! Page Services
//!
//! This module contains the persistence boundary of the block editor:
//!
//! - `PageService` - Load and save a page's content document
//! - `InMemoryPageStore` - Sites and pages held in memory, with
//!   owner-scoped `PageService` views
//! - `PageServiceError` - Errors surfaced to the editor
//!
//! The block engine itself never performs I/O; the editor session calls a
//! `PageService` on explicit open and save.

pub mod error;
pub mod page_service;
pub mod page_store;

pub use error::PageServiceError;
pub use page_service::PageService;
pub use page_store::{InMemoryPageStore, OwnerScopedPages, PageRecord, SiteRecord};
