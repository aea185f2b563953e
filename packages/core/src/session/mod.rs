//! Editor Session
//!
//! Explicit, session-scoped editing state for one page: the working block
//! collection, whether it has unsaved changes, and the outcome of the last
//! save. One session belongs to one host screen and is passed through the
//! call chain instead of living in ambient global state.
//!
//! # Lifecycle
//!
//! 1. [`EditorSession::open`] loads raw content through a `PageService` and
//!    hydrates it (malformed content degrades to a partial canvas)
//! 2. [`EditorSession::apply`] runs user commands against the collection
//! 3. [`EditorSession::save`] serializes and persists on explicit request;
//!    a failed save leaves every edit in memory for a retry
//! 4. [`EditorSession::close`] discards the session without persisting

mod command;

pub use command::EditorCommand;

use crate::collection::BlockCollection;
use crate::models::PageContent;
use crate::services::{PageService, PageServiceError};

/// Editing state of one page
#[derive(Debug, Clone)]
pub struct EditorSession {
    page_id: String,
    collection: BlockCollection,
    dirty: bool,
    last_save_error: Option<PageServiceError>,
}

impl EditorSession {
    /// Start a session over an already hydrated collection
    pub fn new(page_id: impl Into<String>, collection: BlockCollection) -> Self {
        Self {
            page_id: page_id.into(),
            collection,
            dirty: false,
            last_save_error: None,
        }
    }

    /// Load a page's content and start editing it
    ///
    /// # Errors
    ///
    /// Propagates `PageNotFound` / `AccessDenied` and storage failures from
    /// the service. Malformed content is never an error.
    pub async fn open(service: &dyn PageService, page_id: &str) -> Result<Self, PageServiceError> {
        let raw = service.load_page_content(page_id).await?;
        let (collection, report) = BlockCollection::hydrate_with_report(&raw);

        tracing::info!(
            "Opened page '{}' with {} blocks{}",
            page_id,
            collection.len(),
            if report.is_clean() { "" } else { " (content repaired)" }
        );
        Ok(Self::new(page_id, collection))
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    pub fn collection(&self) -> &BlockCollection {
        &self.collection
    }

    /// Whether block content changed since open or the last successful save
    ///
    /// Selection changes alone do not count.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Error of the most recent failed save, cleared by a successful one
    pub fn last_save_error(&self) -> Option<&PageServiceError> {
        self.last_save_error.as_ref()
    }

    /// Apply one user command; returns whether block content changed
    pub fn apply(&mut self, command: EditorCommand) -> bool {
        let previous = std::mem::take(&mut self.collection);
        let next = command.apply_to(previous.clone());

        let changed = next.blocks() != previous.blocks();
        self.dirty |= changed;
        self.collection = next;
        changed
    }

    /// Apply several commands in order
    pub fn apply_all(&mut self, commands: impl IntoIterator<Item = EditorCommand>) -> bool {
        commands
            .into_iter()
            .fold(false, |changed, command| self.apply(command) || changed)
    }

    /// Persist the current collection
    ///
    /// On success the collection adopts the saved `order` values and the
    /// session is clean. On failure nothing in memory changes except
    /// `last_save_error`, so the user can retry without losing edits.
    pub async fn save(&mut self, service: &dyn PageService) -> Result<PageContent, PageServiceError> {
        let content = self.collection.serialize();

        match service.save_page_content(&self.page_id, &content).await {
            Ok(()) => {
                let selected = self.collection.selected_id().cloned();
                self.collection =
                    BlockCollection::from(content.clone()).select(selected.as_ref());
                self.dirty = false;
                self.last_save_error = None;
                tracing::info!("Saved page '{}' ({} blocks)", self.page_id, content.blocks.len());
                Ok(content)
            }
            Err(err) => {
                tracing::error!("Failed to save page '{}': {}", self.page_id, err);
                self.last_save_error = Some(err.clone());
                Err(err)
            }
        }
    }

    /// End the session without persisting anything
    pub fn close(self) {
        if self.dirty {
            tracing::info!(
                "Discarding unsaved changes to page '{}' ({} blocks)",
                self.page_id,
                self.collection.len()
            );
        }
    }
}
