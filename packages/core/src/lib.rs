//! PageCraft Core
//!
//! This crate provides the page content model and block editing engine of
//! the PageCraft site builder, plus the narrow persistence boundary it
//! talks to.
//!
//! # Architecture
//!
//! - **Sum-Typed Blocks**: each block kind carries its own props record;
//!   property access is checked per variant at compile time
//! - **Pure Engine**: collection mutations are functions from state to state
//!   with no I/O; bad indices and stale ids degrade to no-ops
//! - **Tolerant Loading**: stored content is untrusted and hydrated into the
//!   largest valid subset instead of failing
//! - **Explicit Sessions**: selection and unsaved state live in an
//!   `EditorSession`, not in global state
//!
//! # Modules
//!
//! - [`models`] - Block, props records, PageContent
//! - [`collection`] - BlockCollection engine (hydrate, mutate, serialize)
//! - [`render`] - Renderer contract and HTML renderer
//! - [`session`] - Editor session and commands
//! - [`services`] - PageService trait and in-memory store

pub mod collection;
pub mod models;
pub mod render;
pub mod services;
pub mod session;

// Re-export commonly used types
pub use collection::{BlockCollection, HydrateReport};
pub use models::*;
pub use render::{BlockRenderer, HtmlRenderer};
pub use services::{InMemoryPageStore, PageService, PageServiceError};
pub use session::{EditorCommand, EditorSession};
