//! Page content endpoints for the HTTP dev server
//!
//! # Endpoints
//!
//! - `GET /api/health` - Health check endpoint
//! - `GET /api/pages/:page_id/content` - Normalized page content
//! - `PUT /api/pages/:page_id/content` - Replace page content
//! - `GET /api/pages/:page_id/render` - Published HTML for a page
//! - `POST /api/pages/:page_id/commands` - Apply a batch of editor commands
//!
//! Every page endpoint requires an `x-user-id` header naming the caller.

use axum::{
    extract::{Path, Query, State},
    http::HeaderMap,
    response::{Html, Json},
    routing::{get, post},
    Router,
};
use pagecraft_core::collection::BlockCollection;
use pagecraft_core::models::{BlockId, PageContent};
use pagecraft_core::render::HtmlRenderer;
use pagecraft_core::services::{OwnerScopedPages, PageService};
use pagecraft_core::session::{EditorCommand, EditorSession};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{AppState, HttpError};

/// Header carrying the caller's user id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

/// Query parameters for rendering
#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    /// Render the editor canvas instead of the published page
    #[serde(default)]
    editor: bool,
}

/// Body of `POST /api/pages/:page_id/commands`
#[derive(Debug, Deserialize)]
pub struct CommandBatch {
    pub commands: Vec<EditorCommand>,
    /// Persist after applying (default: true)
    #[serde(default = "default_save")]
    pub save: bool,
}

fn default_save() -> bool {
    true
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandResult {
    /// Whether any command changed block content
    pub changed: bool,
    pub saved: bool,
    pub content: PageContent,
    pub selected_id: Option<BlockId>,
}

/// Health check endpoint
///
/// ```bash
/// curl http://localhost:3001/api/health
/// ```
async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Page service view for the calling user
fn pages_for_caller(state: &AppState, headers: &HeaderMap) -> Result<OwnerScopedPages, HttpError> {
    let user_id = headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .ok_or_else(HttpError::unauthenticated)?;
    Ok(state.store.for_owner(user_id))
}

/// Get a page's content, repaired and renumbered
///
/// ```bash
/// curl -H "x-user-id: demo-user" http://localhost:3001/api/pages/<id>/content
/// ```
async fn get_content(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<PageContent>, HttpError> {
    let pages = pages_for_caller(&state, &headers)?;
    let raw = pages.load_page_content(&page_id).await?;
    Ok(Json(BlockCollection::hydrate(&raw).serialize()))
}

/// Replace a page's content
///
/// The body is hydrated first, so malformed blocks are repaired or dropped
/// before anything is stored. A body without a `blocks` array is rejected.
///
/// ```bash
/// curl -X PUT -H "x-user-id: demo-user" -H "Content-Type: application/json" \
///   http://localhost:3001/api/pages/<id>/content \
///   -d '{"blocks": [{"id": "heading-1", "type": "heading", "order": 0, "props": {}}]}'
/// ```
async fn put_content(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<PageContent>, HttpError> {
    let pages = pages_for_caller(&state, &headers)?;
    if !body.get("blocks").is_some_and(Value::is_array) {
        return Err(HttpError::new(
            "Page content must be an object with a 'blocks' array",
            "INVALID_INPUT",
        ));
    }

    let (collection, report) = BlockCollection::hydrate_with_report(&body);
    if !report.is_clean() {
        tracing::info!(
            "Repaired content for page '{}': {} dropped, {} ids reassigned",
            page_id,
            report.dropped.len(),
            report.reassigned_ids.len()
        );
    }

    let content = collection.serialize();
    pages.save_page_content(&page_id, &content).await?;
    Ok(Json(content))
}

/// Render a page to HTML
///
/// `?editor=true` renders the editor canvas with per-block wrappers.
async fn render_page(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
    Query(query): Query<RenderQuery>,
    headers: HeaderMap,
) -> Result<Html<String>, HttpError> {
    let pages = pages_for_caller(&state, &headers)?;
    let raw = pages.load_page_content(&page_id).await?;
    let collection = BlockCollection::hydrate(&raw);

    let html = if query.editor {
        HtmlRenderer::render_collection(&collection)
    } else {
        HtmlRenderer::new().render_page(&collection.serialize())
    };
    Ok(Html(html))
}

/// Apply editor commands to a page
///
/// ```bash
/// curl -X POST -H "x-user-id: demo-user" -H "Content-Type: application/json" \
///   http://localhost:3001/api/pages/<id>/commands \
///   -d '{"commands": [{"op": "addBlock", "blockType": "text"}]}'
/// ```
async fn apply_commands(
    State(state): State<AppState>,
    Path(page_id): Path<String>,
    headers: HeaderMap,
    Json(batch): Json<CommandBatch>,
) -> Result<Json<CommandResult>, HttpError> {
    let pages = pages_for_caller(&state, &headers)?;
    let mut session = EditorSession::open(&pages, &page_id).await?;

    let changed = session.apply_all(batch.commands);
    let should_save = batch.save && session.is_dirty();
    let content = if should_save {
        session.save(&pages).await?
    } else {
        session.collection().serialize()
    };

    let result = CommandResult {
        changed,
        saved: should_save,
        content,
        selected_id: session.collection().selected_id().cloned(),
    };
    session.close();
    Ok(Json(result))
}

/// Create the page endpoint routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/pages/:page_id/content",
            get(get_content).put(put_content),
        )
        .route("/api/pages/:page_id/render", get(render_page))
        .route("/api/pages/:page_id/commands", post(apply_commands))
        .with_state(state)
}
