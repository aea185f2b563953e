//! Demo content for local development

use pagecraft_core::collection::BlockCollection;
use pagecraft_core::models::BlockType;
use pagecraft_core::services::{InMemoryPageStore, PageRecord, PageServiceError};
use serde_json::{json, Value};

/// Owner of the seeded demo site
pub const DEMO_USER_ID: &str = "demo-user";

/// Create a demo site with a home page showing every block kind
pub async fn seed_demo_content(store: &InMemoryPageStore) -> Result<PageRecord, PageServiceError> {
    let site = store.create_site(DEMO_USER_ID, "Demo site").await;
    let page = store.create_page(&site.id, "Home", "home").await?;

    let patches = [
        (BlockType::Heading, json!({"text": "Welcome to PageCraft", "level": 1, "alignment": "center"})),
        (BlockType::Text, json!({"text": "Drag blocks to reorder them, or select one to edit its properties."})),
        (BlockType::Spacer, json!({"height": "24px"})),
        (BlockType::Image, json!({"alt": "Placeholder", "rounded": true})),
        (BlockType::Button, json!({"text": "Get started", "href": "/start", "size": "lg"})),
    ];

    let collection = patches
        .into_iter()
        .fold(BlockCollection::new(), |collection, (block_type, patch)| {
            let collection = collection.add_block(block_type);
            match (collection.selected_id().cloned(), patch) {
                (Some(id), Value::Object(patch)) => collection.update_props(&id, &patch),
                _ => collection,
            }
        })
        .select(None);

    let content = serde_json::to_value(collection.serialize())?;
    store.put_raw_content(&page.id, content).await?;

    tracing::info!(
        "Seeded demo page '{}' for user '{}'",
        page.id,
        DEMO_USER_ID
    );
    Ok(page)
}
