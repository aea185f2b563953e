//! In-Memory Page Store
//!
//! Reference `PageService` backend holding sites and pages in process
//! memory. Used by the dev server and by tests.
//!
//! # Ownership
//!
//! Every site has an owner user id. Content access goes through an
//! [`OwnerScopedPages`] view obtained from [`InMemoryPageStore::for_owner`],
//! which refuses pages whose site belongs to someone else.

use crate::models::PageContent;
use crate::services::{PageService, PageServiceError};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tokio::sync::RwLock;
use uuid::Uuid;

const SLUG_PATTERN: &str = r"^[a-z0-9-]+$";

/// A site owned by one user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteRecord {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A page of a site, with its opaque content document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRecord {
    pub id: String,
    pub site_id: String,
    pub title: String,
    pub slug: String,
    /// Stored as-is; no schema is enforced at this layer
    pub content: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct StoreState {
    sites: HashMap<String, SiteRecord>,
    pages: HashMap<String, PageRecord>,
}

/// Shared in-memory storage for sites and pages
///
/// Cloning is cheap; clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPageStore {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryPageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a site owned by `owner_id`
    pub async fn create_site(&self, owner_id: &str, name: &str) -> SiteRecord {
        let site = SiteRecord {
            id: Uuid::new_v4().to_string(),
            owner_id: owner_id.to_string(),
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.state
            .write()
            .await
            .sites
            .insert(site.id.clone(), site.clone());
        tracing::debug!("Created site '{}' for owner '{}'", site.id, owner_id);
        site
    }

    /// Create an empty page in a site
    ///
    /// # Errors
    ///
    /// - `SiteNotFound` if the site does not exist
    /// - `InvalidSlug` if the slug is not lowercase letters, digits and
    ///   dashes, or is already used by another page of the same site
    pub async fn create_page(
        &self,
        site_id: &str,
        title: &str,
        slug: &str,
    ) -> Result<PageRecord, PageServiceError> {
        validate_slug(slug)?;

        let mut state = self.state.write().await;
        if !state.sites.contains_key(site_id) {
            return Err(PageServiceError::site_not_found(site_id));
        }
        if state
            .pages
            .values()
            .any(|page| page.site_id == site_id && page.slug == slug)
        {
            return Err(PageServiceError::invalid_slug(
                slug,
                "already used by another page of this site",
            ));
        }

        let now = Utc::now();
        let page = PageRecord {
            id: Uuid::new_v4().to_string(),
            site_id: site_id.to_string(),
            title: title.to_string(),
            slug: slug.to_string(),
            content: json!({ "blocks": [] }),
            created_at: now,
            updated_at: now,
        };
        state.pages.insert(page.id.clone(), page.clone());
        tracing::debug!("Created page '{}' ({}) in site '{}'", page.id, slug, site_id);
        Ok(page)
    }

    pub async fn site(&self, site_id: &str) -> Option<SiteRecord> {
        self.state.read().await.sites.get(site_id).cloned()
    }

    pub async fn page(&self, page_id: &str) -> Option<PageRecord> {
        self.state.read().await.pages.get(page_id).cloned()
    }

    /// Pages of a site, ordered by creation time
    pub async fn pages_for_site(&self, site_id: &str) -> Vec<PageRecord> {
        let state = self.state.read().await;
        let mut pages: Vec<PageRecord> = state
            .pages
            .values()
            .filter(|page| page.site_id == site_id)
            .cloned()
            .collect();
        pages.sort_by_key(|page| page.created_at);
        pages
    }

    /// Overwrite raw content without any ownership check
    ///
    /// Intended for seeding and migrations; editor traffic goes through
    /// [`OwnerScopedPages`].
    pub async fn put_raw_content(&self, page_id: &str, content: Value) -> Result<(), PageServiceError> {
        let mut state = self.state.write().await;
        let page = state
            .pages
            .get_mut(page_id)
            .ok_or_else(|| PageServiceError::page_not_found(page_id))?;
        page.content = content;
        page.updated_at = Utc::now();
        Ok(())
    }

    /// A `PageService` view that only serves pages of sites owned by `owner_id`
    pub fn for_owner(&self, owner_id: impl Into<String>) -> OwnerScopedPages {
        OwnerScopedPages {
            store: self.clone(),
            owner_id: owner_id.into(),
        }
    }
}

/// Page content access on behalf of one user
#[derive(Debug, Clone)]
pub struct OwnerScopedPages {
    store: InMemoryPageStore,
    owner_id: String,
}

impl OwnerScopedPages {
    fn authorize(&self, state: &StoreState, page_id: &str) -> Result<(), PageServiceError> {
        let page = state
            .pages
            .get(page_id)
            .ok_or_else(|| PageServiceError::page_not_found(page_id))?;
        let site = state
            .sites
            .get(&page.site_id)
            .ok_or_else(|| PageServiceError::site_not_found(&page.site_id))?;

        if site.owner_id != self.owner_id {
            tracing::warn!(
                "User '{}' denied access to page '{}' of site '{}'",
                self.owner_id,
                page_id,
                site.id
            );
            return Err(PageServiceError::access_denied(page_id));
        }
        Ok(())
    }
}

#[async_trait]
impl PageService for OwnerScopedPages {
    async fn load_page_content(&self, page_id: &str) -> Result<Value, PageServiceError> {
        let state = self.store.state.read().await;
        self.authorize(&state, page_id)?;
        Ok(state
            .pages
            .get(page_id)
            .map(|page| page.content.clone())
            .unwrap_or(Value::Null))
    }

    async fn save_page_content(
        &self,
        page_id: &str,
        content: &PageContent,
    ) -> Result<(), PageServiceError> {
        let value = serde_json::to_value(content)?;

        let mut state = self.store.state.write().await;
        self.authorize(&state, page_id)?;
        if let Some(page) = state.pages.get_mut(page_id) {
            page.content = value;
            page.updated_at = Utc::now();
        }
        tracing::debug!(
            "Saved {} blocks to page '{}'",
            content.blocks.len(),
            page_id
        );
        Ok(())
    }
}

fn validate_slug(slug: &str) -> Result<(), PageServiceError> {
    static SLUG_REGEX: OnceLock<Regex> = OnceLock::new();
    let slug_regex = SLUG_REGEX.get_or_init(|| Regex::new(SLUG_PATTERN).unwrap());

    if slug_regex.is_match(slug) {
        Ok(())
    } else {
        Err(PageServiceError::invalid_slug(
            slug,
            "may only contain lowercase letters, digits and dashes",
        ))
    }
}
