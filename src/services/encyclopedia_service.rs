// src/services/encyclopedia_service.rs
use std::sync::Arc;

use crate::domain::{Page, Resource, ResourceKind};
use crate::error::AppResult;
use crate::integrations::api::{EncyclopediaApi, ListQuery};

/// Typed access to the collection and item endpoints
pub struct EncyclopediaService {
    api: Arc<dyn EncyclopediaApi>,
}

impl EncyclopediaService {
    pub fn new(api: Arc<dyn EncyclopediaApi>) -> Self {
        Self { api }
    }

    /// One page of `R`'s collection, results in server order
    pub async fn list<R: Resource>(&self, query: &ListQuery) -> AppResult<Page<R::Summary>> {
        let raw = self.list_json(R::KIND, query).await?;
        let page: Page<R::Summary> = serde_json::from_value(raw)?;

        log::info!(
            "Loaded {} page {} ({} of {} results)",
            R::KIND.collection(),
            query.page,
            page.results.len(),
            page.count
        );
        Ok(page)
    }

    /// A single `R` with its relations expanded
    pub async fn get<R: Resource>(&self, id: u64) -> AppResult<R::Detail> {
        let raw = self.get_json(R::KIND, id).await?;
        let detail = serde_json::from_value(raw)?;

        log::info!("Loaded {} #{}", R::KIND.collection(), id);
        Ok(detail)
    }

    pub async fn list_json(&self, kind: ResourceKind, query: &ListQuery) -> AppResult<serde_json::Value> {
        self.api
            .fetch_collection(kind.collection(), query)
            .await
            .inspect_err(|e| log::warn!("Fetching {} failed: {}", kind.collection(), e))
    }

    pub async fn get_json(&self, kind: ResourceKind, id: u64) -> AppResult<serde_json::Value> {
        self.api
            .fetch_item(kind.collection(), id)
            .await
            .inspect_err(|e| log::warn!("Fetching {} #{} failed: {}", kind.collection(), id, e))
    }
}
