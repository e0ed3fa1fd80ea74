// src/integrations/api/port.rs
//
// Transport port for the encyclopedia API.
// Returns raw JSON; typing happens in the service layer so the port
// stays object-safe and mockable.

use async_trait::async_trait;

use super::query::ListQuery;
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EncyclopediaApi: Send + Sync {
    /// GET `{base}{collection}/?page=..[&search=..][&ordering=..]`
    async fn fetch_collection(&self, collection: &str, query: &ListQuery) -> AppResult<serde_json::Value>;

    /// GET `{base}{collection}/{id}/`
    async fn fetch_item(&self, collection: &str, id: u64) -> AppResult<serde_json::Value>;
}
