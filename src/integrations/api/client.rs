// src/integrations/api/client.rs
//
// REST client for the knowledge base API
//
// - GET only, no auth, JSON in
// - One request per call: no retry, no cache
// - Maps HTTP failures to AppError, never interprets payloads

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode, Url};
use std::time::Duration;

use super::port::EncyclopediaApi;
use super::query::ListQuery;
use crate::config::Config;
use crate::error::{AppError, AppResult};

/// HTTP client for the `/api/` endpoints
pub struct ApiClient {
    base_url: Url,
    http_client: Client,
}

impl ApiClient {
    pub fn new(config: &Config) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            base_url: parse_base_url(&config.api_base_url)?,
            http_client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn collection_url(&self, collection: &str) -> AppResult<Url> {
        self.base_url
            .join(&format!("{}/", collection))
            .map_err(|e| AppError::Other(format!("Invalid collection path {:?}: {}", collection, e)))
    }

    pub fn item_url(&self, collection: &str, id: u64) -> AppResult<Url> {
        self.base_url
            .join(&format!("{}/{}/", collection, id))
            .map_err(|e| AppError::Other(format!("Invalid item path {:?}: {}", collection, e)))
    }

    // ========================================================================
    // INTERNAL: request execution
    // ========================================================================

    async fn get_json(&self, url: Url, pairs: &[(&'static str, String)]) -> AppResult<serde_json::Value> {
        log::debug!("GET {} {:?}", url, pairs);

        let response = self
            .http_client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .query(pairs)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound);
        }
        if !status.is_success() {
            return Err(AppError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl EncyclopediaApi for ApiClient {
    async fn fetch_collection(&self, collection: &str, query: &ListQuery) -> AppResult<serde_json::Value> {
        let url = self.collection_url(collection)?;
        self.get_json(url, &query.to_pairs()).await
    }

    async fn fetch_item(&self, collection: &str, id: u64) -> AppResult<serde_json::Value> {
        let url = self.item_url(collection, id)?;
        self.get_json(url, &[]).await
    }
}

/// Parse the API root, making sure it ends with a slash so joins stay under it
pub fn parse_base_url(raw: &str) -> AppResult<Url> {
    let trimmed = raw.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    };

    let url = Url::parse(&normalized)
        .map_err(|e| AppError::Config(format!("invalid API base URL {:?}: {}", raw, e)))?;

    if url.cannot_be_a_base() {
        return Err(AppError::Config(format!("API base URL {:?} cannot be a base", raw)));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        let config = Config {
            api_base_url: base.to_string(),
            ..Config::default()
        };
        ApiClient::new(&config).unwrap()
    }

    #[test]
    fn test_client_creation() {
        let client = client("http://localhost:8000/api/");
        assert_eq!(client.base_url().as_str(), "http://localhost:8000/api/");
    }

    #[test]
    fn test_trailing_slash_added() {
        let client = client("https://opkb.example/api");
        assert_eq!(
            client.collection_url("crews").unwrap().as_str(),
            "https://opkb.example/api/crews/"
        );
    }

    #[test]
    fn test_item_url() {
        let client = client("http://localhost:8000/api/");
        assert_eq!(
            client.item_url("fruits", 12).unwrap().as_str(),
            "http://localhost:8000/api/fruits/12/"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(matches!(parse_base_url("not a url"), Err(AppError::Config(_))));
        assert!(matches!(parse_base_url("mailto:luffy@example.com"), Err(AppError::Config(_))));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_http_error() {
        // Bind then release an ephemeral port so nothing listens on it
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let config = Config {
            api_base_url: format!("http://127.0.0.1:{}/api/", port),
            timeout_secs: 2,
            ..Config::default()
        };
        let client = ApiClient::new(&config).unwrap();
        let err = client
            .fetch_collection("characters", &ListQuery::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Http(_)));
    }
}
