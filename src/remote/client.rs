/// HTTP client for the remote catalog API
use crate::{
    config::ApiConfig,
    error::{CatError, CatResult},
    remote::dto::CatImage,
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Source of paginated catalog records
///
/// Implementations fetch one page per call and never retry internally.
#[async_trait]
pub trait ImageSource: Send + Sync {
    /// Fetch page `page` with up to `limit` records
    async fn fetch_page(&self, page: u32, limit: u32) -> CatResult<Vec<CatImage>>;
}

/// Client for the cat-image catalog service
#[derive(Clone)]
pub struct CatApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CatApiClient {
    /// Create a new catalog client
    pub fn new(config: &ApiConfig) -> CatResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl ImageSource for CatApiClient {
    async fn fetch_page(&self, page: u32, limit: u32) -> CatResult<Vec<CatImage>> {
        let url = format!("{}/v1/images/search", self.base_url);

        debug!(page, limit, "fetching catalog page");

        let response = self
            .http
            .get(&url)
            .header("x-api-key", &self.api_key)
            .query(&[("page", page.to_string()), ("limit", limit.to_string())])
            .query(&[
                ("size", "med"),
                ("has_breeds", "true"),
                ("mime_types", "jpg,png"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        let images: Vec<CatImage> = serde_json::from_str(&body)
            .map_err(|e| CatError::Decode(format!("invalid catalog response: {}", e)))?;

        debug!(page, count = images.len(), "catalog page fetched");

        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;

    fn api_config(base_url: &str) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            api_key: "test-key".to_string(),
            page_size: 20,
            user_agent: "cutecats/test".to_string(),
            request_timeout_secs: 10,
        }
    }

    #[test]
    fn new_normalizes_trailing_slash() {
        let client = CatApiClient::new(&api_config("https://api.thecatapi.com/")).unwrap();
        assert_eq!(client.base_url, "https://api.thecatapi.com");
    }

    #[tokio::test]
    async fn fetch_page_fails_fast_on_unreachable_host() {
        // Reserved TEST-NET address: connection fails without DNS involvement.
        let mut config = api_config("http://192.0.2.1:9");
        config.request_timeout_secs = 1;
        let client = CatApiClient::new(&config).unwrap();

        let result = client.fetch_page(0, 1).await;
        assert!(matches!(result, Err(CatError::Network(_))));
    }
}
