use reqwest::Client;

use crate::data_models::SearchResponse;
use crate::error::AppError;

/// HTTP client for the `/api/search` endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: Client,
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse, AppError> {
        let url = format!(
            "{}/api/search?q={}",
            self.base_url,
            urlencoding::encode(query)
        );
        tracing::debug!("fetching {url}");
        let payload = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<SearchResponse>()
            .await?;
        Ok(payload)
    }
}

#[test]
fn test_base_url_trailing_slash() {
    let client = SearchClient::new("http://localhost:3001/");
    assert_eq!(client.base_url(), "http://localhost:3001");
}
