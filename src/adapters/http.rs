use crate::config::TomlConfig;
use crate::domain::ports::ShoppingListSource;
use crate::utils::error::{BringError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

/// Bring! 服務的 HTTP 讀取端
pub struct BringClient {
    client: Client,
    api_base: String,
    web_base: String,
    timeout: Option<Duration>,
    headers: HashMap<String, String>,
}

impl BringClient {
    pub fn new(api_base: impl Into<String>, web_base: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            web_base: web_base.into().trim_end_matches('/').to_string(),
            timeout: None,
            headers: HashMap::new(),
        }
    }

    pub fn from_config(config: &TomlConfig) -> Self {
        let mut client = Self::new(config.api_base(), config.web_base());
        client.timeout = config.timeout();
        client.headers = config.headers();
        client
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn articles_url(&self, locale: &str) -> String {
        format!("{}/locale/articles.{}.json", self.web_base, locale)
    }

    pub fn details_url(&self, list_id: &str) -> String {
        format!("{}/bringlists/{}/details", self.api_base, list_id)
    }

    pub fn list_url(&self, list_id: &str) -> String {
        format!("{}/bringlists/{}", self.api_base, list_id)
    }

    async fn get_json(&self, url: &str) -> Result<serde_json::Value> {
        let mut request = self.client.get(url);

        for (key, value) in &self.headers {
            request = request.header(key, value);
        }

        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        tracing::debug!("Making API request to: {}", url);
        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());

        let status = response.status();
        if !status.is_success() {
            return Err(BringError::HttpStatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|source| BringError::DecodeError {
            url: url.to_string(),
            source,
        })
    }
}

#[async_trait]
impl ShoppingListSource for BringClient {
    async fn fetch_articles(&self, locale: &str) -> Result<serde_json::Value> {
        self.get_json(&self.articles_url(locale)).await
    }

    async fn fetch_details(&self, list_id: &str) -> Result<serde_json::Value> {
        self.get_json(&self.details_url(list_id)).await
    }

    async fn fetch_list(&self, list_id: &str) -> Result<serde_json::Value> {
        self.get_json(&self.list_url(list_id)).await
    }
}
