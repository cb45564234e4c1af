use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::{api::types::TransportError, config};

/// Thin JSON-over-HTTP helper. Every call is independent: no retries, no
/// status inspection and no implicit auth header.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: Some(config::normalize_base_url(&base_url).unwrap_or(base_url)),
        }
    }

    pub(super) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(super) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(super) async fn url_for(&self, path: &str) -> String {
        join_url(&self.resolved_base_url().await, path)
    }

    pub async fn get(&self, path: &str) -> Result<Value, TransportError> {
        let url = self.url_for(path).await;
        log::debug!("GET {}", url);
        let response = self
            .http_client()
            .get(&url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        read_json(response).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Value, TransportError>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url_for(path).await;
        log::debug!("POST {}", url);
        let response = self
            .http_client()
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;
        read_json(response).await
    }
}

async fn read_json(response: reqwest::Response) -> Result<Value, TransportError> {
    response
        .json::<Value>()
        .await
        .map_err(|e| TransportError::InvalidBody(e.to_string()))
}

pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        base.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}
