use crate::domain::ports::{ConfigProvider, ModernResolver};
use crate::utils::error::{CalcError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_RESOLVER_ENDPOINT: &str = "https://romans.justyy.workers.dev/api/romans/";

#[derive(Debug, Deserialize)]
struct ResolverResponse {
    result: Option<String>,
    error: Option<String>,
}

/// Resolves modern numerals through a JSON service answering
/// `GET {endpoint}?n={value}` with `{"result": "..."}` or `{"error": "..."}`.
#[derive(Debug, Clone)]
pub struct HttpModernResolver {
    client: Client,
    endpoint: String,
}

impl HttpModernResolver {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn with_timeout(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        match config.request_timeout_seconds() {
            Some(seconds) => {
                Self::with_timeout(config.resolver_endpoint(), Duration::from_secs(seconds))
            }
            None => Ok(Self::new(config.resolver_endpoint())),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ModernResolver for HttpModernResolver {
    async fn resolve(&self, value: u16) -> Result<String> {
        tracing::debug!("Requesting modern numeral for {} from {}", value, self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("n", value)])
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Resolver response status: {}", status);

        if !status.is_success() {
            return Err(CalcError::resolution(format!(
                "API request failed with status {}",
                status.as_u16()
            )));
        }

        let body: ResolverResponse = response
            .json()
            .await
            .map_err(|e| CalcError::resolution(format!("Malformed resolver response: {}", e)))?;

        if let Some(error) = body.error.filter(|e| !e.is_empty()) {
            tracing::warn!("Resolver rejected {}: {}", value, error);
            return Err(CalcError::resolution(error));
        }

        body.result
            .ok_or_else(|| CalcError::resolution("Resolver response did not contain a result"))
    }
}
