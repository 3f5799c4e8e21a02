//! HTTP page fetcher

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{AgentError, AgentResult};
use crate::traits::PageFetcher;
use shared::{service_info, service_warn, ServiceId};

pub struct RealPageFetcher {
    client: reqwest::Client,
}

impl RealPageFetcher {
    pub fn new(timeout: Duration) -> AgentResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("mobtronic-seo-agent/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AgentError::config(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for RealPageFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        service_info!(ServiceId::current(), "🌐 Fetching current content from {}", url);

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                service_warn!(ServiceId::current(), "❌ Could not fetch {}: {}", url, e);
                return None;
            }
        };

        let status = response.status();
        if !status.is_success() {
            service_warn!(ServiceId::current(), "❌ Could not fetch {}: HTTP {}", url, status);
            return None;
        }

        match response.text().await {
            Ok(body) if body.trim().is_empty() => {
                service_warn!(ServiceId::current(), "⚠️ {} returned an empty body", url);
                None
            }
            Ok(body) => Some(body),
            Err(e) => {
                service_warn!(ServiceId::current(), "❌ Could not read body from {}: {}", url, e);
                None
            }
        }
    }
}
