//! OpenAI-compatible chat-completions client

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::config::AgentConfig;
use crate::core::{build_prompt, PromptContext, SYSTEM_PROMPT};
use crate::error::{AgentError, AgentResult, ApiFailure};
use crate::traits::AnalysisClient;
use shared::{service_debug, service_info, ServiceId};

pub struct RealAnalysisClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    profile: String,
    max_content_chars: usize,
}

impl RealAnalysisClient {
    pub fn new(config: &AgentConfig) -> AgentResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AgentError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: config.completions_endpoint(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            profile: config.profile.clone(),
            max_content_chars: config.max_content_chars,
        })
    }

    fn request_body(&self, prompt: &str) -> Value {
        json!({
            "model": self.model,
            "response_format": { "type": "json_object" },
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt }
            ]
        })
    }
}

#[async_trait]
impl AnalysisClient for RealAnalysisClient {
    async fn analyze(
        &self,
        content: &str,
        keywords: &[String],
        previous_report: Option<String>,
    ) -> Result<String, ApiFailure> {
        let api_key = self.api_key.as_deref().ok_or(ApiFailure::MissingApiKey)?;

        let prompt = build_prompt(&PromptContext {
            content,
            keywords,
            profile: &self.profile,
            previous_report: previous_report.as_deref(),
            max_content_chars: self.max_content_chars,
        });

        service_info!(ServiceId::current(), "🤖 Analyzing SEO performance with {}", self.model);
        let request_start = std::time::Instant::now();

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&self.request_body(&prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiFailure::Timeout
                } else {
                    ApiFailure::NetworkError(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return match response.status().as_u16() {
                401 => Err(ApiFailure::AuthenticationFailed),
                429 => Err(ApiFailure::RateLimitExceeded),
                503 => Err(ApiFailure::ServiceUnavailable),
                _ => Err(ApiFailure::ServerError(response.status().to_string())),
            };
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| ApiFailure::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let content = response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| ApiFailure::InvalidResponse("No content in response".to_string()))?;

        service_debug!(
            ServiceId::current(),
            "Model answered in {} ms ({} chars)",
            request_start.elapsed().as_millis(),
            content.len()
        );

        Ok(content.to_string())
    }
}
