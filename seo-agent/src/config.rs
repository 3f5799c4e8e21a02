//! Configuration for the SEO report run
//!
//! Built once in `main` from the environment (and `.env`), then handed to
//! each service at construction time.

use std::path::PathBuf;
use std::time::Duration;

use shared::config::{env_opt, env_or};
use url::Url;

use crate::core::prompt::{DEFAULT_KEYWORDS, DEFAULT_PROFILE};
use crate::error::{AgentError, AgentResult};

pub const DEFAULT_SITE_URL: &str = "https://mobtronic.org";
pub const DEFAULT_REPORTS_DIR: &str = "./seo_reports";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Characters of page content forwarded to the model
pub const DEFAULT_MAX_CONTENT_CHARS: usize = 60_000;

#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub site_url: String,
    pub reports_dir: PathBuf,
    /// Absent key makes the analysis step fail and the run abort
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub fetch_timeout: Duration,
    pub request_timeout: Duration,
    pub max_content_chars: usize,
    pub keywords: Vec<String>,
    /// Expertise summary the recommendations are aligned with
    pub profile: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            reports_dir: PathBuf::from(DEFAULT_REPORTS_DIR),
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            fetch_timeout: Duration::from_secs(30),
            request_timeout: Duration::from_secs(120),
            max_content_chars: DEFAULT_MAX_CONTENT_CHARS,
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            profile: DEFAULT_PROFILE.trim().to_string(),
        }
    }
}

impl AgentConfig {
    /// Read `OPENAI_API_KEY`, `OPENAI_BASE_URL`, `SEO_MODEL`, `SEO_SITE_URL`,
    /// `SEO_REPORTS_DIR` and `SEO_PROFILE_FILE`
    pub fn from_env() -> AgentResult<Self> {
        let defaults = Self::default();

        let profile = match env_opt("SEO_PROFILE_FILE") {
            Some(path) => std::fs::read_to_string(&path)
                .map(|text| text.trim().to_string())
                .map_err(|e| AgentError::config(format!("Cannot read SEO_PROFILE_FILE {}: {}", path, e)))?,
            None => defaults.profile,
        };

        Ok(Self {
            site_url: env_or("SEO_SITE_URL", DEFAULT_SITE_URL),
            reports_dir: PathBuf::from(env_or("SEO_REPORTS_DIR", DEFAULT_REPORTS_DIR)),
            api_key: env_opt("OPENAI_API_KEY"),
            base_url: env_or("OPENAI_BASE_URL", DEFAULT_BASE_URL),
            model: env_or("SEO_MODEL", DEFAULT_MODEL),
            profile,
            ..defaults
        })
    }

    pub fn with_site_url(mut self, site_url: impl Into<String>) -> Self {
        self.site_url = site_url.into();
        self
    }

    pub fn with_reports_dir(mut self, reports_dir: impl Into<PathBuf>) -> Self {
        self.reports_dir = reports_dir.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Chat-completions endpoint under the configured base URL
    pub fn completions_endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    /// Check the URLs before any network call is made
    pub fn validate(&self) -> AgentResult<()> {
        for (name, value) in [("site URL", &self.site_url), ("API base URL", &self.base_url)] {
            let url = Url::parse(value)
                .map_err(|e| AgentError::config(format!("Invalid {} {}: {}", name, value, e)))?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(AgentError::config(format!("Unsupported scheme for {}: {}", name, value)));
            }
        }
        if self.max_content_chars == 0 {
            return Err(AgentError::config("max_content_chars must be positive"));
        }
        Ok(())
    }
}
