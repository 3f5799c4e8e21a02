//! Service trait definitions for dependency injection
//!
//! Network and disk access sit behind these traits so the run can be tested
//! with mocks.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::core::SeoReport;
use crate::error::{AgentResult, ApiFailure};

/// Fetches the page under analysis
#[mockall::automock]
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Page body, or `None` when nothing usable came back
    async fn fetch(&self, url: &str) -> Option<String>;
}

/// Sends page content to the language model
#[mockall::automock]
#[async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Raw text of the model's answer
    async fn analyze(
        &self,
        content: &str,
        keywords: &[String],
        previous_report: Option<String>,
    ) -> Result<String, ApiFailure>;
}

/// Keeps reports on disk between runs
#[mockall::automock]
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Contents of the latest report, if one was written before
    async fn load_previous(&self) -> AgentResult<Option<String>>;

    /// Write a timestamped report and refresh the latest copy, returning the timestamped path
    async fn persist(&self, report: &SeoReport) -> AgentResult<PathBuf>;
}
