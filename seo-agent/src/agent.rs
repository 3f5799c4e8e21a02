//! The SEO report run
//!
//! fetch -> load previous report -> analyze -> persist -> list actionable steps.
//! Any failure before persisting aborts the run with nothing written.

use std::path::PathBuf;

use crate::config::AgentConfig;
use crate::core::{interpret_analysis, truncate_chars, SeoReport};
use crate::error::{AgentError, AgentResult};
use crate::traits::{AnalysisClient, PageFetcher, ReportStore};
use shared::{logging, service_info, service_warn, ServiceId};

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report_path: PathBuf,
    pub actionable_steps: Vec<String>,
}

pub struct SeoAgent<F, A, R>
where
    F: PageFetcher,
    A: AnalysisClient,
    R: ReportStore,
{
    config: AgentConfig,
    fetcher: F,
    analyzer: A,
    store: R,
}

impl<F, A, R> SeoAgent<F, A, R>
where
    F: PageFetcher,
    A: AnalysisClient,
    R: ReportStore,
{
    pub fn new(config: AgentConfig, fetcher: F, analyzer: A, store: R) -> Self {
        Self {
            config,
            fetcher,
            analyzer,
            store,
        }
    }

    pub async fn run(&self) -> AgentResult<RunSummary> {
        let url = self.config.site_url.as_str();

        logging::log_progress(ServiceId::current(), "Fetch", &format!("requesting {}", url));
        let content = self
            .fetcher
            .fetch(url)
            .await
            .ok_or_else(|| AgentError::FetchFailed { url: url.to_string() })?;

        let previous_report = match self.store.load_previous().await {
            Ok(previous) => previous,
            Err(e) => {
                service_warn!(ServiceId::current(), "⚠️ Ignoring unreadable previous report: {}", e);
                None
            }
        };
        if previous_report.is_some() {
            service_info!(ServiceId::current(), "📄 Using previous report as context");
        }

        logging::log_progress(ServiceId::current(), "Analysis", &format!("{} chars of content", content.chars().count()));
        let raw = self
            .analyzer
            .analyze(&content, &self.config.keywords, previous_report)
            .await?;
        let analysis = interpret_analysis(&raw)?;

        let (analyzed, _) = truncate_chars(&content, self.config.max_content_chars);
        let report = SeoReport::new(url, self.config.keywords.clone(), analyzed.chars().count(), analysis);
        let report_path = self.store.persist(&report).await?;

        let actionable_steps = report.actionable_steps();
        if actionable_steps.is_empty() {
            service_info!(ServiceId::current(), "No specific actionable steps were provided by the model");
        } else {
            service_info!(ServiceId::current(), "📋 Actionable SEO improvement steps:");
            for step in &actionable_steps {
                service_info!(ServiceId::current(), "  - {}", step);
            }
            service_info!(ServiceId::current(), "Improvements are listed for manual review and application");
        }

        Ok(RunSummary {
            report_path,
            actionable_steps,
        })
    }
}
