//! On-disk report store
//!
//! Every run writes `seo_report_<YYYYMMDD_HHMMSS>.json` and overwrites
//! `latest_seo_report.json` with the same document. The latest file is read
//! back as context on the next run.

use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Local;
use tokio::fs;

use crate::core::SeoReport;
use crate::error::{AgentError, AgentResult};
use crate::traits::ReportStore;
use shared::{service_debug, service_info, ServiceId};

pub const LATEST_REPORT_FILE: &str = "latest_seo_report.json";

pub struct RealReportWriter {
    reports_dir: PathBuf,
}

impl RealReportWriter {
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            reports_dir: reports_dir.into(),
        }
    }

    pub fn latest_path(&self) -> PathBuf {
        self.reports_dir.join(LATEST_REPORT_FILE)
    }

    /// First free `seo_report_<stamp>[_N].json` in the reports directory
    async fn unique_report_path(&self, stamp: &str) -> AgentResult<PathBuf> {
        let mut candidate = self.reports_dir.join(format!("seo_report_{}.json", stamp));
        let mut suffix = 1;
        while fs::try_exists(&candidate)
            .await
            .map_err(|e| AgentError::report_write(&candidate, e))?
        {
            candidate = self.reports_dir.join(format!("seo_report_{}_{}.json", stamp, suffix));
            suffix += 1;
        }
        Ok(candidate)
    }
}

#[async_trait]
impl ReportStore for RealReportWriter {
    async fn load_previous(&self) -> AgentResult<Option<String>> {
        let path = self.latest_path();
        match fs::read_to_string(&path).await {
            Ok(text) => {
                service_debug!(ServiceId::current(), "Loaded previous report from {}", path.display());
                Ok(Some(text))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, report: &SeoReport) -> AgentResult<PathBuf> {
        fs::create_dir_all(&self.reports_dir)
            .await
            .map_err(|e| AgentError::report_write(&self.reports_dir, e))?;

        let body = serde_json::to_vec_pretty(report)?;
        let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
        let report_path = self.unique_report_path(&stamp).await?;

        fs::write(&report_path, &body)
            .await
            .map_err(|e| AgentError::report_write(&report_path, e))?;
        service_info!(ServiceId::current(), "💾 SEO analysis report saved to {}", report_path.display());

        let latest = self.latest_path();
        fs::write(&latest, &body)
            .await
            .map_err(|e| AgentError::report_write(&latest, e))?;

        Ok(report_path)
    }
}
