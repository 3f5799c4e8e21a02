//! SEO report agent library
//!
//! A one-shot run that fetches the company site, asks an OpenAI-compatible
//! model for SEO recommendations and keeps the answer as a timestamped JSON
//! report next to a `latest_seo_report.json` copy.

pub mod agent;
pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod traits;

pub use agent::{RunSummary, SeoAgent};
pub use config::AgentConfig;
pub use crate::core::SeoReport;
pub use error::{AgentError, AgentResult, ApiFailure};
pub use services::{RealAnalysisClient, RealPageFetcher, RealReportWriter};
pub use traits::{AnalysisClient, PageFetcher, ReportStore};
