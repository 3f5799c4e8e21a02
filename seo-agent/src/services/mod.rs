//! Service implementations for the SEO report run

pub mod analyzer;
pub mod fetcher;
pub mod report_writer;

#[cfg(test)]
mod tests;

pub use analyzer::RealAnalysisClient;
pub use fetcher::RealPageFetcher;
pub use report_writer::{RealReportWriter, LATEST_REPORT_FILE};
