//! Service-level tests for the SEO agent

mod analyzer;
mod fetcher;
