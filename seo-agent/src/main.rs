//! SEO agent entry point

use std::path::PathBuf;

use clap::Parser;
use shared::{config, logging, service_info, ServiceId};

use seo_agent::{AgentConfig, AgentResult, RealAnalysisClient, RealPageFetcher, RealReportWriter, SeoAgent};

#[derive(Parser, Debug)]
#[command(name = "seo-agent")]
#[command(about = "Fetch the site, request an SEO analysis and store the report")]
struct Args {
    /// Page to analyze (overrides SEO_SITE_URL)
    #[arg(long)]
    url: Option<String>,

    /// Directory for report files (overrides SEO_REPORTS_DIR)
    #[arg(long)]
    reports_dir: Option<PathBuf>,

    /// Model name (overrides SEO_MODEL)
    #[arg(long)]
    model: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> AgentResult<()> {
    let args = Args::parse();

    config::load_env();
    ServiceId::init_seo_agent();
    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(ServiceId::current(), "Mobtronic SEO Agent");

    let mut agent_config = AgentConfig::from_env()?;
    if let Some(url) = args.url {
        agent_config = agent_config.with_site_url(url);
    }
    if let Some(reports_dir) = args.reports_dir {
        agent_config = agent_config.with_reports_dir(reports_dir);
    }
    if let Some(model) = args.model {
        agent_config = agent_config.with_model(model);
    }
    agent_config.validate()?;

    let fetcher = RealPageFetcher::new(agent_config.fetch_timeout)?;
    let analyzer = RealAnalysisClient::new(&agent_config)?;
    let store = RealReportWriter::new(agent_config.reports_dir.clone());
    let agent = SeoAgent::new(agent_config, fetcher, analyzer, store);

    match agent.run().await {
        Ok(summary) => {
            service_info!(
                ServiceId::current(),
                "Review {} and apply the changes manually or via the deployment script",
                summary.report_path.display()
            );
            logging::log_success(ServiceId::current(), "SEO run finished");
            Ok(())
        }
        Err(e) => {
            logging::log_error(ServiceId::current(), "SEO run aborted", &e);
            std::process::exit(1);
        }
    }
}
