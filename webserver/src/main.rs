//! Lead intake service entry point

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use shared::{config, logging, service_info, ServiceId};

use webserver::{
    MailConfig, RealLeadStore, RealMailTransport, ServerConfig, WebServer, WebServerError,
    WebServerResult,
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Lead intake API: CSV record store plus email notifications")]
struct Args {
    /// Interface to bind
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port for HTTP server
    #[arg(long, default_value = "5000")]
    port: u16,

    /// Lead store CSV file (overrides LEADS_FILE)
    #[arg(long)]
    store_path: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    let args = Args::parse();

    config::load_env();
    ServiceId::init_lead_api();
    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(ServiceId::current(), "Mobtronic Lead API");

    let bind_address: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| WebServerError::config(format!("Invalid bind address: {}", e)))?;

    let mut server_config = ServerConfig::from_env(bind_address);
    if let Some(store_path) = args.store_path {
        server_config = server_config.with_store_path(store_path);
    }
    let mail_config = MailConfig::from_env()?;

    service_info!(
        ServiceId::current(),
        "📋 Lead store: {} (ID prefix {})",
        server_config.store_path.display(),
        server_config.lead_id_prefix
    );

    let store = RealLeadStore::new(server_config.store_path.clone(), server_config.lead_id_prefix.clone());
    // A broken SMTP setup must not keep leads from being captured
    let (transport, mail_config) = RealMailTransport::from_config(mail_config);

    let webserver = WebServer::new(server_config, store, transport, mail_config);
    webserver.run().await?;

    logging::log_success(ServiceId::current(), "Lead API stopped gracefully");
    Ok(())
}
