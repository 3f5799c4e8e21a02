//! Main webserver implementation
//!
//! This module contains the WebServer struct that wires the record store and
//! the notification dispatcher into the HTTP routes, using dependency injection
//! so tests can swap in fakes.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde_json::{json, Value};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;

use crate::config::{MailConfig, ServerConfig};
use crate::core::{parse_payload, validate};
use crate::error::{WebServerError, WebServerResult};
use crate::services::NotificationDispatcher;
use crate::state::WebServerState;
use crate::traits::{LeadStore, MailTransport};
use crate::types::{DeliveryOutcome, LeadSubmission, SubmitLeadResponse};
use shared::{logging, service_error, service_info, service_warn, ServiceId};

const SERVICE_NAME: &str = "Mobtronic Lead API";

/// Main webserver struct with dependency injection
pub struct WebServer<S, M>
where
    S: LeadStore,
    M: MailTransport,
{
    state: Arc<WebServerState>,
    store: Arc<S>,
    notifier: Arc<NotificationDispatcher<M>>,
}

// Manual impl: the services sit behind Arc, so S and M need not be Clone
impl<S, M> Clone for WebServer<S, M>
where
    S: LeadStore,
    M: MailTransport,
{
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            store: self.store.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl<S, M> WebServer<S, M>
where
    S: LeadStore + 'static,
    M: MailTransport + 'static,
{
    /// Create a new webserver with dependency injection
    pub fn new(config: ServerConfig, store: S, transport: M, mail_config: MailConfig) -> Self {
        let state = Arc::new(WebServerState::new(config, mail_config.is_configured()));

        Self {
            state,
            store: Arc::new(store),
            notifier: Arc::new(NotificationDispatcher::new(transport, mail_config)),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(root_handler::<S, M>))
            .route("/health", get(health_check::<S, M>))
            .route("/submit-lead", post(submit_lead_handler::<S, M>))
            .layer(
                ServiceBuilder::new()
                    .layer(CorsLayer::permissive())
                    .into_inner(),
            )
            .with_state(self.clone())
    }

    /// Prepare the record store and serve until Ctrl+C
    pub async fn run(&self) -> WebServerResult<()> {
        self.store.initialize().await?;

        if self.state.email_configured {
            logging::log_success(ServiceId::current(), "Email configuration detected");
        } else {
            service_warn!(
                ServiceId::current(),
                "⚠️ Email not configured - set EMAIL_PASSWORD in .env file"
            );
        }

        let bind_address = self.state.config.bind_address;
        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {}: {}", bind_address, e)))?;

        service_info!(ServiceId::current(), "🌐 Lead API listening on http://{}", bind_address);

        axum::serve(listener, self.build_router())
            .with_graceful_shutdown(async {
                match tokio::signal::ctrl_c().await {
                    Ok(()) => logging::log_shutdown(ServiceId::current(), "Received Ctrl+C signal"),
                    Err(err) => logging::log_error(ServiceId::current(), "Signal handling", &err),
                }
            })
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Server error: {}", e)))?;

        Ok(())
    }

    /// Get server state for external access
    pub fn state(&self) -> &Arc<WebServerState> {
        &self.state
    }

    /// Get the record store for external access
    pub fn store(&self) -> &Arc<S> {
        &self.store
    }
}

// HTTP Handlers

/// Accept a lead: validate, persist, then notify
async fn submit_lead_handler<S, M>(
    State(webserver): State<WebServer<S, M>>,
    body: Bytes,
) -> Result<Json<SubmitLeadResponse>, WebServerError>
where
    S: LeadStore + 'static,
    M: MailTransport + 'static,
{
    let payload = parse_payload(&body)?;
    validate(&payload)?;
    let lead = LeadSubmission::from_payload(&payload);

    let record = webserver.store.append(&lead).await.map_err(|e| {
        service_error!(ServiceId::current(), "❌ Error adding lead to store: {}", e);
        e
    })?;
    webserver.state.record_lead_accepted();
    service_info!(ServiceId::current(), "✅ Added lead to store: {}", record.lead_id);

    let report = webserver.notifier.notify(&record).await;
    for outcome in [&report.confirmation, &report.internal_alert] {
        if let DeliveryOutcome::Failed { recipient, reason } = outcome {
            service_warn!(
                ServiceId::current(),
                "⚠️ Email sending failed for {} ({}): {}",
                record.lead_id,
                recipient,
                reason
            );
        }
    }

    Ok(Json(SubmitLeadResponse {
        success: true,
        message: "Lead submitted successfully".to_string(),
        lead_id: record.lead_id,
    }))
}

/// Health check endpoint
async fn health_check<S, M>(State(webserver): State<WebServer<S, M>>) -> Json<Value>
where
    S: LeadStore + 'static,
    M: MailTransport + 'static,
{
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
        "timestamp": Local::now().to_rfc3339(),
        "store_file": webserver.store.location().display().to_string(),
        "email_configured": webserver.state.email_configured,
        "uptime_seconds": webserver.state.get_uptime_seconds(),
        "leads_accepted": webserver.state.get_leads_accepted()
    }))
}

/// API description
async fn root_handler<S, M>(State(_webserver): State<WebServer<S, M>>) -> Json<Value>
where
    S: LeadStore + 'static,
    M: MailTransport + 'static,
{
    Json(json!({
        "service": "Mobtronic LLC Lead API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "API for capturing website form submissions and storing them in a CSV record store",
        "endpoints": {
            "/submit-lead": "POST - Submit a new lead",
            "/health": "GET - Health check",
            "/": "GET - API information"
        },
        "timestamp": Local::now().to_rfc3339()
    }))
}
