//! Core shared types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// Global service ID singleton - initialized once per process
static SERVICE_ID: OnceLock<ServiceId> = OnceLock::new();

/// Identity reported before `init_*` has been called (library use, tests)
static UNASSIGNED: ServiceId = ServiceId::Unassigned;

/// Identifier for the binary a log line originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceId {
    /// Lead intake HTTP service
    LeadApi,
    /// One-shot SEO report run
    SeoAgent,
    /// No service identity has been initialized
    Unassigned,
}

impl ServiceId {
    /// Initialize the global service ID for the lead intake server
    pub fn init_lead_api() -> &'static ServiceId {
        SERVICE_ID.get_or_init(|| ServiceId::LeadApi)
    }

    /// Initialize the global service ID for the SEO agent
    pub fn init_seo_agent() -> &'static ServiceId {
        SERVICE_ID.get_or_init(|| ServiceId::SeoAgent)
    }

    /// Get the global service ID, `Unassigned` until an `init_*` call
    pub fn current() -> &'static ServiceId {
        SERVICE_ID.get().unwrap_or(&UNASSIGNED)
    }

    /// Crate target used in tracing filters
    pub fn crate_target(&self) -> &'static str {
        match self {
            ServiceId::LeadApi => "webserver",
            ServiceId::SeoAgent => "seo_agent",
            ServiceId::Unassigned => "shared",
        }
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceId::LeadApi => write!(f, "lead_api"),
            ServiceId::SeoAgent => write!(f, "seo_agent"),
            ServiceId::Unassigned => write!(f, "unassigned"),
        }
    }
}
