//! Webserver state management
//!
//! Read-mostly process state shared by all request handlers.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use crate::config::ServerConfig;

/// Core webserver state
#[derive(Debug)]
pub struct WebServerState {
    pub config: ServerConfig,
    pub email_configured: bool,
    /// Leads accepted since start (not a store row count)
    pub leads_accepted: AtomicU64,
    pub server_start_time: Instant,
}

impl WebServerState {
    pub fn new(config: ServerConfig, email_configured: bool) -> Self {
        Self {
            config,
            email_configured,
            leads_accepted: AtomicU64::new(0),
            server_start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn get_uptime_seconds(&self) -> u64 {
        self.server_start_time.elapsed().as_secs()
    }

    pub fn record_lead_accepted(&self) {
        self.leads_accepted.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get_leads_accepted(&self) -> u64 {
        self.leads_accepted.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_counters() {
        let config = ServerConfig::new("127.0.0.1:5000".parse().unwrap());
        let state = WebServerState::new(config, false);

        assert!(!state.email_configured);
        assert_eq!(state.get_leads_accepted(), 0);

        state.record_lead_accepted();
        state.record_lead_accepted();
        assert_eq!(state.get_leads_accepted(), 2);
    }
}
