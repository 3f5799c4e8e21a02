//! Configuration for the lead intake service
//!
//! Built once in `main` from the environment (and `.env`) and handed to each
//! component at construction time.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use shared::config::{env_opt, env_or, env_parse};
use shared::SharedResult;

pub const DEFAULT_STORE_FILE: &str = "mobtronic_leads.csv";
pub const DEFAULT_LEAD_ID_PREFIX: &str = "MOB";
pub const DEFAULT_SMTP_SERVER: &str = "smtp.office365.com";
pub const DEFAULT_SMTP_PORT: u16 = 587;
pub const DEFAULT_MAILBOX: &str = "support@mobtronic.org";

/// HTTP server and record store settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub store_path: PathBuf,
    pub lead_id_prefix: String,
}

impl ServerConfig {
    pub fn new(bind_address: SocketAddr) -> Self {
        Self {
            bind_address,
            store_path: PathBuf::from(DEFAULT_STORE_FILE),
            lead_id_prefix: DEFAULT_LEAD_ID_PREFIX.to_string(),
        }
    }

    /// Read `LEADS_FILE` and `LEAD_ID_PREFIX`
    pub fn from_env(bind_address: SocketAddr) -> Self {
        Self {
            bind_address,
            store_path: PathBuf::from(env_or("LEADS_FILE", DEFAULT_STORE_FILE)),
            lead_id_prefix: env_or("LEAD_ID_PREFIX", DEFAULT_LEAD_ID_PREFIX),
        }
    }

    pub fn with_store_path(mut self, store_path: PathBuf) -> Self {
        self.store_path = store_path;
        self
    }
}

/// Outbound mail settings shared by both notifications
#[derive(Debug, Clone)]
pub struct MailConfig {
    pub smtp_server: String,
    pub smtp_port: u16,
    pub email_user: String,
    /// Absent password disables all mail
    pub email_password: Option<String>,
    pub internal_email: String,
    pub timeout: Duration,
}

impl MailConfig {
    /// Read `SMTP_SERVER`, `SMTP_PORT`, `EMAIL_USER`, `EMAIL_PASSWORD`, `INTERNAL_EMAIL`
    pub fn from_env() -> SharedResult<Self> {
        Ok(Self {
            smtp_server: env_or("SMTP_SERVER", DEFAULT_SMTP_SERVER),
            smtp_port: env_parse("SMTP_PORT", DEFAULT_SMTP_PORT)?,
            email_user: env_or("EMAIL_USER", DEFAULT_MAILBOX),
            email_password: env_opt("EMAIL_PASSWORD"),
            internal_email: env_or("INTERNAL_EMAIL", DEFAULT_MAILBOX),
            timeout: Duration::from_secs(30),
        })
    }

    /// Settings with no password, i.e. mail disabled
    pub fn disabled() -> Self {
        Self {
            smtp_server: DEFAULT_SMTP_SERVER.to_string(),
            smtp_port: DEFAULT_SMTP_PORT,
            email_user: DEFAULT_MAILBOX.to_string(),
            email_password: None,
            internal_email: DEFAULT_MAILBOX.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.email_password = Some(password.into());
        self
    }

    /// Same settings with mail turned off
    pub fn without_password(mut self) -> Self {
        self.email_password = None;
        self
    }

    pub fn is_configured(&self) -> bool {
        self.email_password.is_some()
    }
}
