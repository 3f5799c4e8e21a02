//! Lead intake service library
//!
//! Accepts website form submissions over HTTP, validates the required fields,
//! appends each lead to a CSV record store and sends a confirmation email to
//! the submitter plus an alert to the operations mailbox.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod webserver_impl;

// Re-export main types
pub use config::{MailConfig, ServerConfig};
pub use error::{NotificationError, WebServerError, WebServerResult};
pub use state::WebServerState;
pub use types::*;
pub use webserver_impl::WebServer;

// Re-export trait definitions
pub use traits::{LeadStore, MailTransport};

// Re-export service implementations
pub use services::{NotificationDispatcher, RealLeadStore, RealMailTransport};
