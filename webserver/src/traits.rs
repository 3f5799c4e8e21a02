//! Service trait definitions for dependency injection
//!
//! All I/O operations are abstracted through these traits for testability

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{NotificationError, WebServerResult};
use crate::types::{LeadRecord, LeadSubmission, OutboundEmail};

/// Append-only lead record store
#[mockall::automock]
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Create the backing file with its header row if it does not exist yet
    async fn initialize(&self) -> WebServerResult<()>;

    /// Append one lead, returning the stored record with its generated ID
    async fn append(&self, lead: &LeadSubmission) -> WebServerResult<LeadRecord>;

    /// Number of lead rows currently stored (header excluded)
    async fn row_count(&self) -> WebServerResult<usize>;

    /// Location of the backing file
    fn location(&self) -> PathBuf;
}

/// Outbound mail transport
#[mockall::automock]
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Deliver one plain-text message
    async fn send(&self, email: OutboundEmail) -> Result<(), NotificationError>;
}
