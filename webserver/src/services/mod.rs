//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod mailer;
pub mod notification;
pub mod record_store;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use mailer::RealMailTransport;
pub use notification::NotificationDispatcher;
pub use record_store::RealLeadStore;
