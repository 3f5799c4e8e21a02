//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod templates;
pub mod validation;

// Re-export commonly used items
pub use templates::{confirmation_email, internal_alert_email, service_name_for_topic};
pub use validation::{parse_payload, validate, REQUIRED_FIELDS};
