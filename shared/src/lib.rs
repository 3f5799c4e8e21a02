//! Shared building blocks for the lead intake service and the SEO agent
//!
//! Holds only what both binaries need: service identity, tracing setup,
//! environment helpers and the shared error type.

pub mod config;
pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
