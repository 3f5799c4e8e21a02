//! Service tests for the lead intake service
//!
//! Each service has its own test file; fixtures and helpers are shared.

pub mod helpers;
mod notification;
