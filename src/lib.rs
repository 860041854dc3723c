//! Good Natured Souls content API
//!
//! Aggregates and normalizes records from the headless CMS into flat,
//! presentation-ready domain types. Exposed as a library so the
//! presentation tier and integration tests can call the aggregation
//! operations directly.

pub mod config;
pub mod content;
pub mod error;
pub mod handlers;
pub mod resolve;
pub mod services;
pub mod state;
pub mod test_utils;
