//! Shared service plumbing: configuration loading, tracing setup, HTTP
//! middleware and sea-orm helpers.

pub mod config;
pub mod health;
pub mod middleware;
pub mod sea_ext;
pub mod serde;
pub mod tracing;
