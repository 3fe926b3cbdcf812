//! service-core: Shared infrastructure for the chat relay.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
