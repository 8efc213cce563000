//! service-core: shared infrastructure for the health assistant service.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod retry;
