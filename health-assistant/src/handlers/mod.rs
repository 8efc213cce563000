//! HTTP handlers for the health assistant.

pub mod app;
pub mod chat;
