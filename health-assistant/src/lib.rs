pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use services::HealthAssistant;

/// Shared, read-only application state.
#[derive(Clone)]
pub struct AppState {
    pub assistant: HealthAssistant,
    /// Whether a model credential is configured.
    pub ready: bool,
}

impl AppState {
    pub fn new(assistant: HealthAssistant, ready: bool) -> Self {
        Self { assistant, ready }
    }
}
