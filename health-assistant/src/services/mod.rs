pub mod assistant;
pub mod cleaner;
pub mod metrics;
pub mod prompts;
pub mod providers;

pub use assistant::{AssistantError, HealthAssistant};
