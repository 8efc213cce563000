use health_assistant::config::AssistantConfig;
use health_assistant::services::metrics::init_metrics;
use health_assistant::startup::Application;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AssistantConfig::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "health-assistant",
        config.common.log_level(),
        config.otlp_endpoint.as_deref(),
    );
    init_metrics();

    let app = Application::build(config)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to build application: {}", e))?;

    app.run_until_stopped().await?;

    Ok(())
}
