use agentic_api::config::ServiceConfig;
use agentic_api::server::{run_until_signal, wait_for_signal};
use agentic_api::telemetry::OpenTelemetryInitializer;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Config errors surface through anyhow; no subscriber exists yet
    let config = ServiceConfig::from_env()?;
    let telemetry = OpenTelemetryInitializer::new(config.telemetry.clone());

    if let Err(e) = run_until_signal(&config, &telemetry, wait_for_signal()).await {
        let e = anyhow::Error::from(e);
        error!(error = %format!("{:#}", e), "Agentic API failed");
        return Err(e);
    }

    info!("Agentic API shut down gracefully");
    Ok(())
}
