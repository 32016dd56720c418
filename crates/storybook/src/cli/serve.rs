//! `storybook serve`.

use super::commands::ServeArgs;
use std::sync::Arc;
use storybook::{
    AppState, Health, HealthStatus, OpenAIClient, OpenAIConfig, ServerConfig, serve,
};
use tracing::{info, warn};

/// Load configuration, connect the provider and serve until Ctrl-C.
pub async fn run_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = ServerConfig::load(args.config.as_deref())?;
    if let Some(host) = args.host {
        config = config.with_host(host);
    }
    if let Some(port) = args.port {
        config = config.with_port(port);
    }

    let client = OpenAIClient::new(OpenAIConfig::from_env()?.with_model(config.model()));
    match client.health().await? {
        HealthStatus::Healthy => info!("Provider reachable"),
        HealthStatus::Degraded { message } => warn!(detail = %message, "Provider degraded"),
        HealthStatus::Unhealthy { message } => warn!(detail = %message, "Provider unhealthy"),
    }

    let state = AppState::new(Arc::new(client), &config);
    serve(&config, state, shutdown_signal()).await?;

    info!("Story endpoint stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
