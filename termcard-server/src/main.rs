use anyhow::Context;
use termcard_core::{LoggingConfig, TermCardConfig};
use termcard_llm::TermCardGenerator;
use termcard_server::{AppState, GENERATE_PATH, router};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = TermCardConfig::load().context("loading configuration")?;
    init_tracing(&config.logging);

    if config.upstream.api_key.is_none() {
        warn!(
            env_var = %config.upstream.api_key_env,
            "no API credential set; {} will answer 500", GENERATE_PATH
        );
    }

    let addr = config.server.bind_addr();
    info!(model = %config.upstream.model, base_url = %config.upstream.base_url, "upstream configured");
    let state = AppState::new(TermCardGenerator::new(config.upstream));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    if logging.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).compact().init();
    }
}
