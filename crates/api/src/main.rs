use anyhow::Context;

use stockroom_api::app;
use stockroom_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    stockroom_observability::init(config.log_format);

    let services = app::build_services(&config);
    let router = app::build_app(services);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    let addr = listener.local_addr()?;
    tracing::info!(theme = config.theme.as_str(), "listening on {addr}");

    axum::serve(listener, router).await?;
    Ok(())
}
