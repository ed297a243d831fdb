use std::sync::Arc;

use container_demo::{build_app, config::Config, logging, system::SysinfoProbe, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let config = Config::from_env()?;
    let probe = Arc::new(SysinfoProbe::new()?);
    let state = AppState::new(config.environment.clone(), probe);
    let app = build_app(state);
    let listener = tokio::net::TcpListener::bind(config.bind_socket()?).await?;

    info!(
        bind_addr = %config.bind_addr,
        bind_port = config.bind_port,
        environment = %config.environment,
        "server starting"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
