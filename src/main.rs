//! Service binary for the leave management engine.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use leave_engine::api::{create_router, AppState};
use leave_engine::config::ServiceConfig;
use leave_engine::engine::LeaveService;
use leave_engine::store::FileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config_path =
        std::env::var("LEAVE_ENGINE_CONFIG").unwrap_or_else(|_| "config.yaml".to_string());
    let config = ServiceConfig::load(&config_path)?;

    // PORT overrides the configured port for platform-managed deploys.
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(config.server.port);

    let store = FileStore::new(config.store.path.clone());
    let state = AppState::new(LeaveService::new(store));
    let app = create_router(state);

    let addr = format!("{}:{}", config.server.host, port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::warn!(
                error = %err,
                addr = %addr,
                "Configured address unavailable, falling back to an ephemeral port"
            );
            tokio::net::TcpListener::bind((config.server.host.as_str(), 0)).await?
        }
    };

    tracing::info!(
        "Leave engine v{} listening on http://{}",
        env!("CARGO_PKG_VERSION"),
        listener.local_addr()?
    );
    tracing::info!(store = %config.store.path.display(), "Snapshot store ready");

    axum::serve(listener, app).await?;
    Ok(())
}
