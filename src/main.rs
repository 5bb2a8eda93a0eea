use anyhow::Context;
use tracing_subscriber::EnvFilter;

use age_dashboard::server::{self, AppState};
use age_dashboard::{Dashboard, DashboardConfig, Dataset, PageConfig};

// One logical thread handles UI events in arrival order.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = DashboardConfig::from_env().context("invalid configuration")?;

    let dataset = Dataset::load(&config.data_path)
        .with_context(|| format!("failed to load {}", config.data_path.display()))?;
    let dashboard = Dashboard::new(dataset);

    let state = AppState::new(dashboard, &PageConfig::default())
        .context("failed to render dashboard page")?;
    let app = server::router(state);

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("age-dashboard listening on http://{addr}");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
