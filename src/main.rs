use tracing_subscriber::EnvFilter;

use skillbridge_api::api::{create_router, AppState};
use skillbridge_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skillbridge_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let state = AppState::new();
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
