use nba_grid_server::api::{app_router, ENDPOINTS};
use nba_grid_server::config::Config;
use nba_grid_server::{build_state, init_tracing};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();
    let state = build_state(&config)?;

    let router = app_router(state, &config)?;
    tracing::info!("Listening on {}", config.listen_addr);
    for endpoint in ENDPOINTS {
        tracing::info!("  GET {}", endpoint);
    }
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
