use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use battle_server::config::Config;
use battle_server::server::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "battle_server=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    let addr = config.socket_addr()?;
    tracing::info!("Move selection strategy: {}", config.strategy);

    let app = router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Battle server listening on http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
