mod config;
mod error;
mod routes;

use config::ServerConfig;
use error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // A missing .env file is normal outside local development.
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    if config.cors_allow_any {
        tracing::warn!("CORS_ALLOW_ANY is on: API routes accept any origin");
    }

    let app = routes::leptos_app(&config)?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "quill listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
