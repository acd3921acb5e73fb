#![recursion_limit = "256"]

mod config;
mod routes;
mod state;

use config::ServerConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let port = config.port;
    tracing::info!(backend = %config.backend_url, public = %config.backend_public_url, "backend configured");

    let state = state::AppState::new(config)?;
    let app = routes::app(state)?;
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!(%port, "tsunami dashboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
