#![recursion_limit = "256"]

mod config;
mod routes;

use config::{ConfigError, ServerConfig};

#[derive(Debug, thiserror::Error)]
enum ServeError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },
    #[error("server failed: {0}")]
    Serve(std::io::Error),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "folio host stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServeError> {
    // `.env` is optional; real deployments set the environment directly.
    let _ = dotenvy::dotenv();

    let config = ServerConfig::from_env()?;
    let app = routes::app(&config);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, assets = %config.assets_dir.display(), "folio listening");
    axum::serve(listener, app).await.map_err(ServeError::Serve)
}
