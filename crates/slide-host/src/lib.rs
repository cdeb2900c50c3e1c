//! Static host for the carousel demo: `/` serves the demo page, every other
//! path is looked up under the public directory.

pub mod config;

pub use config::HostConfig;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::services::{ServeDir, ServeFile};

pub fn router(config: &HostConfig) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(config.index_path()))
        .fallback_service(ServeDir::new(&config.public_dir))
}

pub async fn serve(config: HostConfig) -> anyhow::Result<()> {
    let app = router(&config);
    let listener = TcpListener::bind(config.addr).await?;
    log::info!("Server listening on port {}", config.addr.port());
    axum::serve(listener, app).await?;
    Ok(())
}
