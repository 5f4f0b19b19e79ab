pub mod error;
pub mod middleware;
pub mod routes;

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::config::Settings;
use self::routes::AppState;

pub async fn run_server(settings: Settings, port: u16) -> Result<()> {
    let state = Arc::new(AppState::from_settings(&settings));
    let app = routes::create_router(state, &settings.rate_limits);

    let host: IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::new(host, port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
