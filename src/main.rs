use std::net::{IpAddr, SocketAddr};

use tracing_subscriber::EnvFilter;

use trendboard::{config, errors::AppError, routes, AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("trendboard=info,tower_http=info")),
        )
        .init();

    let settings = config::load();
    tracing::info!(api_base = %settings.api_base, "analytics backend resolved");

    let ip: IpAddr = settings
        .host
        .parse()
        .map_err(|_| AppError::Address(settings.host.clone()))?;
    let addr = SocketAddr::from((ip, settings.port));

    let state = AppState::new(settings)?;
    let app = routes::app(state);

    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
