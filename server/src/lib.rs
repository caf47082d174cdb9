//! HTTP front end for mailbrief: router, shared state and process setup.

pub mod logging;
pub mod rest;
pub mod state;

use std::net::SocketAddr;

use log::info;
use tokio::net::TcpListener;

use mailbrief::Config;

pub use rest::create_router;
pub use state::AppState;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Builds the application from `config` and serves it until SIGINT or
/// SIGTERM.
pub async fn run(config: Config) -> Result<(), BoxError> {
    let addr: SocketAddr = config.server.bind_address.parse()?;
    let state = AppState::from_config(&config).await?;
    let app = create_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                log::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                log::warn!("Failed to listen for Ctrl-C: {}", e);
            }
        }
        _ = terminate => {}
    }
    info!("Shutdown signal received");
}
