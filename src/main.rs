//! recolor - recolor uploaded images through named colormaps
//!
//! This is the main entry point for the recolor server.

use std::net::SocketAddr;
use tokio::signal;
use tracing::info;

use recolor::handlers::{self, heartbeat};
use recolor::{
    init_tracing, log_catalog_stats, log_error, AppState, Catalog, Config, RecolorError, Result,
};

fn main() -> Result<()> {
    // Load and validate configuration before anything is logged
    let config = Config::load()?;
    config.validate()?;

    init_tracing(&config.log_level);

    info!("Starting recolor v{}", env!("CARGO_PKG_VERSION"));

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    if let Some(workers) = config.server.workers {
        builder.worker_threads(workers);
    }
    let runtime = builder.enable_all().build()?;

    runtime.block_on(serve(config)).map_err(|e| {
        log_error(&e, "server");
        e
    })
}

async fn serve(config: Config) -> Result<()> {
    heartbeat::mark_start();

    // The catalog is built once and shared read-only by every handler
    let catalog = Catalog::builtin();
    log_catalog_stats(&catalog);

    let state = AppState::new_shared(config.clone(), catalog);
    state.validate()?;

    let app = handlers::router(state);

    let addr = SocketAddr::from((
        config
            .server
            .host
            .parse::<std::net::IpAddr>()
            .map_err(|e| RecolorError::Config {
                message: format!("Invalid host address: {}", e),
            })?,
        config.server.port,
    ));

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| RecolorError::Server {
            message: format!("Failed to bind to address: {}", e),
        })?;

    info!("Server is ready to accept connections");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| RecolorError::Server {
            message: format!("Server error: {}", e),
        })?;

    info!("Server has been gracefully shut down");
    Ok(())
}

/// Wait for a shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
