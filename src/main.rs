//! Ley Manager API - Main Entry Point

use tokio::net::TcpListener;

use ley_manager::infrastructure::driven_adapters::config::AppConfig;
use ley_manager::infrastructure::driven_adapters::logging::init_tracing;
use ley_manager::infrastructure::driven_adapters::repositories::Repositories;
use ley_manager::infrastructure::driving_adapters::api_rest::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    init_tracing(&config.logging)?;
    tracing::info!(backend = ?config.storage.backend, "Configuration loaded successfully");

    let repositories = Repositories::from_config(&config).await?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = router(AppState::new(config, repositories));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, draining connections");
}
