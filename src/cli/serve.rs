use std::path::Path;
use crate::cli::commands::ServeArgs;
use crate::config;
use crate::errors::PlagError;
use crate::api;
use tracing::info;

pub async fn handle_serve(args: ServeArgs) -> Result<(), PlagError> {
    let mut config = config::load_config(args.config.as_deref().map(Path::new)).await?;
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if args.workers.is_some() {
        config.server.workers = args.workers;
    }

    info!(
        host = %config.server.host,
        port = config.server.port,
        workers = config.server.effective_workers(),
        algorithm = %config.scoring.algorithm,
        self_match = ?config.policy.self_match,
        "Starting comparison server"
    );

    let state = api::create_app_state(&config);
    let app = api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| PlagError::Internal(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
