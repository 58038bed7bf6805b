use anyhow::Context;
use clap::Parser;
use scripture_server::config::Args;
use scripture_server::records::source::CsvDirSource;
use scripture_server::records::store::RecordStore;
use scripture_server::server::router::router;
use scripture_server::server::state::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    tracing::info!("Starting scripture server with {:?}", args);

    // 1. Record store over the CSV directory:
    let store = RecordStore::new(Arc::new(CsvDirSource::new(&args.data_dir)));

    // 2. Catalog and shared state:
    let state = AppState::load(store, args.reference)
        .await
        .with_context(|| format!("failed to load book catalog from {}", args.data_dir.display()))?;
    let state = Arc::new(state);

    if args.warm {
        state
            .cache
            .warm()
            .await
            .context("failed to build translation indexes")?;
    }

    // 3. HTTP router:
    let app = router(state);

    // 4. Start HTTP server:
    tracing::info!("HTTP server listening on {}", args.bind);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
