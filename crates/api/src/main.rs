use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use holonet_api::config::ServerConfig;
use holonet_api::router::build_app_router;
use holonet_api::state::AppState;
use holonet_catalog::CatalogClient;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str =
    "holonet_api=debug,holonet_db=info,holonet_catalog=info,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        "Configuration loaded",
    );

    let pool = holonet_db::create_pool(&config.database_url)
        .await
        .expect("Failed to open database");
    holonet_db::health_check(&pool)
        .await
        .expect("Database did not answer SELECT 1");
    holonet_db::run_migrations(&pool)
        .await
        .expect("Failed to apply migrations");
    tracing::info!(database_url = %config.database_url, "Database ready");

    let catalog = CatalogClient::new(
        config.catalog.base_url.clone(),
        Duration::from_secs(config.catalog.timeout_secs),
    )
    .expect("Failed to build catalog HTTP client");
    tracing::info!(base_url = %catalog.base_url(), "Catalog client ready");

    let addr = SocketAddr::new(
        config.host.parse().expect("HOST must be an IP address"),
        config.port,
    );

    let state = AppState {
        pool: pool.clone(),
        config: Arc::new(config.clone()),
        catalog: Arc::new(catalog),
    };
    let app = build_app_router(state, &config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    pool.close().await;
    tracing::info!("Shutdown complete");
}

/// Install the fmt subscriber, filtered by `RUST_LOG` when it is set.
fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to listen for Ctrl-C");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to listen for SIGTERM")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        () = ctrl_c => "SIGINT",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal, "Draining connections");
}
