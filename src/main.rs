use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;
mod core;
mod domain;
mod errors;
mod routes;
mod scheduler;

use crate::app_state::AppState;
use crate::config::Config;
use crate::core::client::kube_client::build_kube_client;
use crate::core::client::watchers::run_event_watcher;
use crate::core::persistence::memory::InMemoryStore;
use crate::core::persistence::store::MetricStore;
use crate::scheduler::retention::run_retention_sweep;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = Config::from_env();
    let client = build_kube_client().await?;
    let store: Arc<dyn MetricStore> = Arc::new(InMemoryStore::new());

    // Background tasks share only the store's append/delete paths with the
    // query handlers; the shutdown channel flips once on SIGINT.
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let watcher = tokio::spawn(run_event_watcher(
        client.clone(),
        store.clone(),
        shutdown_rx.clone(),
    ));
    let sweeper = tokio::spawn(run_retention_sweep(
        store.clone(),
        config.retention,
        config.sweep_interval,
        shutdown_rx,
    ));

    let state = AppState::new(client, store, config.clone());
    let app = routes::app_router().with_state(state);

    info!("Listening on {}", config.listen_addr);
    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Shutdown signal received");
        })
        .await?;

    shutdown_tx.send(true).ok();
    let _ = watcher.await;
    let _ = sweeper.await;

    info!("Bye");
    Ok(())
}
