use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::core::persistence::store::MetricStore;

/// Periodic retention sweep: drops stored events and node samples older
/// than `retention`. Runs uncoordinated with queries; readers already
/// tolerate records disappearing between calls.
pub async fn run_retention_sweep(
    store: Arc<dyn MetricStore>,
    retention: Duration,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = tokio::time::interval(interval);

    info!(
        "Starting retention sweep (retention {}s, every {}s)",
        retention.as_secs(),
        interval.as_secs()
    );

    loop {
        tokio::select! {
            _ = shutdown.changed() => {
                info!("Retention sweep shutting down");
                break;
            }
            _ = ticker.tick() => {
                let cutoff = Utc::now()
                    - chrono::Duration::from_std(retention).unwrap_or(chrono::Duration::hours(24));

                match store.delete_events_before(cutoff).await {
                    Ok(removed) => debug!(removed, "Event retention sweep done"),
                    Err(e) => error!("Event retention sweep failed: {e}"),
                }
                match store.delete_node_samples_before(cutoff).await {
                    Ok(removed) => debug!(removed, "Sample retention sweep done"),
                    Err(e) => error!("Sample retention sweep failed: {e}"),
                }
            }
        }
    }
}
