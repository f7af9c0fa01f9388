use std::sync::Arc;

use chrono::Utc;
use futures::StreamExt;
use kube::runtime::{watcher, WatchStreamExt};
use kube::{Api, Client};
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::core::client::resources::Event;
use crate::core::persistence::entities::EventEntity;
use crate::core::persistence::store::MetricStore;

fn to_entity(event: Event) -> EventEntity {
    let involved = event.involved_object;
    EventEntity {
        created: event
            .last_timestamp
            .map(|t| t.0)
            .unwrap_or_else(Utc::now),
        event_level: event.type_.unwrap_or_default(),
        name: involved.name.unwrap_or_default(),
        status: event.reason.unwrap_or_default(),
        message: event.message.unwrap_or_default(),
        type_: involved.kind.unwrap_or_default(),
    }
}

/// Long-lived ingestion task: stream cluster events and append each one to
/// the store. A failed append is logged and skipped so one bad write never
/// stalls the stream, and readers are never blocked. Stops when the
/// shutdown channel flips.
pub async fn run_event_watcher(
    client: Client,
    store: Arc<dyn MetricStore>,
    mut shutdown: watch::Receiver<bool>,
) {
    let api: Api<Event> = Api::all(client);
    let mut stream = watcher(api, watcher::Config::default())
        .applied_objects()
        .boxed();

    info!("Starting event watcher");

    loop {
        tokio::select! {
            _ = shutdown.changed() => {
                info!("Event watcher shutting down");
                break;
            }
            next = stream.next() => {
                match next {
                    Some(Ok(event)) => {
                        let entity = to_entity(event);
                        debug!("Event observed: {} {}", entity.status, entity.name);
                        if let Err(e) = store.insert_event(entity).await {
                            error!("Failed to append event: {e}");
                        }
                    }
                    Some(Err(e)) => {
                        // The watcher reconnects on its own after stream errors.
                        error!("Event watcher error: {e}");
                    }
                    None => {
                        info!("Event stream ended");
                        break;
                    }
                }
            }
        }
    }
}
