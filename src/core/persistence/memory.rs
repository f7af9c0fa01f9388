use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::core::persistence::entities::{
    ControllerSnapshotEntity, EventEntity, NodeSampleEntity, UsageBucket,
};
use crate::core::persistence::selection::{Selection, Sort};
use crate::core::persistence::store::MetricStore;
use crate::errors::AppError;

/// In-memory store over three append-only collections. Used by the binary
/// and injected into service tests. Reads never block appends for longer
/// than the lock hold of a single operation.
#[derive(Default)]
pub struct InMemoryStore {
    events: RwLock<Vec<EventEntity>>,
    node_samples: RwLock<Vec<NodeSampleEntity>>,
    controller_snapshots: RwLock<Vec<ControllerSnapshotEntity>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn event_field(event: &EventEntity, field: &str) -> Option<String> {
    match field {
        "event_level" => Some(event.event_level.clone()),
        "name" => Some(event.name.clone()),
        "type" => Some(event.type_.clone()),
        _ => None,
    }
}

fn snapshot_field(snapshot: &ControllerSnapshotEntity, field: &str) -> Option<String> {
    match field {
        "namespace" => Some(snapshot.namespace.clone()),
        "controller_type" => Some(snapshot.controller_type.clone()),
        "name" => Some(snapshot.name.clone()),
        _ => None,
    }
}

fn apply_slice<T>(selection: &Selection, items: Vec<T>) -> Vec<T> {
    let iter = items.into_iter().skip(selection.skip);
    match selection.limit {
        Some(limit) => iter.take(limit).collect(),
        None => iter.collect(),
    }
}

#[async_trait]
impl MetricStore for InMemoryStore {
    async fn insert_event(&self, event: EventEntity) -> Result<(), AppError> {
        self.events.write().await.push(event);
        Ok(())
    }

    async fn find_events(&self, selection: &Selection) -> Result<Vec<EventEntity>, AppError> {
        let events = self.events.read().await;
        let mut matched: Vec<EventEntity> = events
            .iter()
            .filter(|e| selection.matches(|field| event_field(e, field)))
            .cloned()
            .collect();

        if let Some(Sort::CreatedDesc) = selection.sort {
            matched.sort_by(|a, b| b.created.cmp(&a.created));
        }

        Ok(apply_slice(selection, matched))
    }

    async fn count_events(&self, selection: &Selection) -> Result<u64, AppError> {
        let events = self.events.read().await;
        let count = events
            .iter()
            .filter(|e| selection.matches(|field| event_field(e, field)))
            .count();
        Ok(count as u64)
    }

    async fn delete_events_before(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|e| e.created > cutoff);
        let removed = (before - events.len()) as u64;
        if removed > 0 {
            debug!(removed, "Swept stored events past retention");
        }
        Ok(removed)
    }

    async fn insert_node_sample(&self, sample: NodeSampleEntity) -> Result<(), AppError> {
        self.node_samples.write().await.push(sample);
        Ok(())
    }

    async fn average_usage_by_minute(
        &self,
        max_buckets: usize,
    ) -> Result<Vec<UsageBucket>, AppError> {
        let samples = self.node_samples.read().await;

        // Buckets keep first-seen order; (sum_cpu, sum_ram, count) per key.
        let mut buckets: Vec<(String, i64, i64, i64)> = Vec::new();
        for sample in samples.iter() {
            let key = sample.timestamp.format("%H:%M").to_string();
            match buckets.iter_mut().find(|(k, ..)| *k == key) {
                Some((_, cpu, ram, count)) => {
                    *cpu += sample.cpu;
                    *ram += sample.ram;
                    *count += 1;
                }
                None => buckets.push((key, sample.cpu, sample.ram, 1)),
            }
        }

        // Over the cap, older buckets are dropped, never the newest.
        if buckets.len() > max_buckets {
            buckets.drain(..buckets.len() - max_buckets);
        }

        // Mean is truncated, not rounded.
        Ok(buckets
            .into_iter()
            .map(|(minute, cpu, ram, count)| UsageBucket {
                minute,
                cpu: (cpu as f64 / count as f64) as i64,
                ram: (ram as f64 / count as f64) as i64,
            })
            .collect())
    }

    async fn node_samples(
        &self,
        node_name: &str,
        limit: usize,
    ) -> Result<Vec<NodeSampleEntity>, AppError> {
        let samples = self.node_samples.read().await;
        Ok(samples
            .iter()
            .filter(|s| s.node_name == node_name)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn delete_node_samples_before(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError> {
        let mut samples = self.node_samples.write().await;
        let before = samples.len();
        samples.retain(|s| s.timestamp > cutoff);
        let removed = (before - samples.len()) as u64;
        if removed > 0 {
            debug!(removed, "Swept node samples past retention");
        }
        Ok(removed)
    }

    async fn insert_controller_snapshot(
        &self,
        snapshot: ControllerSnapshotEntity,
    ) -> Result<(), AppError> {
        self.controller_snapshots.write().await.push(snapshot);
        Ok(())
    }

    async fn find_controller_snapshots(
        &self,
        selection: &Selection,
    ) -> Result<Vec<ControllerSnapshotEntity>, AppError> {
        let snapshots = self.controller_snapshots.read().await;
        // Controller listings keep store order; no sort is applied.
        let matched: Vec<ControllerSnapshotEntity> = snapshots
            .iter()
            .filter(|s| selection.matches(|field| snapshot_field(s, field)))
            .cloned()
            .collect();
        Ok(apply_slice(selection, matched))
    }

    async fn count_controller_snapshots(&self, selection: &Selection) -> Result<u64, AppError> {
        let snapshots = self.controller_snapshots.read().await;
        let count = snapshots
            .iter()
            .filter(|s| selection.matches(|field| snapshot_field(s, field)))
            .count();
        Ok(count as u64)
    }
}
