use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::core::persistence::entities::{
    ControllerSnapshotEntity, EventEntity, NodeSampleEntity, UsageBucket,
};
use crate::core::persistence::selection::Selection;
use crate::errors::AppError;

/// Handle to the sample store, injected into every service so tests can
/// swap in a fake. Covers three logical collections: events, node usage
/// samples and controller snapshots.
///
/// Writes are append-only and must not block concurrent readers. Readers
/// must tolerate records disappearing between queries (the retention sweep
/// runs independently).
#[async_trait]
pub trait MetricStore: Send + Sync {
    // Events
    async fn insert_event(&self, event: EventEntity) -> Result<(), AppError>;
    async fn find_events(&self, selection: &Selection) -> Result<Vec<EventEntity>, AppError>;
    async fn count_events(&self, selection: &Selection) -> Result<u64, AppError>;
    async fn delete_events_before(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError>;

    // Node usage samples
    async fn insert_node_sample(&self, sample: NodeSampleEntity) -> Result<(), AppError>;
    /// Group all samples by the minute component of their timestamp and
    /// average cpu/ram per bucket. At most `max_buckets` buckets are
    /// returned; when the cap is exceeded the oldest buckets are dropped.
    /// Bucket order is the store's natural grouping order.
    async fn average_usage_by_minute(
        &self,
        max_buckets: usize,
    ) -> Result<Vec<UsageBucket>, AppError>;
    /// The first `limit` samples for one node in store order. A raw recent
    /// window, not a roll-up.
    async fn node_samples(
        &self,
        node_name: &str,
        limit: usize,
    ) -> Result<Vec<NodeSampleEntity>, AppError>;
    async fn delete_node_samples_before(&self, cutoff: DateTime<Utc>) -> Result<u64, AppError>;

    // Controller snapshots
    async fn insert_controller_snapshot(
        &self,
        snapshot: ControllerSnapshotEntity,
    ) -> Result<(), AppError>;
    async fn find_controller_snapshots(
        &self,
        selection: &Selection,
    ) -> Result<Vec<ControllerSnapshotEntity>, AppError>;
    async fn count_controller_snapshots(&self, selection: &Selection) -> Result<u64, AppError>;
}
