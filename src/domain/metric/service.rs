use std::sync::Arc;

use crate::core::persistence::entities::{NodeSampleEntity, UsageBucket};
use crate::core::persistence::store::MetricStore;
use crate::errors::AppError;

/// Series never exceed this many points per query.
pub const MAX_BUCKETS: usize = 24;

/// Fleet-wide roll-up: per-minute buckets averaging cpu/ram across every
/// node, means truncated to integers, at most [`MAX_BUCKETS`] buckets in
/// the store's grouping order.
pub async fn average_usage_across_nodes(
    store: &Arc<dyn MetricStore>,
) -> Result<Vec<UsageBucket>, AppError> {
    store.average_usage_by_minute(MAX_BUCKETS).await
}

/// Raw recent-sample window for one node: the first [`MAX_BUCKETS`]
/// matching samples in store order, cpu/ram verbatim. Deliberately not a
/// roll-up; keep it distinct from the fleet average.
pub async fn usage_for_node(
    store: &Arc<dyn MetricStore>,
    node_name: &str,
) -> Result<Vec<NodeSampleEntity>, AppError> {
    store.node_samples(node_name, MAX_BUCKETS).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::persistence::memory::InMemoryStore;
    use chrono::{TimeZone, Utc};

    fn empty_store() -> Arc<dyn MetricStore> {
        Arc::new(InMemoryStore::new())
    }

    async fn seed(store: &Arc<dyn MetricStore>, samples: &[(u32, &str, i64, i64)]) {
        for (min, node, cpu, ram) in samples {
            store
                .insert_node_sample(NodeSampleEntity {
                    node_name: node.to_string(),
                    cpu: *cpu,
                    ram: *ram,
                    timestamp: Utc.with_ymd_and_hms(2024, 5, 1, 8, *min, 0).unwrap(),
                })
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn fleet_average_buckets_by_minute() {
        let store = empty_store();
        seed(&store, &[(0, "n1", 10, 0), (0, "n2", 20, 0), (1, "n1", 30, 0)]).await;

        let series = average_usage_across_nodes(&store).await.unwrap();
        let cpus: Vec<i64> = series.iter().map(|b| b.cpu).collect();
        assert_eq!(cpus, vec![15, 30]);
    }

    #[tokio::test]
    async fn fleet_average_never_exceeds_cap() {
        let store = empty_store();
        let samples: Vec<(u32, &str, i64, i64)> =
            (0..40u32).map(|m| (m % 60, "n1", 1, 1)).collect();
        seed(&store, &samples).await;

        let series = average_usage_across_nodes(&store).await.unwrap();
        assert!(series.len() <= MAX_BUCKETS);
    }

    #[tokio::test]
    async fn node_window_projects_samples_verbatim() {
        let store = empty_store();
        seed(&store, &[(0, "n1", 11, 21), (0, "n2", 99, 99), (1, "n1", 12, 22)]).await;

        let window = usage_for_node(&store, "n1").await.unwrap();
        assert_eq!(window.len(), 2);
        assert_eq!((window[0].cpu, window[0].ram), (11, 21));
        assert_eq!((window[1].cpu, window[1].ram), (12, 22));
    }
}
