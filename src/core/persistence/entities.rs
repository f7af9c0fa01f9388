use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One observed cluster event, appended by the ingestion sink.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventEntity {
    pub created: DateTime<Utc>,
    pub event_level: String,
    pub name: String,
    pub status: String,
    pub message: String,
    #[serde(rename = "type")]
    pub type_: String,
}

/// One node usage observation written by the external sampler.
/// Read-only for this service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeSampleEntity {
    pub node_name: String,
    pub cpu: i64,
    pub ram: i64,
    pub timestamp: DateTime<Utc>,
}

/// One controller observation written by the external sampler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControllerSnapshotEntity {
    pub name: String,
    pub namespace: String,
    pub controller_type: String,
    pub pod_count: i64,
    pub created: DateTime<Utc>,
}

/// Derived per-minute roll-up; computed on demand, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UsageBucket {
    pub minute: String,
    pub cpu: i64,
    pub ram: i64,
}
