/// Re-export the Kubernetes resource types used across the crate so call
/// sites do not repeat deep k8s-openapi paths.

pub use k8s_openapi::api::core::v1::{Event, Node, Pod, PodTemplateSpec};

pub use k8s_openapi::api::apps::v1::{DaemonSet, Deployment, ReplicaSet, StatefulSet};

pub use k8s_openapi::api::batch::v1::{CronJob, Job};
