use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use kube::{Api, Client};
use serde::Serialize;
use tracing::debug;

use crate::core::client::resources::{
    CronJob, DaemonSet, Deployment, Job, PodTemplateSpec, ReplicaSet, StatefulSet,
};
use crate::errors::{from_kube, AppError};

/// The fixed set of workload-controller kinds this service understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerKind {
    Deployment,
    DaemonSet,
    StatefulSet,
    Job,
    CronJob,
    ReplicaSet,
}

impl ControllerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ControllerKind::Deployment => "deployment",
            ControllerKind::DaemonSet => "daemonset",
            ControllerKind::StatefulSet => "statefulset",
            ControllerKind::Job => "job",
            ControllerKind::CronJob => "cronjob",
            ControllerKind::ReplicaSet => "replicaset",
        }
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControllerKind {
    type Err = AppError;

    /// Fails before any API call is attempted; the offending kind string
    /// travels in the error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "deployment" => Ok(ControllerKind::Deployment),
            "daemonset" => Ok(ControllerKind::DaemonSet),
            "statefulset" => Ok(ControllerKind::StatefulSet),
            "job" => Ok(ControllerKind::Job),
            "cronjob" => Ok(ControllerKind::CronJob),
            "replicaset" => Ok(ControllerKind::ReplicaSet),
            other => Err(AppError::InvalidInput(format!(
                "unknown controller kind '{}'",
                other
            ))),
        }
    }
}

/// One status condition, taken verbatim from the controller; source order
/// is preserved.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ConditionRecord {
    #[serde(rename = "type")]
    pub type_: String,
    pub status: String,
    pub reason: String,
}

/// The common shape every controller variant is reduced to at the client
/// seam. `conditions` is `None` for kinds whose status carries no condition
/// list (cronjob).
pub struct ControllerParts {
    pub labels: BTreeMap<String, String>,
    pub controlled_by: Option<String>,
    pub template: Option<PodTemplateSpec>,
    pub conditions: Option<Vec<ConditionRecord>>,
}

fn meta_parts(meta: &ObjectMeta) -> (BTreeMap<String, String>, Option<String>) {
    let labels = meta.labels.clone().unwrap_or_default();
    let controlled_by = meta
        .owner_references
        .as_ref()
        .and_then(|refs| refs.first())
        .map(|owner| owner.name.clone());
    (labels, controlled_by)
}

fn map_conditions<T>(
    conditions: Option<Vec<T>>,
    to_record: impl Fn(T) -> ConditionRecord,
) -> Vec<ConditionRecord> {
    conditions
        .unwrap_or_default()
        .into_iter()
        .map(to_record)
        .collect()
}

/// Variant dispatch: fetch the controller and reduce it to
/// [`ControllerParts`]. Each arm differs only in the template path (cronjob
/// nests one level deeper through its job template) and the concrete
/// condition type.
pub async fn fetch_controller_parts(
    client: &Client,
    kind: ControllerKind,
    namespace: &str,
    name: &str,
) -> Result<ControllerParts, AppError> {
    let parts = match kind {
        ControllerKind::Deployment => {
            let api: Api<Deployment> = Api::namespaced(client.clone(), namespace);
            let controller = api.get(name).await.map_err(from_kube)?;
            let (labels, controlled_by) = meta_parts(&controller.metadata);
            ControllerParts {
                labels,
                controlled_by,
                template: controller.spec.map(|s| s.template),
                conditions: Some(map_conditions(
                    controller.status.and_then(|s| s.conditions),
                    |c| ConditionRecord {
                        type_: c.type_,
                        status: c.status,
                        reason: c.reason.unwrap_or_default(),
                    },
                )),
            }
        }
        ControllerKind::DaemonSet => {
            let api: Api<DaemonSet> = Api::namespaced(client.clone(), namespace);
            let controller = api.get(name).await.map_err(from_kube)?;
            let (labels, controlled_by) = meta_parts(&controller.metadata);
            ControllerParts {
                labels,
                controlled_by,
                template: controller.spec.map(|s| s.template),
                conditions: Some(map_conditions(
                    controller.status.and_then(|s| s.conditions),
                    |c| ConditionRecord {
                        type_: c.type_,
                        status: c.status,
                        reason: c.reason.unwrap_or_default(),
                    },
                )),
            }
        }
        ControllerKind::StatefulSet => {
            let api: Api<StatefulSet> = Api::namespaced(client.clone(), namespace);
            let controller = api.get(name).await.map_err(from_kube)?;
            let (labels, controlled_by) = meta_parts(&controller.metadata);
            ControllerParts {
                labels,
                controlled_by,
                template: controller.spec.map(|s| s.template),
                conditions: Some(map_conditions(
                    controller.status.and_then(|s| s.conditions),
                    |c| ConditionRecord {
                        type_: c.type_,
                        status: c.status,
                        reason: c.reason.unwrap_or_default(),
                    },
                )),
            }
        }
        ControllerKind::Job => {
            let api: Api<Job> = Api::namespaced(client.clone(), namespace);
            let controller = api.get(name).await.map_err(from_kube)?;
            let (labels, controlled_by) = meta_parts(&controller.metadata);
            ControllerParts {
                labels,
                controlled_by,
                template: controller.spec.map(|s| s.template),
                conditions: Some(map_conditions(
                    controller.status.and_then(|s| s.conditions),
                    |c| ConditionRecord {
                        type_: c.type_,
                        status: c.status,
                        reason: c.reason.unwrap_or_default(),
                    },
                )),
            }
        }
        ControllerKind::CronJob => {
            let api: Api<CronJob> = Api::namespaced(client.clone(), namespace);
            let controller = api.get(name).await.map_err(from_kube)?;
            let (labels, controlled_by) = meta_parts(&controller.metadata);
            // The pod template sits behind the job template; the CronJob
            // status has no condition list to report.
            ControllerParts {
                labels,
                controlled_by,
                template: controller
                    .spec
                    .and_then(|s| s.job_template.spec)
                    .map(|s| s.template),
                conditions: None,
            }
        }
        ControllerKind::ReplicaSet => {
            let api: Api<ReplicaSet> = Api::namespaced(client.clone(), namespace);
            let controller = api.get(name).await.map_err(from_kube)?;
            let (labels, controlled_by) = meta_parts(&controller.metadata);
            ControllerParts {
                labels,
                controlled_by,
                template: controller.spec.and_then(|s| s.template),
                conditions: Some(map_conditions(
                    controller.status.and_then(|s| s.conditions),
                    |c| ConditionRecord {
                        type_: c.type_,
                        status: c.status,
                        reason: c.reason.unwrap_or_default(),
                    },
                )),
            }
        }
    };

    debug!("Fetched {} {}/{}", kind, namespace, name);
    Ok(parts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_from_str() {
        for kind in [
            ControllerKind::Deployment,
            ControllerKind::DaemonSet,
            ControllerKind::StatefulSet,
            ControllerKind::Job,
            ControllerKind::CronJob,
            ControllerKind::ReplicaSet,
        ] {
            assert_eq!(kind.as_str().parse::<ControllerKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_is_invalid_input_with_offender() {
        let err = "bogus-kind".parse::<ControllerKind>().unwrap_err();
        match err {
            AppError::InvalidInput(msg) => assert!(msg.contains("bogus-kind")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn meta_parts_defaults_when_absent() {
        let meta = ObjectMeta::default();
        let (labels, controlled_by) = meta_parts(&meta);
        assert!(labels.is_empty());
        assert!(controlled_by.is_none());
    }

    #[test]
    fn meta_parts_takes_first_owner() {
        use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;

        let meta = ObjectMeta {
            owner_references: Some(vec![
                OwnerReference {
                    name: "rs-1".to_string(),
                    ..OwnerReference::default()
                },
                OwnerReference {
                    name: "rs-2".to_string(),
                    ..OwnerReference::default()
                },
            ]),
            ..ObjectMeta::default()
        };
        let (_, controlled_by) = meta_parts(&meta);
        assert_eq!(controlled_by.as_deref(), Some("rs-1"));
    }
}
