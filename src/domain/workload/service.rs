use std::sync::Arc;

use kube::Client;
use serde::Serialize;

use crate::core::client::workloads::{
    fetch_controller_parts, ConditionRecord, ControllerKind, ControllerParts,
};
use crate::core::persistence::entities::ControllerSnapshotEntity;
use crate::core::persistence::selection::{PageDescriptor, Selection};
use crate::core::persistence::store::MetricStore;
use crate::errors::AppError;

/// Uniform projection of any controller variant. Absent sub-fields come
/// back as empty values, never as an error.
#[derive(Debug, Default, Serialize, PartialEq)]
pub struct ControllerRecord {
    pub labels: Vec<String>,
    pub limits: Vec<String>,
    pub volumes: Vec<String>,
    pub mounts: Vec<String>,
    pub env: Vec<String>,
    pub controlled_by: String,
}

/// Normalize one controller into the uniform record. The kind string is
/// validated before any API call.
pub async fn normalize_controller(
    client: &Client,
    kind: &str,
    namespace: &str,
    name: &str,
) -> Result<ControllerRecord, AppError> {
    let kind: ControllerKind = kind.parse()?;
    let parts = fetch_controller_parts(client, kind, namespace, name).await?;
    Ok(project_parts(parts))
}

/// Status conditions in source order. Defined for every kind except
/// cronjob, whose status carries no condition list; asking for one is a
/// NotFound, not a silent empty answer.
pub async fn get_conditions(
    client: &Client,
    kind: &str,
    namespace: &str,
    name: &str,
) -> Result<Vec<ConditionRecord>, AppError> {
    let kind: ControllerKind = kind.parse()?;
    let parts = fetch_controller_parts(client, kind, namespace, name).await?;
    parts.conditions.ok_or_else(|| {
        AppError::NotFound(format!("{kind} controllers do not expose conditions"))
    })
}

fn project_parts(parts: ControllerParts) -> ControllerRecord {
    let Some(template) = parts.template else {
        return ControllerRecord::default();
    };
    let Some(spec) = template.spec else {
        return ControllerRecord::default();
    };
    if spec.containers.is_empty() {
        return ControllerRecord::default();
    }

    // Resource limits span all containers...
    let mut limits = Vec::new();
    for container in &spec.containers {
        if let Some(container_limits) = container
            .resources
            .as_ref()
            .and_then(|r| r.limits.as_ref())
        {
            for (resource, quantity) in container_limits {
                limits.push(format!("{}={}", resource, quantity.0));
            }
        }
    }

    let volumes = spec
        .volumes
        .as_ref()
        .map(|vols| vols.iter().map(|v| v.name.clone()).collect())
        .unwrap_or_default();

    // ...while mounts and env come from container index 0 only; pods with
    // several containers report just their first one.
    let first = &spec.containers[0];
    let mounts = first
        .volume_mounts
        .as_ref()
        .map(|ms| ms.iter().map(|m| m.name.clone()).collect())
        .unwrap_or_default();
    let env = first
        .env
        .as_ref()
        .map(|envs| {
            envs.iter()
                .map(|e| format!("{}={}", e.name, e.value.as_deref().unwrap_or_default()))
                .collect()
        })
        .unwrap_or_default();

    ControllerRecord {
        labels: parts
            .labels
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect(),
        limits,
        volumes,
        mounts,
        env,
        controlled_by: parts.controlled_by.unwrap_or_default(),
    }
}

fn snapshot_selection(
    base: Selection,
    namespace: &str,
    controller_type: &str,
) -> Selection {
    base.filter("namespace", namespace)
        .filter("controller_type", controller_type)
}

/// Stored controller snapshots, filtered and paged; store order, no sort.
pub async fn list_controllers(
    store: &Arc<dyn MetricStore>,
    namespace: &str,
    controller_type: &str,
    page: PageDescriptor,
) -> Result<Vec<ControllerSnapshotEntity>, AppError> {
    let selection = snapshot_selection(Selection::paged(page), namespace, controller_type);
    store.find_controller_snapshots(&selection).await
}

pub async fn count_controllers(
    store: &Arc<dyn MetricStore>,
    namespace: &str,
    controller_type: &str,
) -> Result<u64, AppError> {
    let selection = snapshot_selection(Selection::unpaged(), namespace, controller_type);
    store.count_controller_snapshots(&selection).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::client::resources::PodTemplateSpec;
    use k8s_openapi::api::core::v1::{
        Container, EnvVar, PodSpec, ResourceRequirements, Volume, VolumeMount,
    };
    use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
    use std::collections::BTreeMap;

    fn parts_with_template(template: Option<PodTemplateSpec>) -> ControllerParts {
        ControllerParts {
            labels: BTreeMap::new(),
            controlled_by: None,
            template,
            conditions: Some(Vec::new()),
        }
    }

    fn container(name: &str) -> Container {
        Container {
            name: name.to_string(),
            ..Container::default()
        }
    }

    #[test]
    fn zero_containers_yield_all_empty_record() {
        let template = PodTemplateSpec {
            spec: Some(PodSpec {
                containers: vec![],
                ..PodSpec::default()
            }),
            ..PodTemplateSpec::default()
        };
        let record = project_parts(parts_with_template(Some(template)));
        assert_eq!(record, ControllerRecord::default());
    }

    #[test]
    fn missing_template_yields_all_empty_record() {
        let record = project_parts(parts_with_template(None));
        assert_eq!(record, ControllerRecord::default());
    }

    #[test]
    fn limits_span_all_containers() {
        let mut limits_a = BTreeMap::new();
        limits_a.insert("cpu".to_string(), Quantity("500m".to_string()));
        let mut limits_b = BTreeMap::new();
        limits_b.insert("memory".to_string(), Quantity("256Mi".to_string()));

        let mut a = container("a");
        a.resources = Some(ResourceRequirements {
            limits: Some(limits_a),
            ..ResourceRequirements::default()
        });
        let mut b = container("b");
        b.resources = Some(ResourceRequirements {
            limits: Some(limits_b),
            ..ResourceRequirements::default()
        });

        let template = PodTemplateSpec {
            spec: Some(PodSpec {
                containers: vec![a, b],
                ..PodSpec::default()
            }),
            ..PodTemplateSpec::default()
        };
        let record = project_parts(parts_with_template(Some(template)));
        assert_eq!(record.limits, vec!["cpu=500m", "memory=256Mi"]);
    }

    #[test]
    fn mounts_and_env_come_from_first_container_only() {
        let mut first = container("first");
        first.volume_mounts = Some(vec![VolumeMount {
            name: "data".to_string(),
            ..VolumeMount::default()
        }]);
        first.env = Some(vec![EnvVar {
            name: "MODE".to_string(),
            value: Some("prod".to_string()),
            ..EnvVar::default()
        }]);

        let mut second = container("second");
        second.volume_mounts = Some(vec![VolumeMount {
            name: "ignored".to_string(),
            ..VolumeMount::default()
        }]);

        let template = PodTemplateSpec {
            spec: Some(PodSpec {
                containers: vec![first, second],
                volumes: Some(vec![Volume {
                    name: "data".to_string(),
                    ..Volume::default()
                }]),
                ..PodSpec::default()
            }),
            ..PodTemplateSpec::default()
        };
        let record = project_parts(parts_with_template(Some(template)));
        assert_eq!(record.mounts, vec!["data"]);
        assert_eq!(record.env, vec!["MODE=prod"]);
        assert_eq!(record.volumes, vec!["data"]);
    }

    #[test]
    fn labels_and_owner_render_for_any_kind() {
        let mut labels = BTreeMap::new();
        labels.insert("app".to_string(), "web".to_string());

        let template = PodTemplateSpec {
            spec: Some(PodSpec {
                containers: vec![container("only")],
                ..PodSpec::default()
            }),
            ..PodTemplateSpec::default()
        };
        let record = project_parts(ControllerParts {
            labels,
            controlled_by: Some("web-rs".to_string()),
            template: Some(template),
            conditions: None,
        });
        assert_eq!(record.labels, vec!["app=web"]);
        assert_eq!(record.controlled_by, "web-rs");
    }
}
