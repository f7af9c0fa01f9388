//! Pure classification of a live cluster snapshot into status buckets.

use crate::core::client::resources::{Node, Pod};

/// Every node lands in exactly one bucket: Ready iff it carries a `Ready`
/// condition whose status is `"True"`; absence of the condition, or any
/// other status value, is NotReady.
pub fn classify_nodes(nodes: &[Node]) -> (Vec<String>, Vec<String>) {
    let mut ready = Vec::new();
    let mut not_ready = Vec::new();

    for node in nodes {
        let name = node.metadata.name.clone().unwrap_or_default();
        if is_node_ready(node) {
            ready.push(name);
        } else {
            not_ready.push(name);
        }
    }

    (ready, not_ready)
}

pub fn is_node_ready(node: &Node) -> bool {
    node.status
        .as_ref()
        .and_then(|s| s.conditions.as_ref())
        .and_then(|conditions| conditions.iter().find(|c| c.type_ == "Ready"))
        .map(|c| c.status == "True")
        .unwrap_or(false)
}

/// Succeeded pods fold into the running tally, so "running" does not mean
/// "currently executing". Failed and any unrecognized or absent phase count
/// as errored.
pub fn classify_pods(pods: &[Pod]) -> (usize, Vec<String>, Vec<String>) {
    let mut running = 0;
    let mut pending = Vec::new();
    let mut errored = Vec::new();

    for pod in pods {
        let name = pod.metadata.name.clone().unwrap_or_default();
        let phase = pod
            .status
            .as_ref()
            .and_then(|s| s.phase.as_deref())
            .unwrap_or("");

        match phase {
            "Running" | "Succeeded" => running += 1,
            "Pending" => pending.push(name),
            _ => errored.push(name),
        }
    }

    (running, pending, errored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::core::v1::{NodeCondition, NodeStatus, PodStatus};
    use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

    fn node(name: &str, ready_status: Option<&str>) -> Node {
        let conditions = ready_status.map(|status| {
            vec![NodeCondition {
                type_: "Ready".to_string(),
                status: status.to_string(),
                ..NodeCondition::default()
            }]
        });
        Node {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..ObjectMeta::default()
            },
            status: Some(NodeStatus {
                conditions,
                ..NodeStatus::default()
            }),
            ..Node::default()
        }
    }

    fn pod(name: &str, phase: Option<&str>) -> Pod {
        Pod {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..ObjectMeta::default()
            },
            status: Some(PodStatus {
                phase: phase.map(str::to_string),
                ..PodStatus::default()
            }),
            ..Pod::default()
        }
    }

    #[test]
    fn nodes_partition_by_ready_condition() {
        let nodes = vec![node("n1", Some("True")), node("n2", Some("False"))];
        let (ready, not_ready) = classify_nodes(&nodes);
        assert_eq!(ready, vec!["n1"]);
        assert_eq!(not_ready, vec!["n2"]);
    }

    #[test]
    fn missing_or_unknown_condition_is_not_ready() {
        let nodes = vec![node("n1", None), node("n2", Some("Unknown"))];
        let (ready, not_ready) = classify_nodes(&nodes);
        assert!(ready.is_empty());
        assert_eq!(not_ready, vec!["n1", "n2"]);
    }

    #[test]
    fn node_partition_is_total_and_disjoint() {
        let nodes = vec![
            node("a", Some("True")),
            node("b", Some("False")),
            node("c", None),
            node("d", Some("True")),
        ];
        let (ready, not_ready) = classify_nodes(&nodes);
        assert_eq!(ready.len() + not_ready.len(), nodes.len());
        assert!(ready.iter().all(|n| !not_ready.contains(n)));
    }

    #[test]
    fn pod_phases_bucket_with_succeeded_as_running() {
        let pods = vec![
            pod("p1", Some("Running")),
            pod("p2", Some("Pending")),
            pod("p3", Some("Succeeded")),
            pod("p4", Some("Failed")),
        ];
        let (running, pending, errored) = classify_pods(&pods);
        assert_eq!(running, 2);
        assert_eq!(pending, vec!["p2"]);
        assert_eq!(errored, vec!["p4"]);
    }

    #[test]
    fn unrecognized_phase_counts_as_errored() {
        let pods = vec![pod("p1", Some("Evicted")), pod("p2", None)];
        let (running, pending, errored) = classify_pods(&pods);
        assert_eq!(running, 0);
        assert!(pending.is_empty());
        assert_eq!(errored, vec!["p1", "p2"]);
    }

    #[test]
    fn pod_counts_cover_every_pod() {
        let pods = vec![
            pod("p1", Some("Running")),
            pod("p2", Some("Pending")),
            pod("p3", Some("Succeeded")),
            pod("p4", Some("Failed")),
            pod("p5", Some("Weird")),
        ];
        let (running, pending, errored) = classify_pods(&pods);
        assert_eq!(running + pending.len() + errored.len(), pods.len());
    }
}
