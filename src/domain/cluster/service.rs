use kube::Client;

use crate::api::dto::node_dto::{NodeCount, NodeInfo};
use crate::api::dto::overview_dto::{NodeStatus, Overview, PodStatus};
use crate::core::client::nodes::{fetch_node_by_name, fetch_nodes};
use crate::core::client::pods::{fetch_pod_logs, fetch_pods, fetch_pods_by_node};
use crate::core::util::quantity::quantity_value;
use crate::domain::cluster::classify::{classify_nodes, classify_pods, is_node_ready};
use crate::errors::AppError;

const BYTES_PER_GIB: i64 = 1024 * 1024 * 1024;

/// Readiness and phase buckets over fresh node and pod snapshots. Fails as
/// a whole when either snapshot fetch fails; no partial overview is served.
pub async fn overview_status(client: &Client) -> Result<Overview, AppError> {
    let nodes = fetch_nodes(client).await?;
    let pods = fetch_pods(client).await?;

    let (ready, not_ready) = classify_nodes(&nodes);
    let (running, pending, error) = classify_pods(&pods);

    Ok(Overview {
        node_status: NodeStatus { not_ready, ready },
        pod_status: PodStatus {
            error,
            pending,
            running,
        },
    })
}

pub async fn node_info(client: &Client, node_name: &str) -> Result<NodeInfo, AppError> {
    let node = fetch_node_by_name(client, node_name).await?;
    let pods = fetch_pods_by_node(client, node_name).await?;

    let num_containers = pods
        .iter()
        .filter_map(|p| p.spec.as_ref())
        .map(|spec| spec.containers.len())
        .sum();

    let status = node.status.as_ref();
    let sys = status.and_then(|s| s.node_info.as_ref());
    let capacity = status.and_then(|s| s.capacity.as_ref());

    Ok(NodeInfo {
        host_name: node.metadata.name.clone().unwrap_or_default(),
        ip: status
            .and_then(|s| s.addresses.as_ref())
            .and_then(|addrs| addrs.first())
            .map(|a| a.address.clone())
            .unwrap_or_default(),
        status: if is_node_ready(&node) { "Ready" } else { "NotReady" }.to_string(),
        os: sys.map(|i| i.os_image.clone()).unwrap_or_default(),
        kubelet_version: sys.map(|i| i.kubelet_version.clone()).unwrap_or_default(),
        container_runtime_version: sys
            .map(|i| i.container_runtime_version.clone())
            .unwrap_or_default(),
        num_containers,
        cpu_cores: capacity
            .and_then(|c| c.get("cpu"))
            .map(quantity_value)
            .unwrap_or(0),
        ram_capacity: capacity
            .and_then(|c| c.get("memory"))
            .map(quantity_value)
            .unwrap_or(0)
            / BYTES_PER_GIB,
    })
}

pub async fn count_nodes(client: &Client) -> Result<NodeCount, AppError> {
    let nodes = fetch_nodes(client).await?;
    Ok(NodeCount { count: nodes.len() })
}

/// Tail a pod's recent log lines, each prefixed with the pod name. The
/// kubelet timestamps are kept at the start of every line.
pub async fn pod_logs(
    client: &Client,
    namespace: &str,
    pod_name: &str,
    tail_lines: i64,
) -> Result<Vec<String>, AppError> {
    let raw = fetch_pod_logs(client, namespace, pod_name, tail_lines).await?;
    Ok(format_log_lines(&raw, pod_name))
}

fn format_log_lines(raw: &str, pod_name: &str) -> Vec<String> {
    raw.lines()
        .map(|line| match line.split_once(' ') {
            Some((timestamp, rest)) => format!("{timestamp} [{pod_name}] {rest}"),
            None => format!("[{pod_name}] {line}"),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_lines_are_prefixed_with_pod_name() {
        let raw = "2024-05-01T12:00:00Z started\n2024-05-01T12:00:01Z listening\n";
        let lines = format_log_lines(raw, "web-abc");
        assert_eq!(
            lines,
            vec![
                "2024-05-01T12:00:00Z [web-abc] started",
                "2024-05-01T12:00:01Z [web-abc] listening",
            ]
        );
    }

    #[test]
    fn line_without_timestamp_still_tagged() {
        let lines = format_log_lines("bare", "p");
        assert_eq!(lines, vec!["[p] bare"]);
    }
}
