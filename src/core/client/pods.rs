use kube::api::{ListParams, LogParams};
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::resources::Pod;
use crate::errors::{from_kube, AppError};

/// Fetch all pods across every namespace.
pub async fn fetch_pods(client: &Client) -> Result<Vec<Pod>, AppError> {
    let pods: Api<Pod> = Api::all(client.clone());
    let pod_list = pods.list(&ListParams::default()).await.map_err(from_kube)?;

    debug!("Discovered {} pod(s)", pod_list.items.len());
    Ok(pod_list.items)
}

/// Fetch pods scheduled on a specific node.
pub async fn fetch_pods_by_node(client: &Client, node_name: &str) -> Result<Vec<Pod>, AppError> {
    let pods: Api<Pod> = Api::all(client.clone());
    let field_selector = format!("spec.nodeName={}", node_name);
    let lp = ListParams::default().fields(&field_selector);
    let pod_list = pods.list(&lp).await.map_err(from_kube)?;

    debug!("Found {} pod(s) on node '{}'", pod_list.items.len(), node_name);
    Ok(pod_list.items)
}

/// Tail the last `tail_lines` log lines of a pod, with kubelet timestamps.
pub async fn fetch_pod_logs(
    client: &Client,
    namespace: &str,
    pod_name: &str,
    tail_lines: i64,
) -> Result<String, AppError> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);
    let params = LogParams {
        timestamps: true,
        tail_lines: Some(tail_lines),
        ..LogParams::default()
    };
    let logs = pods.logs(pod_name, &params).await.map_err(from_kube)?;

    debug!("Fetched logs for pod: {}/{}", namespace, pod_name);
    Ok(logs)
}
