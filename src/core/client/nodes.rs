use kube::api::ListParams;
use kube::{Api, Client};
use tracing::debug;

use crate::core::client::resources::Node;
use crate::errors::{from_kube, AppError};

/// Fetch all nodes in the cluster.
pub async fn fetch_nodes(client: &Client) -> Result<Vec<Node>, AppError> {
    let nodes: Api<Node> = Api::all(client.clone());
    let node_list = nodes.list(&ListParams::default()).await.map_err(from_kube)?;

    debug!("Discovered {} node(s)", node_list.items.len());
    Ok(node_list.items)
}

/// Fetch a single node by name.
pub async fn fetch_node_by_name(client: &Client, name: &str) -> Result<Node, AppError> {
    let nodes: Api<Node> = Api::all(client.clone());
    let node = nodes.get(name).await.map_err(from_kube)?;

    debug!("Fetched node: {}", name);
    Ok(node)
}
