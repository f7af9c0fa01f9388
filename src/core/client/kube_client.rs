use kube::Client;
use tracing::debug;

use crate::errors::{from_kube, AppError};

/// Creates a Kubernetes client for in-cluster or local development use.
/// `Client::try_default` reads the service account token in-cluster and
/// falls back to the local kubeconfig otherwise.
pub async fn build_kube_client() -> Result<Client, AppError> {
    let client = Client::try_default()
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    // Fail fast at startup rather than on the first query.
    client.apiserver_version().await.map_err(from_kube)?;

    debug!("Kubernetes client initialized");
    Ok(client)
}
