pub mod kube_client;
pub mod nodes;
pub mod pods;
pub mod resources;
pub mod watchers;
pub mod workloads;
