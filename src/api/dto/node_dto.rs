use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct NodeInfo {
    pub host_name: String,
    pub ip: String,
    pub status: String,
    pub os: String,
    pub kubelet_version: String,
    pub container_runtime_version: String,
    pub num_containers: usize,
    pub cpu_cores: i64,
    /// GiB
    pub ram_capacity: i64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct NodeCount {
    pub count: usize,
}
