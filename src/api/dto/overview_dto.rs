use serde::Serialize;

#[derive(Debug, Serialize, PartialEq)]
pub struct Overview {
    pub node_status: NodeStatus,
    pub pod_status: PodStatus,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct NodeStatus {
    pub not_ready: Vec<String>,
    pub ready: Vec<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct PodStatus {
    pub error: Vec<String>,
    pub pending: Vec<String>,
    pub running: usize,
}
