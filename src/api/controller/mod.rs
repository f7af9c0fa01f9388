pub mod event_controller;
pub mod node_controller;
pub mod overview_controller;
pub mod pod_controller;
pub mod workload_controller;
