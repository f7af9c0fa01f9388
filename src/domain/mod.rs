pub mod cluster;
pub mod event;
pub mod metric;
pub mod workload;
