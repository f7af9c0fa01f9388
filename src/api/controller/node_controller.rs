use axum::extract::{Path, State};
use axum::Json;

use crate::api::dto::node_dto::{NodeCount, NodeInfo};
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::entities::{NodeSampleEntity, UsageBucket};
use crate::domain::cluster::service as cluster_service;
use crate::domain::metric::service as metric_service;
use crate::errors::AppError;

pub struct NodeController;

impl NodeController {
    pub async fn get_node_info(
        State(state): State<AppState>,
        Path(node_name): Path<String>,
    ) -> Result<Json<ApiResponse<NodeInfo>>, AppError> {
        to_json(cluster_service::node_info(&state.kube, &node_name).await)
    }

    pub async fn count_nodes(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<NodeCount>>, AppError> {
        to_json(cluster_service::count_nodes(&state.kube).await)
    }

    pub async fn get_fleet_usage(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Vec<UsageBucket>>>, AppError> {
        to_json(metric_service::average_usage_across_nodes(&state.store).await)
    }

    pub async fn get_node_usage(
        State(state): State<AppState>,
        Path(node_name): Path<String>,
    ) -> Result<Json<ApiResponse<Vec<NodeSampleEntity>>>, AppError> {
        to_json(metric_service::usage_for_node(&state.store, &node_name).await)
    }
}
