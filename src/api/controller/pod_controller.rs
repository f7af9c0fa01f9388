use axum::extract::{Path, State};
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::cluster::service;
use crate::errors::AppError;

pub struct PodController;

impl PodController {
    pub async fn get_pod_logs(
        State(state): State<AppState>,
        Path((namespace, pod_name)): Path<(String, String)>,
    ) -> Result<Json<ApiResponse<Vec<String>>>, AppError> {
        to_json(
            service::pod_logs(
                &state.kube,
                &namespace,
                &pod_name,
                state.config.log_tail_lines,
            )
            .await,
        )
    }
}
