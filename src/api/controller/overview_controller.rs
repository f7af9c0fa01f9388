use axum::extract::State;
use axum::Json;

use crate::api::dto::overview_dto::Overview;
use crate::api::dto::ApiResponse;
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::domain::cluster::service;
use crate::errors::AppError;

pub struct OverviewController;

impl OverviewController {
    pub async fn get_overview_status(
        State(state): State<AppState>,
    ) -> Result<Json<ApiResponse<Overview>>, AppError> {
        to_json(service::overview_status(&state.kube).await)
    }
}
