use axum::extract::{Path, Query, State};
use axum::Json;

use crate::api::dto::query_dto::ControllerListQuery;
use crate::api::dto::{ApiResponse, CountResponse};
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::client::workloads::ConditionRecord;
use crate::core::persistence::entities::ControllerSnapshotEntity;
use crate::domain::workload::service::{self, ControllerRecord};
use crate::errors::AppError;

pub struct WorkloadController;

impl WorkloadController {
    pub async fn get_controller_info(
        State(state): State<AppState>,
        Path((kind, namespace, name)): Path<(String, String, String)>,
    ) -> Result<Json<ApiResponse<ControllerRecord>>, AppError> {
        to_json(service::normalize_controller(&state.kube, &kind, &namespace, &name).await)
    }

    pub async fn get_conditions(
        State(state): State<AppState>,
        Path((kind, namespace, name)): Path<(String, String, String)>,
    ) -> Result<Json<ApiResponse<Vec<ConditionRecord>>>, AppError> {
        to_json(service::get_conditions(&state.kube, &kind, &namespace, &name).await)
    }

    pub async fn list_controllers(
        State(state): State<AppState>,
        Query(q): Query<ControllerListQuery>,
    ) -> Result<Json<ApiResponse<Vec<ControllerSnapshotEntity>>>, AppError> {
        to_json(
            service::list_controllers(
                &state.store,
                &q.namespace,
                &q.controller_type,
                q.page(),
            )
            .await,
        )
    }

    pub async fn count_controllers(
        State(state): State<AppState>,
        Query(q): Query<ControllerListQuery>,
    ) -> Result<Json<ApiResponse<CountResponse>>, AppError> {
        to_json(
            service::count_controllers(&state.store, &q.namespace, &q.controller_type)
                .await
                .map(|count| CountResponse { count }),
        )
    }
}
