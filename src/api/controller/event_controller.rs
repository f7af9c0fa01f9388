use axum::extract::{Query, State};
use axum::Json;

use crate::api::dto::query_dto::EventListQuery;
use crate::api::dto::{ApiResponse, CountResponse};
use crate::api::util::json::to_json;
use crate::app_state::AppState;
use crate::core::persistence::entities::EventEntity;
use crate::domain::event::service;
use crate::errors::AppError;

pub struct EventController;

impl EventController {
    /// Example: /events?event=warning&page=1&per_page=10
    pub async fn list_events(
        State(state): State<AppState>,
        Query(q): Query<EventListQuery>,
    ) -> Result<Json<ApiResponse<Vec<EventEntity>>>, AppError> {
        to_json(service::list_events(&state.store, &q.event, q.page()).await)
    }

    pub async fn count_events(
        State(state): State<AppState>,
        Query(q): Query<EventListQuery>,
    ) -> Result<Json<ApiResponse<CountResponse>>, AppError> {
        to_json(
            service::count_events(&state.store, &q.event)
                .await
                .map(|count| CountResponse { count }),
        )
    }
}
