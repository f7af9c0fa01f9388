use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::api::controller::event_controller::EventController;
use crate::api::controller::node_controller::NodeController;
use crate::api::controller::overview_controller::OverviewController;
use crate::api::controller::pod_controller::PodController;
use crate::api::controller::workload_controller::WorkloadController;
use crate::app_state::AppState;

/// Build the main application router
pub fn app_router() -> Router<AppState> {
    Router::new()
        // Root route
        .route("/", get(root))
        // Health check
        .route("/health", get(health_check))
        // Overview
        .route("/overview/status", get(OverviewController::get_overview_status))
        // Nodes
        .route("/nodes/count", get(NodeController::count_nodes))
        .route("/nodes/usage", get(NodeController::get_fleet_usage))
        .route("/nodes/{node_name}", get(NodeController::get_node_info))
        .route("/nodes/{node_name}/usage", get(NodeController::get_node_usage))
        // Controllers
        .route("/controllers", get(WorkloadController::list_controllers))
        .route("/controllers/count", get(WorkloadController::count_controllers))
        .route(
            "/controllers/{kind}/{namespace}/{name}",
            get(WorkloadController::get_controller_info),
        )
        .route(
            "/controllers/{kind}/{namespace}/{name}/conditions",
            get(WorkloadController::get_conditions),
        )
        // Events (example: /events?event=warning&page=1&per_page=10)
        .route("/events", get(EventController::list_events))
        .route("/events/count", get(EventController::count_events))
        // Pod logs
        .route("/pods/{namespace}/{pod_name}/logs", get(PodController::get_pod_logs))
        // Fallback handler for 404
        .fallback(handler_404)
        .layer(CorsLayer::very_permissive())
}

async fn root() -> &'static str {
    "Server is running!"
}

async fn health_check() -> &'static str {
    "OK"
}

async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "The requested resource was not found")
}
