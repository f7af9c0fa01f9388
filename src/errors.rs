use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// The cluster API or the sample store could not be reached.
    #[error("Upstream unavailable: {0}")]
    Upstream(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A store query or aggregation failed; the original cause is kept.
    #[error("Store error: {0}")]
    Store(anyhow::Error),
}

impl AppError {
    /// Entry point for store adapters: wrap a backing-store failure while
    /// keeping its cause.
    #[allow(dead_code)]
    pub fn store<E: Into<anyhow::Error>>(err: E) -> Self {
        AppError::Store(err.into())
    }
}

/// Map kube client failures into the error taxonomy: a 404 from the API
/// server is NotFound, everything else means the upstream is unavailable.
pub fn from_kube(err: kube::Error) -> AppError {
    match err {
        kube::Error::Api(resp) if resp.code == 404 => AppError::NotFound(resp.message),
        other => AppError::Upstream(other.to_string()),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "message": self.to_string()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kube_404_maps_to_not_found() {
        let resp = kube::core::ErrorResponse {
            status: "Failure".into(),
            message: "deployments.apps \"web\" not found".into(),
            reason: "NotFound".into(),
            code: 404,
        };
        let err = from_kube(kube::Error::Api(resp));
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn kube_other_maps_to_upstream() {
        let resp = kube::core::ErrorResponse {
            status: "Failure".into(),
            message: "forbidden".into(),
            reason: "Forbidden".into(),
            code: 403,
        };
        let err = from_kube(kube::Error::Api(resp));
        assert!(matches!(err, AppError::Upstream(_)));
    }
}
