use axum::Json;

use crate::api::dto::ApiResponse;
use crate::errors::AppError;

/// Wrap a domain result as Json<ApiResponse<T>>; errors pass through and
/// pick their status code in AppError's IntoResponse.
pub fn to_json<T: serde::Serialize>(
    result: Result<T, AppError>,
) -> Result<Json<ApiResponse<T>>, AppError> {
    result.map(|v| Json(ApiResponse::ok(v)))
}
