//! Response envelope shared by the finance routes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use jamii_core::FinanceError;
use jamii_shared::AppError;
use serde::Serialize;
use serde_json::json;
use tracing::{error, warn};

/// Result type for route helpers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Successful response body.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Always true for this body.
    pub success: bool,
    /// Payload of the action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Optional human-readable note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Wraps a payload in a `200 OK` success envelope.
pub fn success<T: Serialize>(data: T) -> Response {
    (
        StatusCode::OK,
        Json(ApiResponse {
            success: true,
            data: Some(data),
            message: None,
        }),
    )
        .into_response()
}

/// Error answered with `success: false` and the mapped status code.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<FinanceError> for ApiError {
    fn from(err: FinanceError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = if status.is_server_error() {
            error!(error = %self.0, "Request failed");
            "An internal error occurred".to_string()
        } else {
            warn!(error = %self.0, status = status.as_u16(), "Request rejected");
            self.0.to_string()
        };

        (
            status,
            Json(json!({
                "success": false,
                "error": self.0.error_code(),
                "message": message,
            })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jamii_shared::types::EventId;

    #[test]
    fn test_finance_not_found_is_404() {
        let response =
            ApiError::from(FinanceError::FundraisingNotFound(EventId::from("e1"))).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_internal_error_is_500() {
        let response = ApiError::from(AppError::Internal("boom".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_tracking_disabled_is_422() {
        let response =
            ApiError::from(FinanceError::TrackingDisabled(EventId::from("e1"))).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
