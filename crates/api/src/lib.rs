//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - The finance action endpoints
//! - The health check
//! - The response envelope shared by every route

pub mod response;
pub mod routes;

use std::any::Any;

use axum::Router;
use axum::response::{IntoResponse, Response};
use jamii_shared::AppError;
use jamii_store::FinanceRepository;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::response::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository over the in-memory finance store.
    pub finance: FinanceRepository,
}

impl AppState {
    /// Creates the state from a finance repository.
    #[must_use]
    pub const fn new(finance: FinanceRepository) -> Self {
        Self { finance }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(AnyOrigin)
                .allow_methods(AnyOrigin)
                .allow_headers(AnyOrigin),
        )
        .with_state(state)
}

/// Turns a handler panic into a generic 500 response.
#[allow(clippy::needless_pass_by_value)]
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");
    error!(panic = %detail, "Request handler panicked");

    ApiError::from(AppError::Internal(detail.to_string())).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{body::Body, http::Request, http::StatusCode};
    use http_body_util::BodyExt;
    use jamii_shared::FinancePolicy;
    use jamii_store::FinanceStore;
    use tower::ServiceExt;

    fn state() -> AppState {
        AppState::new(FinanceRepository::new(
            Arc::new(FinanceStore::new()),
            FinancePolicy::default(),
        ))
    }

    #[tokio::test]
    async fn test_panic_becomes_generic_500() {
        let response = handle_panic(Box::new("index out of bounds"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], serde_json::json!(false));
        assert_eq!(body["message"], serde_json::json!("An internal error occurred"));
    }

    #[tokio::test]
    async fn test_router_nests_under_api_v1() {
        let app = create_router(state());

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/finances?eventId=e1&action=getFinancialData")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/finances?eventId=e1&action=getFinancialData")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
