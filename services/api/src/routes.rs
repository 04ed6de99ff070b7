use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use vendor_onboarding::workflows::onboarding::{
    onboarding_router, OnboardingService, SubmissionBackend,
};

pub(crate) fn with_onboarding_routes<B>(service: Arc<OnboardingService<B>>) -> axum::Router
where
    B: SubmissionBackend + 'static,
{
    let readiness_service = service.clone();
    onboarding_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route(
            "/ready",
            axum::routing::get(move |Extension(state): Extension<AppState>| {
                readiness_endpoint(state, readiness_service.clone())
            }),
        )
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Readiness is governed by the local flag; the submission backend is
/// probed and reported alongside, but a down backend does not flip the
/// status because submissions degrade to a downloadable record.
pub(crate) async fn readiness_endpoint<B>(
    state: AppState,
    service: Arc<OnboardingService<B>>,
) -> impl IntoResponse
where
    B: SubmissionBackend + 'static,
{
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let backend = if service.backend_health().await {
        "ok"
    } else {
        "unreachable"
    };
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = json!({
        "status": if ready { "ready" } else { "initializing" },
        "backend": backend,
    });

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
