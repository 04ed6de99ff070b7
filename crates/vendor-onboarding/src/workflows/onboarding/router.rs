use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::{json, Value};

use super::assignment::AssignmentResult;
use super::backend::SubmissionBackend;
use super::catalog::ProductCatalog;
use super::domain::{OnboardingForm, VendorCode};
use super::service::{Delivery, OnboardingService};
use super::validation::{validate_form, StepValidationError};

/// Router builder exposing HTTP endpoints for submission, assignment
/// preview, and the product catalog.
pub fn onboarding_router<B>(service: Arc<OnboardingService<B>>) -> Router
where
    B: SubmissionBackend + 'static,
{
    Router::new()
        .route(
            "/api/v1/onboarding/submissions",
            post(submit_handler::<B>),
        )
        .route(
            "/api/v1/onboarding/assignment",
            post(assignment_handler::<B>),
        )
        .route("/api/v1/onboarding/catalog", get(catalog_handler))
        .with_state(service)
}

/// Response view for a completed submission. Delivery failure is carried in
/// the body, not the status: the submission itself succeeded.
#[derive(Debug, Serialize)]
pub struct SubmissionView {
    pub vendor_id: String,
    pub assigned_vendor: VendorCode,
    pub assignment_reason: String,
    pub delivery: Delivery,
    pub download_filename: String,
    pub record: Value,
}

pub(crate) async fn submit_handler<B>(
    State(service): State<Arc<OnboardingService<B>>>,
    axum::Json(form): axum::Json<OnboardingForm>,
) -> Response
where
    B: SubmissionBackend + 'static,
{
    if let Err(error) = validate_form(&form) {
        return validation_response(error);
    }

    let outcome = service.submit(form).await;
    let view = SubmissionView {
        vendor_id: outcome.record.vendor_id.clone(),
        assigned_vendor: outcome.record.assignment.vendor,
        assignment_reason: outcome.record.assignment.reason.clone(),
        delivery: outcome.delivery,
        download_filename: outcome.download_filename,
        record: outcome.full_record,
    };
    (StatusCode::CREATED, axum::Json(view)).into_response()
}

pub(crate) async fn assignment_handler<B>(
    State(service): State<Arc<OnboardingService<B>>>,
    axum::Json(form): axum::Json<OnboardingForm>,
) -> axum::Json<AssignmentResult>
where
    B: SubmissionBackend + 'static,
{
    axum::Json(service.preview_assignment(&form))
}

pub(crate) async fn catalog_handler() -> axum::Json<Value> {
    let catalog = ProductCatalog::global();
    axum::Json(json!({ "families": catalog.families() }))
}

fn validation_response(error: StepValidationError) -> Response {
    let payload = match &error {
        StepValidationError::MissingFields(fields) => json!({
            "error": "missing required fields",
            "missing_fields": fields,
        }),
        StepValidationError::InvalidField { field, message } => json!({
            "error": message,
            "field": field,
        }),
    };
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
