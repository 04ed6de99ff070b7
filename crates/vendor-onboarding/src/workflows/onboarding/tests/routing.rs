use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt;

use super::common::{recording_service, rejecting_service, rmb_form, usd_form};
use crate::workflows::onboarding::domain::OnboardingForm;
use crate::workflows::onboarding::router::onboarding_router;

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("json body")
}

fn form_body(form: &OnboardingForm) -> Value {
    serde_json::to_value(form).expect("form serializes")
}

#[tokio::test]
async fn valid_submission_returns_created_with_the_full_record() {
    let (service, backend) = recording_service();
    let app: Router = onboarding_router(service);

    let response = app
        .oneshot(post_json(
            "/api/v1/onboarding/submissions",
            &form_body(&usd_form()),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["assigned_vendor"], "LXX");
    assert_eq!(body["delivery"]["status"], "delivered");
    assert_eq!(body["vendor_id"].as_str().map(str::len), Some(12));
    assert_eq!(
        body["download_filename"],
        format!("vendor_setup_{}.json", body["vendor_id"].as_str().unwrap())
    );
    assert!(body["record"]["_metadata"].is_object());

    // The backend saw exactly one array-of-one payload without metadata.
    let calls = backend.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].len(), 1);
    assert!(calls[0][0].get("_metadata").is_none());
}

#[tokio::test]
async fn backend_rejection_still_returns_created() {
    let app: Router = onboarding_router(rejecting_service());

    let response = app
        .oneshot(post_json(
            "/api/v1/onboarding/submissions",
            &form_body(&rmb_form()),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["assigned_vendor"], "LX");
    assert_eq!(body["delivery"]["status"], "failed");
    assert_eq!(body["delivery"]["code"], "API_ERROR");
    assert_eq!(body["delivery"]["message"], "duplicate customer number");
}

#[tokio::test]
async fn incomplete_forms_are_rejected_with_the_missing_fields() {
    let (service, backend) = recording_service();
    let app: Router = onboarding_router(service);

    let mut form = usd_form();
    form.company_legal_name = String::new();

    let response = app
        .oneshot(post_json(
            "/api/v1/onboarding/submissions",
            &form_body(&form),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert_eq!(body["missing_fields"], json!(["Company Legal Name"]));
    assert!(backend.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn malformed_fields_are_rejected_with_the_field_name() {
    let (service, _backend) = recording_service();
    let app: Router = onboarding_router(service);

    let mut form = usd_form();
    form.invoice_receiving_email = "not-an-email".to_string();

    let response = app
        .oneshot(post_json(
            "/api/v1/onboarding/submissions",
            &form_body(&form),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert_eq!(body["field"], "Invoice Receiving Email");
}

#[tokio::test]
async fn assignment_preview_does_not_touch_the_backend() {
    let (service, backend) = recording_service();
    let app: Router = onboarding_router(service);

    let response = app
        .oneshot(post_json(
            "/api/v1/onboarding/assignment",
            &form_body(&rmb_form()),
        ))
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["vendor"], "LX");
    assert_eq!(body["reason"], "Currency is RMB → LX");
    assert!(backend.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn catalog_endpoint_lists_the_families() {
    let (service, _backend) = recording_service();
    let app: Router = onboarding_router(service);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/onboarding/catalog")
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("router responds");

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    let families = body["families"].as_array().expect("families array");
    assert_eq!(families.len(), 11);
    assert_eq!(families[0]["family"], "ESP32-P4");
    assert_eq!(families[1]["groups"][0]["label"], "SoCs");
}
