use std::sync::Arc;

use super::common::{
    offline_resolver, recording_service, rejecting_service, usd_form, RecordingBackend,
};
use crate::workflows::onboarding::service::OnboardingService;

fn prefilled_service(specialist: &str) -> OnboardingService<RecordingBackend> {
    OnboardingService::new(Arc::new(RecordingBackend::default()), offline_resolver())
        .with_business_specialist(Some(specialist.to_string()))
}

#[tokio::test]
async fn configured_specialist_fills_a_blank_form() {
    let service = prefilled_service("李雷");

    let mut form = usd_form();
    form.business_specialist.clear();
    let outcome = service.submit(form).await;

    assert_eq!(outcome.record.form.business_specialist, "李雷");
    assert_eq!(outcome.full_record["sale_user_number"], "李雷");
}

#[tokio::test]
async fn submitted_specialist_wins_over_the_configured_default() {
    let service = prefilled_service("李雷");

    let outcome = service.submit(usd_form()).await;

    assert_eq!(outcome.record.form.business_specialist, "王娜娜");
    assert_eq!(outcome.full_record["sale_user_number"], "王娜娜");
}

#[tokio::test]
async fn blank_configured_specialist_is_treated_as_absent() {
    let service = prefilled_service("   ");

    let mut form = usd_form();
    form.business_specialist.clear();
    let outcome = service.submit(form).await;

    // No specialist anywhere serializes as the false sentinel.
    assert_eq!(outcome.full_record["sale_user_number"], false);
}

#[tokio::test]
async fn unconfigured_service_leaves_the_form_untouched() {
    let (service, _backend) = recording_service();

    let mut form = usd_form();
    form.business_specialist.clear();
    let outcome = service.submit(form).await;

    assert!(outcome.record.form.business_specialist.is_empty());
}

#[tokio::test]
async fn backend_health_is_reported_through_the_service() {
    let (service, _backend) = recording_service();
    assert!(service.backend_health().await);

    let service = rejecting_service();
    assert!(!service.backend_health().await);
}
