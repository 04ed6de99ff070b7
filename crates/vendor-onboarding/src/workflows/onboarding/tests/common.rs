use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::Value;

use crate::workflows::onboarding::assignment::assign;
use crate::workflows::onboarding::backend::{BackendError, BackendReceipt, SubmissionBackend};
use crate::workflows::onboarding::catalog::ProductCatalog;
use crate::workflows::onboarding::country::CountryResolver;
use crate::workflows::onboarding::domain::{
    Currency, CustomizationChoice, OnboardingForm, SubmissionRecord,
};
use crate::workflows::onboarding::service::OnboardingService;

/// A complete, valid USD form selecting a devkit with no customization.
pub(super) fn usd_form() -> OnboardingForm {
    OnboardingForm {
        business_specialist: "王娜娜".to_string(),
        company_legal_name: "Acme Electronics GmbH".to_string(),
        purchasing_contact_name: "Jane Fischer".to_string(),
        contact_email: "jane.fischer@acme.example".to_string(),
        contact_phone: "+49 151 1234567".to_string(),
        permanent_contact_number: "+49 30 555 0000".to_string(),
        transaction_currency: Some(Currency::Usd),
        company_legal_address: "Hauptstrasse 12, 10115 Berlin, Germany".to_string(),
        company_tax_id: String::new(),
        product_selected: "ESP32-S3-DevKitC-1".to_string(),
        technical_service_details: String::new(),
        product_variant: String::new(),
        product_soc_variant: String::new(),
        customization_required: Some(CustomizationChoice::No),
        shipping_address: "Warehouse 4, Hamburg, Germany".to_string(),
        consignee_contact_name: "Lager Team".to_string(),
        consignee_phone: "+49 40 555 1111".to_string(),
        pcn_notification_emails: "pcn@acme.example, quality@acme.example".to_string(),
        pcn_special_requirements: false,
        pcn_special_requirements_details: String::new(),
        invoice_receiving_email: "invoices@acme.example".to_string(),
    }
}

/// RMB variant of the fixture, tax id in place of the legal address.
pub(super) fn rmb_form() -> OnboardingForm {
    let mut form = usd_form();
    form.set_currency(Currency::Rmb);
    form.company_tax_id = "91310000MA1FL0XXXX".to_string();
    form.shipping_address = "上海市浦东新区张江高科技园区".to_string();
    form
}

/// Snapshot with a deterministic id and timestamp for payload assertions.
pub(super) fn record_from(form: OnboardingForm) -> SubmissionRecord {
    let assignment = assign(&form, ProductCatalog::global());
    SubmissionRecord {
        form,
        vendor_id: "AB12CD34EF56".to_string(),
        submitted_at: Utc.with_ymd_and_hms(2025, 11, 3, 9, 30, 0).single().expect("valid time"),
        assignment,
    }
}

/// Resolver pointed at a closed port so the remote path degrades
/// immediately to the local tables.
pub(super) fn offline_resolver() -> Arc<CountryResolver> {
    Arc::new(CountryResolver::new("http://127.0.0.1:9"))
}

/// Backend recording every payload and acknowledging success.
#[derive(Default)]
pub(super) struct RecordingBackend {
    pub(super) calls: Mutex<Vec<Vec<Value>>>,
}

#[async_trait]
impl SubmissionBackend for RecordingBackend {
    async fn create_customer(&self, payload: &[Value]) -> Result<BackendReceipt, BackendError> {
        self.calls
            .lock()
            .expect("calls mutex poisoned")
            .push(payload.to_vec());
        Ok(BackendReceipt {
            message: Some("customer created".to_string()),
            data: None,
        })
    }

    async fn health(&self) -> bool {
        true
    }
}

/// Backend rejecting every submission.
#[derive(Default)]
pub(super) struct RejectingBackend;

#[async_trait]
impl SubmissionBackend for RejectingBackend {
    async fn create_customer(&self, _payload: &[Value]) -> Result<BackendReceipt, BackendError> {
        Err(BackendError::Rejected {
            code: "API_ERROR".to_string(),
            message: "duplicate customer number".to_string(),
        })
    }

    async fn health(&self) -> bool {
        false
    }
}

pub(super) fn recording_service() -> (Arc<OnboardingService<RecordingBackend>>, Arc<RecordingBackend>)
{
    let backend = Arc::new(RecordingBackend::default());
    let service = Arc::new(OnboardingService::new(backend.clone(), offline_resolver()));
    (service, backend)
}

pub(super) fn rejecting_service() -> Arc<OnboardingService<RejectingBackend>> {
    Arc::new(OnboardingService::new(
        Arc::new(RejectingBackend),
        offline_resolver(),
    ))
}
