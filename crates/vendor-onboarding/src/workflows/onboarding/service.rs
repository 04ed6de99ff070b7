use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use super::assignment::{assign, AssignmentResult};
use super::backend::SubmissionBackend;
use super::catalog::ProductCatalog;
use super::country::CountryResolver;
use super::domain::{generate_vendor_id, OnboardingForm, SubmissionRecord};
use super::serializer;

/// Whether the downstream API accepted the record. A failed delivery never
/// blocks the user: the outcome still carries the downloadable record for
/// manual resubmission.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Delivery {
    Delivered {
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Failed {
        code: String,
        message: String,
    },
}

/// Everything produced by a submission, success or degraded.
#[derive(Debug, Clone)]
pub struct SubmissionOutcome {
    pub record: SubmissionRecord,
    pub full_record: Value,
    pub api_payload: Vec<Value>,
    pub delivery: Delivery,
    pub download_filename: String,
}

/// Service composing the assignment engine, country inference, serializer,
/// and the submission backend.
pub struct OnboardingService<B> {
    backend: Arc<B>,
    resolver: Arc<CountryResolver>,
    business_specialist: Option<String>,
}

impl<B> OnboardingService<B>
where
    B: SubmissionBackend + 'static,
{
    pub fn new(backend: Arc<B>, resolver: Arc<CountryResolver>) -> Self {
        Self {
            backend,
            resolver,
            business_specialist: None,
        }
    }

    /// Default business specialist applied when a submission leaves the
    /// field blank. This is the prefilled-link parameter carried through
    /// configuration; a blank value means no default.
    pub fn with_business_specialist(mut self, specialist: Option<String>) -> Self {
        self.business_specialist = specialist
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        self
    }

    /// Probe the submission backend. Surfaced on the readiness endpoint;
    /// an unreachable backend never stops the service, submissions degrade
    /// to a downloadable record instead.
    pub async fn backend_health(&self) -> bool {
        self.backend.health().await
    }

    /// Run the assignment rules without submitting; used by the review
    /// screen to show the routing ahead of time.
    pub fn preview_assignment(&self, form: &OnboardingForm) -> AssignmentResult {
        assign(form, ProductCatalog::global())
    }

    /// Create the immutable submission record, serialize it, and attempt
    /// delivery. Always produces an outcome; delivery failure degrades to
    /// [`Delivery::Failed`] and is logged, never returned as an error.
    pub async fn submit(&self, mut form: OnboardingForm) -> SubmissionOutcome {
        if form.business_specialist.trim().is_empty() {
            if let Some(specialist) = &self.business_specialist {
                form.business_specialist = specialist.clone();
            }
        }

        let assignment = assign(&form, ProductCatalog::global());
        let record = SubmissionRecord {
            vendor_id: generate_vendor_id(),
            submitted_at: Utc::now(),
            assignment,
            form,
        };

        let address = serializer::address_for_country(&record.form).to_string();
        let country = self.resolver.infer_country(&address).await;

        let full_record = serializer::serialize_with_country(&record, &country);
        let api_payload = serializer::api_projection(full_record.clone());

        let delivery = match self.backend.create_customer(&api_payload).await {
            Ok(receipt) => {
                info!(
                    vendor_id = %record.vendor_id,
                    vendor = record.assignment.vendor.label(),
                    "submission delivered"
                );
                Delivery::Delivered {
                    message: receipt.message,
                }
            }
            Err(err) => {
                warn!(
                    vendor_id = %record.vendor_id,
                    code = err.code(),
                    error = %err,
                    "submission delivery failed, record remains downloadable"
                );
                Delivery::Failed {
                    code: err.code().to_string(),
                    message: err.message(),
                }
            }
        };

        SubmissionOutcome {
            download_filename: serializer::download_filename(&record.vendor_id),
            record,
            full_record,
            api_payload,
            delivery,
        }
    }
}
