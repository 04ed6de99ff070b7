use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::assignment::AssignmentResult;

/// Sentinel product value meaning "no hardware, technical service only".
/// The exact string doubles as the select-box option in the upstream form.
pub const TECHNICAL_SERVICE_VALUE: &str = "技术服务 / Technical Service";

/// Settlement currency chosen on the currency step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Rmb,
    Usd,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Currency::Rmb => "RMB",
            Currency::Usd => "USD",
        }
    }
}

/// Tri-state answer to "do you need customization services?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomizationChoice {
    Yes,
    No,
    NotSure,
}

impl CustomizationChoice {
    pub fn label(self) -> &'static str {
        match self {
            CustomizationChoice::Yes => "yes",
            CustomizationChoice::No => "no",
            CustomizationChoice::NotSure => "not_sure",
        }
    }
}

/// Legal/operational entity a submission is routed to for fulfillment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VendorCode {
    Lx,
    Lxx,
    Bvi,
}

impl VendorCode {
    pub fn label(self) -> &'static str {
        match self {
            VendorCode::Lx => "LX",
            VendorCode::Lxx => "LXX",
            VendorCode::Bvi => "BVI",
        }
    }

    /// `use_org_id` lookup dictated by the downstream system.
    pub fn org_id(self) -> u8 {
        match self {
            VendorCode::Lx => 3,
            VendorCode::Lxx => 8,
            VendorCode::Bvi => 4,
        }
    }
}

/// Mutable form state owned by the step-navigation collaborator and filled
/// field by field as the user progresses through the wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OnboardingForm {
    pub business_specialist: String,
    pub company_legal_name: String,
    pub purchasing_contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub permanent_contact_number: String,
    pub transaction_currency: Option<Currency>,
    /// Active only when settling in USD.
    pub company_legal_address: String,
    /// Active only when settling in RMB.
    pub company_tax_id: String,
    pub product_selected: String,
    pub technical_service_details: String,
    /// Legacy variant slots kept for compatibility with older form exports.
    pub product_variant: String,
    pub product_soc_variant: String,
    pub customization_required: Option<CustomizationChoice>,
    pub shipping_address: String,
    pub consignee_contact_name: String,
    pub consignee_phone: String,
    pub pcn_notification_emails: String,
    pub pcn_special_requirements: bool,
    pub pcn_special_requirements_details: String,
    pub invoice_receiving_email: String,
}

impl OnboardingForm {
    /// A fresh form carrying only the externally supplied prefill.
    pub fn with_prefill(business_specialist: &str) -> Self {
        Self {
            business_specialist: business_specialist.to_string(),
            ..Self::default()
        }
    }

    /// Switch currency, clearing the field that no longer applies. Exactly
    /// one of {legal address, tax id} is active per currency, and the
    /// inactive one must be erased rather than merely hidden.
    pub fn set_currency(&mut self, currency: Currency) {
        match currency {
            Currency::Rmb => self.company_legal_address.clear(),
            Currency::Usd => self.company_tax_id.clear(),
        }
        self.transaction_currency = Some(currency);
    }

    pub fn is_technical_service(&self) -> bool {
        self.product_selected == TECHNICAL_SERVICE_VALUE
    }
}

/// Immutable snapshot created once at submit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub form: OnboardingForm,
    pub vendor_id: String,
    pub submitted_at: DateTime<Utc>,
    pub assignment: AssignmentResult,
}

/// Generate an opaque 12-character uppercase identifier: a v4 uuid with the
/// separators stripped, truncated. Practically unique, not secret.
pub fn generate_vendor_id() -> String {
    let raw = Uuid::new_v4().simple().to_string();
    raw[..12].to_ascii_uppercase()
}
