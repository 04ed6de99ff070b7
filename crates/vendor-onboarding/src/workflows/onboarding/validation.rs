//! Field-level predicates and their per-step composition. The atomic
//! checks are pure and stateless; `validate_step` mirrors the gating the
//! wizard applies before a forward transition.

use regex::Regex;
use std::sync::OnceLock;

use super::domain::{Currency, OnboardingForm};
use super::wizard::WizardStep;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email regex")
    })
}

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[\d\s\-\+\(\)]{8,20}$").expect("valid phone regex"))
}

fn tax_id_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(?i)[A-Z0-9]{15,20}$").expect("valid tax id regex"))
}

pub fn required(value: &str) -> bool {
    !value.trim().is_empty()
}

pub fn email(value: &str) -> bool {
    email_pattern().is_match(value.trim())
}

/// Comma-separated list where every segment is a well-formed email and at
/// least one segment is present.
pub fn multiple_emails(value: &str) -> bool {
    let segments: Vec<&str> = value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect();
    !segments.is_empty() && segments.iter().all(|segment| email(segment))
}

/// Permissive phone check: digits, spaces, dashes, plus, parentheses, 8-20 chars.
pub fn phone(value: &str) -> bool {
    phone_pattern().is_match(value.trim())
}

pub fn tax_id(value: &str) -> bool {
    tax_id_pattern().is_match(value.trim())
}

pub fn min_length(value: &str, min: usize) -> bool {
    value.trim().chars().count() >= min
}

/// The segments of a comma-separated email list that fail the email check.
pub fn invalid_emails(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .filter(|segment| !email(segment))
        .map(str::to_string)
        .collect()
}

/// Why a forward transition was refused. Missing fields are reported as a
/// batch; a malformed field is reported on its own so the user is pointed at
/// the one input to fix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("{field}: {message}")]
    InvalidField { field: &'static str, message: String },
}

fn invalid(field: &'static str, message: impl Into<String>) -> StepValidationError {
    StepValidationError::InvalidField {
        field,
        message: message.into(),
    }
}

/// Step-local validation gating the forward transition out of `step`.
pub fn validate_step(step: WizardStep, form: &OnboardingForm) -> Result<(), StepValidationError> {
    let mut missing: Vec<&'static str> = Vec::new();

    match step {
        WizardStep::Company => {
            if !required(&form.company_legal_name) {
                missing.push("Company Legal Name");
            }
        }
        WizardStep::Contact => {
            if !required(&form.purchasing_contact_name) {
                missing.push("Purchasing Contact Name");
            }
            if !required(&form.contact_email) {
                missing.push("Contact Email");
            } else if !email(&form.contact_email) {
                return Err(invalid("Contact Email", "not a valid email address"));
            }
            if !required(&form.contact_phone) {
                missing.push("Contact Phone");
            } else if !phone(&form.contact_phone) {
                return Err(invalid("Contact Phone", "not a valid phone number"));
            }
        }
        WizardStep::Currency => {
            match form.transaction_currency {
                None => missing.push("Transaction Currency"),
                Some(Currency::Usd) => {
                    if !required(&form.company_legal_address) {
                        missing.push("Company Legal Address");
                    }
                }
                Some(Currency::Rmb) => {
                    if !required(&form.company_tax_id) {
                        missing.push("Company Tax ID");
                    }
                }
            }
        }
        WizardStep::Product => {
            if !required(&form.product_selected) {
                missing.push("Product");
            }
            if form.is_technical_service() && !required(&form.technical_service_details) {
                missing.push("Technical Service Details");
            }
        }
        WizardStep::Customization => {
            if form.customization_required.is_none() {
                missing.push("Customization Required");
            }
        }
        WizardStep::Shipping => {
            if !required(&form.shipping_address) {
                missing.push("Shipping Address");
            }
            if !required(&form.consignee_contact_name) {
                missing.push("Consignee Contact Name");
            }
            if !required(&form.consignee_phone) {
                missing.push("Consignee Phone");
            } else if !phone(&form.consignee_phone) {
                return Err(invalid("Consignee Phone", "not a valid phone number"));
            }
        }
        WizardStep::Pcn => {
            if !required(&form.pcn_notification_emails) {
                missing.push("PCN Notification Emails");
            } else if !multiple_emails(&form.pcn_notification_emails) {
                let bad = invalid_emails(&form.pcn_notification_emails);
                return Err(invalid(
                    "PCN Notification Emails",
                    format!("invalid email(s): {}", bad.join(", ")),
                ));
            }
            if form.pcn_special_requirements && !required(&form.pcn_special_requirements_details) {
                missing.push("PCN Special Requirements Details");
            }
        }
        WizardStep::Invoice => {
            if !required(&form.invoice_receiving_email) {
                missing.push("Invoice Receiving Email");
            } else if !email(&form.invoice_receiving_email) {
                return Err(invalid(
                    "Invoice Receiving Email",
                    "not a valid email address",
                ));
            }
        }
        WizardStep::Welcome | WizardStep::Review | WizardStep::Success => {}
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(StepValidationError::MissingFields(missing))
    }
}

/// Validate the whole form as the submit endpoint does: every data step in
/// wizard order, first failure wins.
pub fn validate_form(form: &OnboardingForm) -> Result<(), StepValidationError> {
    for step in [
        WizardStep::Company,
        WizardStep::Contact,
        WizardStep::Currency,
        WizardStep::Product,
        WizardStep::Customization,
        WizardStep::Shipping,
        WizardStep::Pcn,
        WizardStep::Invoice,
    ] {
        validate_step(step, form)?;
    }
    Ok(())
}
