//! Vendor onboarding: form domain, product catalog, assignment rules,
//! country inference, submission serialization, and the wizard boundary.

pub mod assignment;
pub mod backend;
pub mod catalog;
pub mod country;
pub mod domain;
pub mod router;
pub mod serializer;
pub mod service;
pub mod validation;
pub mod wizard;

#[cfg(test)]
mod tests;

pub use assignment::{assign, AssignmentResult};
pub use backend::{BackendError, BackendReceipt, HttpSubmissionBackend, SubmissionBackend};
pub use catalog::{ProductCatalog, BVI_PRODUCT_LIST, SPECIAL_SOC_FAMILIES};
pub use country::{CountryResolver, LookupGuard, DEFAULT_COUNTRY};
pub use domain::{
    generate_vendor_id, Currency, CustomizationChoice, OnboardingForm, SubmissionRecord,
    VendorCode, TECHNICAL_SERVICE_VALUE,
};
pub use router::onboarding_router;
pub use service::{Delivery, OnboardingService, SubmissionOutcome};
pub use validation::StepValidationError;
pub use wizard::{WizardSession, WizardStep};
