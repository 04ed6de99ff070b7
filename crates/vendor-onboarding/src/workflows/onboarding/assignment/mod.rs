//! Vendor-assignment decision engine.
//!
//! A submission is routed to exactly one of the three vendor entities by an
//! ordered rule list evaluated first match wins. The ordering is the entire
//! algorithm; it lives in [`rules::RULES`] so it stays visible and testable
//! instead of being scattered across conditionals.

pub(crate) mod rules;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::catalog::ProductCatalog;
use super::domain::{OnboardingForm, VendorCode};

/// Outcome of the rule evaluation: the vendor plus a human-readable audit
/// reason naming the rule that fired and the value that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentResult {
    pub vendor: VendorCode,
    pub reason: String,
}

/// Assign a vendor to the current form state. Pure and total: every form,
/// however incomplete, receives a vendor.
pub fn assign(form: &OnboardingForm, catalog: &ProductCatalog) -> AssignmentResult {
    for rule in rules::RULES {
        if let Some(result) = (rule.evaluate)(form, catalog) {
            debug!(rule = rule.name, vendor = result.vendor.label(), "assignment rule matched");
            return result;
        }
    }

    let result = rules::default_assignment();
    debug!(rule = "default", vendor = result.vendor.label(), "assignment fell through to default");
    result
}
