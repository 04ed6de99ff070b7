//! Linear wizard step machine. Forward transitions are gated by step-local
//! validation; backward transitions are always permitted; success is
//! reachable only from review through a completed submission.

use serde::{Deserialize, Serialize};

use super::domain::{OnboardingForm, SubmissionRecord};
use super::validation::{validate_step, StepValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Welcome,
    Company,
    Contact,
    Currency,
    Product,
    Customization,
    Shipping,
    Pcn,
    Invoice,
    Review,
    Success,
}

/// Fixed step order; no branching, no skipping.
pub const STEP_ORDER: [WizardStep; 11] = [
    WizardStep::Welcome,
    WizardStep::Company,
    WizardStep::Contact,
    WizardStep::Currency,
    WizardStep::Product,
    WizardStep::Customization,
    WizardStep::Shipping,
    WizardStep::Pcn,
    WizardStep::Invoice,
    WizardStep::Review,
    WizardStep::Success,
];

impl WizardStep {
    pub fn index(self) -> usize {
        STEP_ORDER
            .iter()
            .position(|step| *step == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Option<WizardStep> {
        STEP_ORDER.get(self.index() + 1).copied()
    }

    pub fn previous(self) -> Option<WizardStep> {
        self.index().checked_sub(1).map(|index| STEP_ORDER[index])
    }

    pub fn label(self) -> &'static str {
        match self {
            WizardStep::Welcome => "welcome",
            WizardStep::Company => "company",
            WizardStep::Contact => "contact",
            WizardStep::Currency => "currency",
            WizardStep::Product => "product",
            WizardStep::Customization => "customization",
            WizardStep::Shipping => "shipping",
            WizardStep::Pcn => "pcn",
            WizardStep::Invoice => "invoice",
            WizardStep::Review => "review",
            WizardStep::Success => "success",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("submission is only accepted at the review step")]
    NotAtReview,
}

/// Mutable session owned by the navigation collaborator: current step, the
/// form being filled, and the record once submitted.
#[derive(Debug)]
pub struct WizardSession {
    step: WizardStep,
    form: OnboardingForm,
    record: Option<SubmissionRecord>,
    prefill: String,
}

impl WizardSession {
    pub fn new(business_specialist: Option<&str>) -> Self {
        let prefill = business_specialist.unwrap_or_default().to_string();
        Self {
            step: WizardStep::Welcome,
            form: OnboardingForm::with_prefill(&prefill),
            record: None,
            prefill,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn form(&self) -> &OnboardingForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut OnboardingForm {
        &mut self.form
    }

    pub fn record(&self) -> Option<&SubmissionRecord> {
        self.record.as_ref()
    }

    /// Move forward one step after passing the current step's validation.
    /// Review and success do not advance this way: review exits only
    /// through [`WizardSession::complete`].
    pub fn advance(&mut self) -> Result<WizardStep, StepValidationError> {
        if matches!(self.step, WizardStep::Review | WizardStep::Success) {
            return Ok(self.step);
        }

        validate_step(self.step, &self.form)?;
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Move backward unconditionally; welcome stays put.
    pub fn back(&mut self) -> WizardStep {
        if let Some(previous) = self.step.previous() {
            self.step = previous;
        }
        self.step
    }

    /// Record a finished submission and enter the terminal step. The record
    /// is stored even when delivery to the backend failed, so the user can
    /// still download it.
    pub fn complete(&mut self, record: SubmissionRecord) -> Result<(), WizardError> {
        if self.step != WizardStep::Review {
            return Err(WizardError::NotAtReview);
        }
        self.record = Some(record);
        self.step = WizardStep::Success;
        Ok(())
    }

    /// Discard everything except the externally supplied prefill and start
    /// over from the welcome step.
    pub fn restart(&mut self) {
        self.form = OnboardingForm::with_prefill(&self.prefill);
        self.record = None;
        self.step = WizardStep::Welcome;
    }
}
