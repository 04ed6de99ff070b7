use super::common::{rmb_form, usd_form};
use crate::workflows::onboarding::domain::{Currency, OnboardingForm, TECHNICAL_SERVICE_VALUE};
use crate::workflows::onboarding::validation::{
    email, invalid_emails, min_length, multiple_emails, phone, required, tax_id, validate_form,
    validate_step, StepValidationError,
};
use crate::workflows::onboarding::wizard::WizardStep;

#[test]
fn required_trims_whitespace() {
    assert!(required("Acme"));
    assert!(!required(""));
    assert!(!required("   "));
}

#[test]
fn email_accepts_common_shapes_and_rejects_junk() {
    assert!(email("jane.fischer@acme.example"));
    assert!(email("  padded@acme.example  "));
    assert!(email("a+tag@sub.domain.co"));
    assert!(!email("no-at-sign"));
    assert!(!email("missing@tld"));
    assert!(!email("two@@acme.example"));
}

#[test]
fn multiple_emails_requires_every_segment_to_parse() {
    assert!(multiple_emails("a@b.com"));
    assert!(multiple_emails("a@b.com, c@d.com"));
    assert!(multiple_emails("a@b.com,, c@d.com,"));
    assert!(!multiple_emails(""));
    assert!(!multiple_emails(" , "));
    assert!(!multiple_emails("a@b.com, bad"));
}

#[test]
fn invalid_emails_returns_only_the_failing_segments() {
    assert_eq!(
        invalid_emails("a@b.com, bad, c@d.com"),
        vec!["bad".to_string()]
    );
    assert!(invalid_emails("a@b.com, c@d.com").is_empty());
}

#[test]
fn phone_is_permissive_but_bounded() {
    assert!(phone("+49 151 1234567"));
    assert!(phone("(010) 8888-666"));
    assert!(!phone("1234567"));
    assert!(!phone("call me maybe"));
    assert!(!phone("123456789012345678901"));
}

#[test]
fn tax_id_is_case_insensitive_alphanumeric() {
    assert!(tax_id("91310000MA1FL0XXXX"));
    assert!(tax_id("91310000ma1fl0xxxx"));
    assert!(!tax_id("SHORT123"));
    assert!(!tax_id("91310000MA1FL0XXXX-1"));
}

#[test]
fn min_length_counts_characters_not_bytes() {
    assert!(min_length("浦东新区", 4));
    assert!(!min_length("浦东", 3));
    assert!(!min_length("  a  ", 2));
}

#[test]
fn company_step_requires_the_legal_name() {
    let mut form = usd_form();
    form.company_legal_name = String::new();
    assert_eq!(
        validate_step(WizardStep::Company, &form),
        Err(StepValidationError::MissingFields(vec![
            "Company Legal Name"
        ]))
    );
}

#[test]
fn contact_step_reports_missing_fields_as_a_batch() {
    let mut form = usd_form();
    form.purchasing_contact_name = String::new();
    form.contact_email = String::new();
    form.contact_phone = String::new();
    assert_eq!(
        validate_step(WizardStep::Contact, &form),
        Err(StepValidationError::MissingFields(vec![
            "Purchasing Contact Name",
            "Contact Email",
            "Contact Phone",
        ]))
    );
}

#[test]
fn contact_step_flags_a_malformed_email_on_its_own() {
    let mut form = usd_form();
    form.contact_email = "not-an-email".to_string();
    let err = validate_step(WizardStep::Contact, &form).unwrap_err();
    assert!(matches!(
        err,
        StepValidationError::InvalidField {
            field: "Contact Email",
            ..
        }
    ));
}

#[test]
fn currency_step_requirements_follow_the_selection() {
    let mut form = OnboardingForm::default();
    assert_eq!(
        validate_step(WizardStep::Currency, &form),
        Err(StepValidationError::MissingFields(vec![
            "Transaction Currency"
        ]))
    );

    form.set_currency(Currency::Usd);
    assert_eq!(
        validate_step(WizardStep::Currency, &form),
        Err(StepValidationError::MissingFields(vec![
            "Company Legal Address"
        ]))
    );

    form.set_currency(Currency::Rmb);
    assert_eq!(
        validate_step(WizardStep::Currency, &form),
        Err(StepValidationError::MissingFields(vec!["Company Tax ID"]))
    );

    assert!(validate_step(WizardStep::Currency, &rmb_form()).is_ok());
}

#[test]
fn product_step_requires_details_for_technical_service() {
    let mut form = usd_form();
    form.product_selected = TECHNICAL_SERVICE_VALUE.to_string();
    form.technical_service_details = String::new();
    assert_eq!(
        validate_step(WizardStep::Product, &form),
        Err(StepValidationError::MissingFields(vec![
            "Technical Service Details"
        ]))
    );

    form.technical_service_details = "Antenna tuning".to_string();
    assert!(validate_step(WizardStep::Product, &form).is_ok());
}

#[test]
fn pcn_step_lists_the_bad_addresses() {
    let mut form = usd_form();
    form.pcn_notification_emails = "ok@acme.example, nope, also bad".to_string();
    let err = validate_step(WizardStep::Pcn, &form).unwrap_err();
    match err {
        StepValidationError::InvalidField { field, message } => {
            assert_eq!(field, "PCN Notification Emails");
            assert!(message.contains("nope"));
            assert!(message.contains("also bad"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn pcn_special_requirements_need_details() {
    let mut form = usd_form();
    form.pcn_special_requirements = true;
    assert_eq!(
        validate_step(WizardStep::Pcn, &form),
        Err(StepValidationError::MissingFields(vec![
            "PCN Special Requirements Details"
        ]))
    );
}

#[test]
fn review_and_terminal_steps_have_no_requirements() {
    let form = OnboardingForm::default();
    for step in [WizardStep::Welcome, WizardStep::Review, WizardStep::Success] {
        assert!(validate_step(step, &form).is_ok());
    }
}

#[test]
fn full_form_validation_walks_steps_in_order() {
    assert!(validate_form(&usd_form()).is_ok());
    assert!(validate_form(&rmb_form()).is_ok());

    // First failing step wins, so a missing company name masks the rest.
    let mut form = usd_form();
    form.company_legal_name = String::new();
    form.invoice_receiving_email = String::new();
    assert_eq!(
        validate_form(&form),
        Err(StepValidationError::MissingFields(vec![
            "Company Legal Name"
        ]))
    );
}
