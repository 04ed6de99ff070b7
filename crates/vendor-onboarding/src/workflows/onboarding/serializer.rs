//! Projection of a submission record into the fixed payload shape the
//! downstream business API defines. The opaque `X_*` key names and several
//! constant field values are dictated by that system's schema and must be
//! reproduced bit-exactly; do not "fix" them here.

use chrono::SecondsFormat;
use serde_json::{json, Value};

use super::country::infer_country_local;
use super::domain::{Currency, OnboardingForm, SubmissionRecord};

/// Customer group the onboarding flow always files under.
const DEFAULT_CUST_GROUP_NUMBER: &str = "C103";

/// Literal the downstream system expects when no PCN special requirements
/// exist; it distinguishes "none" from an empty string.
pub const PCN_NO_REQUIREMENTS: &str = "NIL";

// Permanently fixed placeholder values. These are upstream schema slots the
// integration never populated with real data; they are carried verbatim.
const SAP_CUSTOMER_CODE: &str = "Some Number";
const CUSTOMER_ALIAS: &str = "some Other Name";
const CREATING_ORG: &str = "My Company";
const DELIVERY_CALC_PARTICIPATION: &str = "是";
const SHIPPING_SPECIAL_REQUIREMENTS: &str = "Special Shipping Instructions";
const INVOICING_SPECIAL_REQUIREMENTS: &str = "Invoice Special Instructions";
const RISK_WARNING: &str = "Risk Warning";
const UNAVAILABLE_NOTES: &str = "Unavailable Notes";

/// Currency display name the API performs its lookup with.
pub fn currency_display_name(currency: Option<Currency>) -> &'static str {
    match currency {
        Some(Currency::Rmb) => "人民币",
        Some(Currency::Usd) => "USD",
        None => "",
    }
}

/// The address country inference runs over: shipping address for RMB,
/// legal address falling back to shipping for USD.
pub fn address_for_country(form: &OnboardingForm) -> &str {
    match form.transaction_currency {
        Some(Currency::Rmb) => &form.shipping_address,
        _ => {
            if form.company_legal_address.is_empty() {
                &form.shipping_address
            } else {
                &form.company_legal_address
            }
        }
    }
}

/// Full serialized record including the `_metadata` audit sidecar. Country
/// inference runs over the local tables; use [`serialize_with_country`]
/// when a richer lookup already resolved the name.
pub fn serialize(record: &SubmissionRecord) -> Value {
    let country = infer_country_local(address_for_country(&record.form));
    serialize_with_country(record, &country)
}

/// As [`serialize`], with the country name supplied by the caller.
pub fn serialize_with_country(record: &SubmissionRecord, country_name: &str) -> Value {
    let form = &record.form;
    let vendor = record.assignment.vendor;
    let submission_date = record
        .submitted_at
        .to_rfc3339_opts(SecondsFormat::Millis, true);

    let sale_user_number = if form.business_specialist.is_empty() {
        Value::Bool(false)
    } else {
        Value::String(form.business_specialist.clone())
    };

    let pcn_requirements = if form.pcn_special_requirements {
        form.pcn_special_requirements_details.clone()
    } else {
        PCN_NO_REQUIREMENTS.to_string()
    };

    let invoice_address = if form.company_legal_address.is_empty() {
        &form.shipping_address
    } else {
        &form.company_legal_address
    };

    json!({
        "number": "",
        "name": form.company_legal_name,
        "cust_group_number": DEFAULT_CUST_GROUP_NUMBER,
        "X_char_cay5jmarrr": SAP_CUSTOMER_CODE,
        "sale_user_number": sale_user_number,
        "X_char_gzcp4gjmhi": form.company_legal_name,
        "X_char_kg0wwz9xv7": CUSTOMER_ALIAS,
        "create_org_number": CREATING_ORG,
        "use_org_id": vendor.org_id(),
        // Key name typo is part of the downstream schema.
        "nternal_org_id": false,
        "supplier_id": false,
        "X_float_tbtkxzkblx": 0,
        "X_float_s9iykgnts9": 0,
        "X_float_vuow9bd5j8": 0,
        "note": format!(
            "Submitted: {} | Assigned: {} | Reason: {}",
            submission_date,
            vendor.label(),
            record.assignment.reason
        ),
        "country_name": country_name,
        "X_char_f15xqcasni": pcn_requirements,
        "X_char_xy0fi6varj": form.pcn_notification_emails,
        "X_selection_ykh5dwo6fd": DELIVERY_CALC_PARTICIPATION,
        "X_char_5smvg51jqa": form.invoice_receiving_email,
        "X_many2one_eycmxxaldx": false,
        "X_char_ayuwxr8kn8": form.invoice_receiving_email,
        "inv_tax_number": form.company_tax_id,
        "X_char_0qgsyzxr8t": form.contact_email,
        "X_char_zroglhprb4": SHIPPING_SPECIAL_REQUIREMENTS,
        "X_char_09sjzp5eae": INVOICING_SPECIAL_REQUIREMENTS,
        "X_char_mfgjqyo2ah": RISK_WARNING,
        "X_char_nkasruoowt": UNAVAILABLE_NOTES,
        "X_char_t6itzytspg": form.purchasing_contact_name,
        "X_char_vitg7ywwao": form.contact_phone,
        "X_char_9eqgn6f0dv": form.permanent_contact_number,
        "X_char_hjjshmrsdx": form.consignee_contact_name,
        "X_char_9pex08hr7a": form.consignee_phone,
        "X_char_x7wfy6v7rs": form.shipping_address,
        "X_text_muniskyxgu": form.company_legal_address,
        "currency_name": currency_display_name(form.transaction_currency),
        "pay_type_id": false,
        "receivable_term_id": false,
        "pay_party_id": false,
        "receive_id": false,
        "sale_dep_id": false,
        "receive_party_id": false,
        "price_list": false,
        "delivery_id": false,
        "X_float_noyptjqjqv": 0,
        "X_date_tmclhk5hqx": false,
        "X_date_m5i3bpsrww": false,
        "X_date_meluk6hgra": false,
        "X_many2one_sc4u7xibxo": false,
        "X_float_hkoamhw0em": 0,
        "inv_title": form.company_legal_name,
        "inv_bank_name": "",
        "inv_bank_acct": "",
        "inv_telephone": form.contact_phone,
        "tax_ident": false,
        "inv_address": invoice_address,
        "_metadata": {
            "vendor_id": record.vendor_id,
            "submission_date": submission_date,
            "assigned_vendor": vendor.label(),
            "vendor_assignment_reason": record.assignment.reason,
            "transaction_currency": form.transaction_currency.map(Currency::code).unwrap_or(""),
            "product_selected": form.product_selected,
            "technical_service_details": empty_as_null(&form.technical_service_details),
            "product_variant": empty_as_null(&form.product_variant),
            "product_soc_variant": empty_as_null(&form.product_soc_variant),
            "customization_required": form.customization_required.map(|c| c.label()).unwrap_or(""),
        },
    })
}

/// API projection: the array-of-one the downstream endpoint expects, with
/// the `_metadata` sidecar stripped.
pub fn to_api_payload(record: &SubmissionRecord) -> Vec<Value> {
    api_projection(serialize(record))
}

/// Strip `_metadata` from an already serialized full record and wrap it in
/// the array-of-one shape.
pub fn api_projection(mut full_record: Value) -> Vec<Value> {
    if let Some(map) = full_record.as_object_mut() {
        map.remove("_metadata");
    }
    vec![full_record]
}

/// Name of the downloadable artifact offered to the user.
pub fn download_filename(vendor_id: &str) -> String {
    format!("vendor_setup_{vendor_id}.json")
}

/// Pretty-printed JSON for the download artifact.
pub fn to_pretty_json(value: &Value) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

fn empty_as_null(value: &str) -> Value {
    if value.is_empty() {
        Value::Null
    } else {
        Value::String(value.to_string())
    }
}
