use chrono::Utc;
use clap::{Args, ValueEnum};
use vendor_onboarding::error::AppError;
use vendor_onboarding::workflows::onboarding::{
    assign, generate_vendor_id, serializer, Currency, CustomizationChoice, OnboardingForm,
    ProductCatalog, SubmissionRecord,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Product to select in the sample form (catalog identifier or free text)
    #[arg(long, default_value = "ESP32-S3-DevKitC-1")]
    pub(crate) product: String,
    /// Settlement currency for the sample form
    #[arg(long, value_enum, default_value_t = DemoCurrency::Usd)]
    pub(crate) currency: DemoCurrency,
    /// Customization answer for the sample form
    #[arg(long, value_enum, default_value_t = DemoCustomization::No)]
    pub(crate) customization: DemoCustomization,
    /// Business specialist name to prefill
    #[arg(long)]
    pub(crate) specialist: Option<String>,
    /// Print the full serialized record instead of the summary only
    #[arg(long)]
    pub(crate) full_record: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub(crate) enum DemoCurrency {
    Rmb,
    #[default]
    Usd,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub(crate) enum DemoCustomization {
    Yes,
    #[default]
    No,
    NotSure,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        product,
        currency,
        customization,
        specialist,
        full_record,
    } = args;

    let currency = match currency {
        DemoCurrency::Rmb => Currency::Rmb,
        DemoCurrency::Usd => Currency::Usd,
    };
    let customization = match customization {
        DemoCustomization::Yes => CustomizationChoice::Yes,
        DemoCustomization::No => CustomizationChoice::No,
        DemoCustomization::NotSure => CustomizationChoice::NotSure,
    };

    let mut form = sample_form(specialist.as_deref().unwrap_or(""));
    form.product_selected = product;
    form.customization_required = Some(customization);
    form.set_currency(currency);
    if currency == Currency::Rmb {
        form.company_tax_id = "91310000MA1FL0DEMO".to_string();
    }

    println!("Vendor onboarding demo");
    println!("Product: {}", form.product_selected);
    println!(
        "Currency: {}",
        form.transaction_currency.map(Currency::code).unwrap_or("")
    );

    let assignment = assign(&form, ProductCatalog::global());
    println!(
        "Assigned vendor: {} (org id {})",
        assignment.vendor.label(),
        assignment.vendor.org_id()
    );
    println!("Reason: {}", assignment.reason);

    let record = SubmissionRecord {
        form,
        vendor_id: generate_vendor_id(),
        submitted_at: Utc::now(),
        assignment,
    };
    println!(
        "Download artifact: {}",
        serializer::download_filename(&record.vendor_id)
    );

    if full_record {
        let serialized = serializer::serialize(&record);
        match serializer::to_pretty_json(&serialized) {
            Ok(json) => println!("Serialized record:\n{json}"),
            Err(err) => println!("Serialized record unavailable: {err}"),
        }
    }

    Ok(())
}

fn sample_form(specialist: &str) -> OnboardingForm {
    OnboardingForm {
        business_specialist: specialist.to_string(),
        company_legal_name: "Demo Components Ltd".to_string(),
        purchasing_contact_name: "Alex Chen".to_string(),
        contact_email: "alex.chen@demo.example".to_string(),
        contact_phone: "+65 6500 0000".to_string(),
        permanent_contact_number: "+65 6500 0001".to_string(),
        company_legal_address: "1 Science Park Road, Singapore".to_string(),
        shipping_address: "Logistics Hub 7, Singapore".to_string(),
        consignee_contact_name: "Warehouse Ops".to_string(),
        consignee_phone: "+65 6500 0002".to_string(),
        pcn_notification_emails: "pcn@demo.example".to_string(),
        invoice_receiving_email: "invoices@demo.example".to_string(),
        ..OnboardingForm::default()
    }
}
