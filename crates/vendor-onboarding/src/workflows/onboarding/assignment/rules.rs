use super::AssignmentResult;
use crate::workflows::onboarding::catalog::{
    ProductCatalog, BVI_PRODUCT_LIST, SPECIAL_SOC_FAMILIES,
};
use crate::workflows::onboarding::domain::{Currency, CustomizationChoice, OnboardingForm, VendorCode};

/// A single ordered rule. Returns `Some` when it claims the submission.
pub(crate) struct AssignmentRule {
    pub(crate) name: &'static str,
    pub(crate) evaluate: fn(&OnboardingForm, &ProductCatalog) -> Option<AssignmentResult>,
}

/// The rule order is load-bearing: reordering entries changes vendor
/// routing. Keep in sync with the audit documentation.
pub(crate) const RULES: &[AssignmentRule] = &[
    AssignmentRule {
        name: "currency-rmb",
        evaluate: currency_rmb,
    },
    AssignmentRule {
        name: "customization-required",
        evaluate: customization_required,
    },
    AssignmentRule {
        name: "customization-uncertain",
        evaluate: customization_uncertain,
    },
    AssignmentRule {
        name: "technical-service-only",
        evaluate: technical_service_only,
    },
    AssignmentRule {
        name: "special-soc-family",
        evaluate: special_soc_family,
    },
    AssignmentRule {
        name: "bvi-product-list",
        evaluate: bvi_product_list,
    },
];

/// Terminal rule: nothing selected, nothing claimed the form.
pub(crate) fn default_assignment() -> AssignmentResult {
    AssignmentResult {
        vendor: VendorCode::Lxx,
        reason: "Default assignment → LXX".to_string(),
    }
}

fn currency_rmb(form: &OnboardingForm, _catalog: &ProductCatalog) -> Option<AssignmentResult> {
    (form.transaction_currency == Some(Currency::Rmb)).then(|| AssignmentResult {
        vendor: VendorCode::Lx,
        reason: "Currency is RMB → LX".to_string(),
    })
}

fn customization_required(
    form: &OnboardingForm,
    _catalog: &ProductCatalog,
) -> Option<AssignmentResult> {
    (form.customization_required == Some(CustomizationChoice::Yes)).then(|| AssignmentResult {
        vendor: VendorCode::Lxx,
        reason: "Customization Required → LXX".to_string(),
    })
}

fn customization_uncertain(
    form: &OnboardingForm,
    _catalog: &ProductCatalog,
) -> Option<AssignmentResult> {
    (form.customization_required == Some(CustomizationChoice::NotSure)).then(|| AssignmentResult {
        vendor: VendorCode::Lxx,
        reason: "Customization Uncertain → LXX".to_string(),
    })
}

fn technical_service_only(
    form: &OnboardingForm,
    _catalog: &ProductCatalog,
) -> Option<AssignmentResult> {
    form.is_technical_service().then(|| AssignmentResult {
        vendor: VendorCode::Bvi,
        reason: "Only Service selected, currency USD → BVI".to_string(),
    })
}

/// SoC variants of the H2/C5/C61/P4 families go to BVI regardless of the
/// general BVI-list rule below.
fn special_soc_family(form: &OnboardingForm, catalog: &ProductCatalog) -> Option<AssignmentResult> {
    let product = form.product_selected.as_str();
    if product.is_empty() || !catalog.is_soc(product) {
        return None;
    }

    let family = catalog.family_of(product)?;
    SPECIAL_SOC_FAMILIES.contains(&family).then(|| AssignmentResult {
        vendor: VendorCode::Bvi,
        reason: format!("Special SoC ({product}) → BVI"),
    })
}

/// Bidirectional case-insensitive substring test against the BVI list, or a
/// SoC classification, sends the product to BVI; any other selected product
/// goes to LXX. The two-way containment can false-positive on short codes;
/// that matches the routing the business signed off on, so it stays.
fn bvi_product_list(form: &OnboardingForm, catalog: &ProductCatalog) -> Option<AssignmentResult> {
    let product = form.product_selected.as_str();
    if product.is_empty() {
        return None;
    }

    let product_upper = product.to_uppercase();
    let in_bvi_list = BVI_PRODUCT_LIST.iter().any(|entry| {
        let entry_upper = entry.to_uppercase();
        product_upper.contains(&entry_upper) || entry_upper.contains(&product_upper)
    });

    if in_bvi_list || catalog.is_soc(product) {
        Some(AssignmentResult {
            vendor: VendorCode::Bvi,
            reason: format!("Product ({product}) routes to BVI"),
        })
    } else {
        Some(AssignmentResult {
            vendor: VendorCode::Lxx,
            reason: format!("Product ({product}) routes to LXX"),
        })
    }
}
