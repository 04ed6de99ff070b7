//! Static product reference data: families grouped into SoCs, Modules, and
//! DevKits, plus the BVI routing allow-list. Loaded once per process.

use serde::Serialize;
use std::sync::OnceLock;

static CATALOG: OnceLock<ProductCatalog> = OnceLock::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GroupLabel {
    #[serde(rename = "SoCs")]
    Socs,
    Modules,
    DevKits,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductGroup {
    pub label: GroupLabel,
    pub products: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductFamily {
    pub family: &'static str,
    pub groups: Vec<ProductGroup>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductCatalog {
    families: Vec<ProductFamily>,
}

impl ProductCatalog {
    pub fn global() -> &'static ProductCatalog {
        CATALOG.get_or_init(build_catalog)
    }

    pub fn families(&self) -> &[ProductFamily] {
        &self.families
    }

    /// Family a product belongs to, if the identifier is in the catalog.
    pub fn family_of(&self, product: &str) -> Option<&'static str> {
        for family in &self.families {
            for group in &family.groups {
                if group.products.contains(&product) {
                    return Some(family.family);
                }
            }
        }
        None
    }

    /// Whether the product is the bare-chip variant of its family.
    pub fn is_soc(&self, product: &str) -> bool {
        self.families.iter().any(|family| {
            family
                .groups
                .iter()
                .any(|group| group.label == GroupLabel::Socs && group.products.contains(&product))
        })
    }

    /// Flat list of every selectable product identifier.
    pub fn all_products(&self) -> Vec<&'static str> {
        self.families
            .iter()
            .flat_map(|family| family.groups.iter())
            .flat_map(|group| group.products.iter().copied())
            .collect()
    }
}

/// SoC families that route to BVI regardless of the general BVI-list rule.
pub const SPECIAL_SOC_FAMILIES: &[&str] = &["ESP32-H2", "ESP32-C5", "ESP32-C61", "ESP32-P4"];

/// Products handled by the BVI entity, matched by case-insensitive substring
/// containment in both directions against the selected product.
pub const BVI_PRODUCT_LIST: &[&str] = &[
    "ESP32-C6 SOC",
    "ESP32-C3 SOC",
    "ESP8684 SOC",
    "ESP32-H2 SOC",
    "ESP32 SOC",
    "ESP32-D0WD-V3",
    "ESP32-D0WDRH2-V3",
    "ESP32-U4WDH",
    "ESP32-S3 SOC",
    "ESP32-S3R8",
    "ESP32-S3FN8",
    "ESP32-S2 SOC",
    "ESP32-C5 SOC",
    "ESP32-C61 SOC",
    "ESP32-P4 SOC",
    "ESP8266EX",
];

fn build_catalog() -> ProductCatalog {
    fn group(label: GroupLabel, products: &[&'static str]) -> ProductGroup {
        ProductGroup {
            label,
            products: products.to_vec(),
        }
    }

    ProductCatalog {
        families: vec![
            ProductFamily {
                family: "ESP32-P4",
                groups: vec![group(GroupLabel::Socs, &["ESP32-P4"])],
            },
            ProductFamily {
                family: "ESP32-S3",
                groups: vec![
                    group(GroupLabel::Socs, &["ESP32-S3", "ESP32-S3-PICO-1"]),
                    group(
                        GroupLabel::Modules,
                        &[
                            "ESP32-S3-MINI-1/1U",
                            "ESP32-S3-WROOM-1/1U",
                            "ESP32-S3-WROOM-2/2U",
                        ],
                    ),
                    group(
                        GroupLabel::DevKits,
                        &[
                            "ESP32-S3-BOX",
                            "ESP32-S3-DevKitC-1",
                            "ESP32-S3-DevKitM-1",
                            "ESP32-S3-EYE",
                            "ESP32-S3-USB-OTG",
                            "ESP32-S3-USB-Bridge",
                            "ESP32-S3-Korvo-1",
                            "ESP32-S3-Korvo-2",
                            "ESP32-S3-LCD-EV-Board",
                        ],
                    ),
                ],
            },
            ProductFamily {
                family: "ESP32-S2",
                groups: vec![
                    group(GroupLabel::Socs, &["ESP32-S2"]),
                    group(
                        GroupLabel::Modules,
                        &[
                            "ESP32-S2-MINI-1/1U",
                            "ESP32-S2-MINI-2/2U",
                            "ESP32-S2-WROOM (-I)",
                            "ESP32-S2-WROVER (-I)",
                            "ESP32-S2-SOLO (-U)",
                            "ESP32-S2-SOLO-2/2U",
                        ],
                    ),
                    group(
                        GroupLabel::DevKits,
                        &[
                            "ESP32-S2-Saola-1",
                            "ESP32-S2-DevKitM-1",
                            "ESP32-S2-DevKitC-1",
                            "ESP32-S2-Kaluga-1",
                            "ESP32-S2-HMI-DevKit-1",
                        ],
                    ),
                ],
            },
            ProductFamily {
                family: "ESP32-C61",
                groups: vec![group(GroupLabel::Socs, &["ESP32-C61"])],
            },
            ProductFamily {
                family: "ESP32-C6",
                groups: vec![
                    group(GroupLabel::Socs, &["ESP32-C6"]),
                    group(
                        GroupLabel::Modules,
                        &["ESP32-C6-MINI-1", "ESP32-C6-WROOM-1"],
                    ),
                    group(
                        GroupLabel::DevKits,
                        &["ESP32-C6-DevKitC-1", "ESP32-C6-DevKitM-1"],
                    ),
                ],
            },
            ProductFamily {
                family: "ESP32-C5",
                groups: vec![group(GroupLabel::Socs, &["ESP32-C5"])],
            },
            ProductFamily {
                family: "ESP32-C3",
                groups: vec![
                    group(GroupLabel::Socs, &["ESP32-C3", "ESP8685"]),
                    group(
                        GroupLabel::Modules,
                        &[
                            "ESP32-C3-MINI-1/1U",
                            "ESP32-C3-WROOM-02/02U",
                            "ESP8685-WROOM-01",
                            "ESP8685-WROOM-03",
                            "ESP8685-WROOM-04",
                            "ESP8685-WROOM-05",
                            "ESP8685-WROOM-06",
                            "ESP8685-WROOM-07",
                        ],
                    ),
                    group(
                        GroupLabel::DevKits,
                        &[
                            "ESP32-C3-DevKitM-1",
                            "ESP32-C3-DevKitC-02",
                            "ESP32-C3-LCDkit",
                            "ESP32-C3-Lyra",
                        ],
                    ),
                ],
            },
            ProductFamily {
                family: "ESP32-C2",
                groups: vec![
                    group(GroupLabel::Socs, &["ESP8684"]),
                    group(
                        GroupLabel::Modules,
                        &[
                            "ESP8684-MINI-1/1U",
                            "ESP8684-WROOM-01C",
                            "ESP8684-WROOM-02C/02UC",
                            "ESP8684-WROOM-03",
                            "ESP8684-WROOM-04C",
                            "ESP8684-WROOM-05",
                            "ESP8684-WROOM-06C",
                            "ESP8684-WROOM-07",
                        ],
                    ),
                    group(
                        GroupLabel::DevKits,
                        &["ESP8684-DevKitM-1", "ESP8684-DevKitC-02"],
                    ),
                ],
            },
            ProductFamily {
                family: "ESP32-H2",
                groups: vec![
                    group(GroupLabel::Socs, &["ESP32-H2"]),
                    group(
                        GroupLabel::Modules,
                        &[
                            "ESP32-H2-MINI-1/1U",
                            "ESP32-H2-WROOM-02C",
                            "ESP32-H2-WROOM-03",
                            "ESP32-H2-WROOM-07",
                        ],
                    ),
                    group(GroupLabel::DevKits, &["ESP32-H2-DevKitM-1"]),
                ],
            },
            ProductFamily {
                family: "ESP32",
                groups: vec![
                    group(
                        GroupLabel::Socs,
                        &[
                            "ESP32",
                            "ESP32-PICO-V3",
                            "ESP32-PICO-V3-02",
                            "ESP32-PICO-D4",
                        ],
                    ),
                    group(
                        GroupLabel::Modules,
                        &[
                            "ESP32-WROOM-32E/32UE",
                            "ESP32-WROOM-DA",
                            "ESP32-WROOM-32SE",
                            "ESP32-WROVER-E/IE",
                            "ESP32-MINI-1/1U",
                            "ESP32-PICO-V3-ZERO (*ACK)",
                            "ESP32-PICO-MINI-02/02U",
                            "ESP32-SOLO-1",
                            "ESP32-DU1906 (-U)",
                            "ESP32-WROOM-32D/32U",
                            "ESP32-WROOM-32",
                            "ESP32-WROVER-B/IB",
                            "ESP32-WROVER (-I)",
                        ],
                    ),
                    group(
                        GroupLabel::DevKits,
                        &[
                            "ESP32-DevKitC",
                            "ESP32-DevKitM-1",
                            "ESP-WROVER-KIT",
                            "ESP32-PICO-KIT",
                            "ESP32-PICO-KIT-1",
                            "ESP32-PICO-DevKitM-2",
                            "ESP-EYE",
                            "ESP32 Audio DevKits",
                            "ESP32-Korvo",
                        ],
                    ),
                ],
            },
            ProductFamily {
                family: "ESP8266",
                groups: vec![
                    group(GroupLabel::Socs, &["ESP8266"]),
                    group(
                        GroupLabel::Modules,
                        &["ESP-WROOM-02D/02U", "ESP-WROOM-02"],
                    ),
                    group(GroupLabel::DevKits, &["ESP8266-DevKitC"]),
                ],
            },
        ],
    }
}
