//! Country inference over free-text addresses.
//!
//! Primary path is a reference dataset fetched from a remote source once per
//! process and cached forever; failures degrade transparently to the local
//! static tables and are logged, never surfaced to the caller.

mod dataset;
mod local;

pub use dataset::{CountryDataset, CountryName, CountryRecord};
pub use local::infer_country_local;

use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::OnceCell;
use tracing::warn;

/// Default jurisdiction assumed for ideographic addresses.
pub const DEFAULT_COUNTRY: &str = "中国";

pub(crate) fn contains_cjk(text: &str) -> bool {
    text.chars().any(|ch| ('\u{4e00}'..='\u{9fa5}').contains(&ch))
}

/// Resolves addresses to country names using the remote dataset with the
/// local tables as fallback. The dataset cache is populated at most once
/// per resolver; concurrent first callers share the in-flight fetch.
pub struct CountryResolver {
    client: reqwest::Client,
    base_url: String,
    cache: OnceCell<CountryDataset>,
}

impl CountryResolver {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            cache: OnceCell::new(),
        }
    }

    async fn dataset(&self) -> &CountryDataset {
        self.cache
            .get_or_init(|| async {
                match self.fetch_all().await {
                    Ok(records) => CountryDataset::new(records),
                    Err(err) => {
                        warn!(error = %err, "country dataset fetch failed, using local fallback");
                        CountryDataset::default()
                    }
                }
            })
            .await
    }

    async fn fetch_all(&self) -> Result<Vec<CountryRecord>, reqwest::Error> {
        let url = format!(
            "{}/all?fields=name,translations,cca2,cca3",
            self.base_url.trim_end_matches('/')
        );
        let response = self.client.get(url).send().await?.error_for_status()?;
        response.json::<Vec<CountryRecord>>().await
    }

    /// Localized name for a bare country identifier (name or ISO code).
    /// Falls back to the local identifier table, which echoes unknown
    /// identifiers back unchanged.
    pub async fn localized_country_name(&self, identifier: &str) -> String {
        if identifier.trim().is_empty() {
            return String::new();
        }

        let dataset = self.dataset().await;
        if dataset.is_empty() {
            return local::local_name_for_identifier(identifier);
        }

        match dataset
            .find_by_identifier(identifier)
            .and_then(|record| record.localized_name())
        {
            Some(name) => name.to_string(),
            None => local::local_name_for_identifier(identifier),
        }
    }

    /// Infer the country a free-text address belongs to via the remote
    /// dataset. Empty return means "undetected".
    pub async fn country_from_address(&self, address: &str) -> String {
        if address.is_empty() {
            return DEFAULT_COUNTRY.to_string();
        }

        let dataset = self.dataset().await;

        // Ideographic text defaults to the home jurisdiction unless the
        // address explicitly names a different country.
        if contains_cjk(address) {
            if let Some(record) = dataset.find_localized_in_text(address, DEFAULT_COUNTRY) {
                if let Some(name) = record.localized_name() {
                    return name.to_string();
                }
            }
            return DEFAULT_COUNTRY.to_string();
        }

        if let Some(record) = dataset.find_in_text(address) {
            return record.display_name().to_string();
        }

        let address_lower = address.to_lowercase();
        for (abbreviation, name) in local::SPECIAL_ABBREVIATIONS {
            if address_lower.contains(abbreviation) {
                return (*name).to_string();
            }
        }

        String::new()
    }

    /// Combined inference: remote dataset first, local tables when the
    /// remote path finds nothing. Still returns empty when neither side
    /// detects a country; callers treat that as "ask the user".
    pub async fn infer_country(&self, address: &str) -> String {
        let detected = self.country_from_address(address).await;
        if detected.is_empty() {
            local::infer_country_local(address)
        } else {
            detected
        }
    }

    /// Guarded variant for callers racing against navigation: the result is
    /// discarded when the guard was invalidated while the lookup ran.
    pub async fn infer_country_if_current(
        &self,
        guard: &LookupGuard,
        ticket: LookupTicket,
        address: &str,
    ) -> Option<String> {
        let result = self.infer_country(address).await;
        guard.is_current(ticket).then_some(result)
    }
}

/// Generation counter guarding against stale async writes: a lookup begun
/// before `invalidate` must not commit its result afterwards.
#[derive(Debug, Default)]
pub struct LookupGuard {
    generation: AtomicU64,
}

/// Token tied to the generation current when the lookup began.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupTicket(u64);

impl LookupGuard {
    pub fn begin(&self) -> LookupTicket {
        LookupTicket(self.generation.load(Ordering::Acquire))
    }

    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    pub fn is_current(&self, ticket: LookupTicket) -> bool {
        self.generation.load(Ordering::Acquire) == ticket.0
    }
}
