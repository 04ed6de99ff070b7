//! In-memory snapshot of the reference country dataset and the matching
//! heuristics applied to it. The dataset shape follows the public REST
//! Countries v3 schema: `{name: {common, official}, translations, cca2, cca3}`.

use serde::Deserialize;
use std::collections::HashMap;

/// Translation key carrying the localized display names.
const LOCALIZED_TRANSLATION: &str = "zho";

#[derive(Debug, Clone, Deserialize)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CountryRecord {
    pub name: CountryName,
    #[serde(default)]
    pub translations: HashMap<String, CountryName>,
    pub cca2: String,
    pub cca3: String,
}

impl CountryRecord {
    /// Localized name if the record carries one.
    pub fn localized_name(&self) -> Option<&str> {
        let translation = self.translations.get(LOCALIZED_TRANSLATION)?;
        if !translation.common.is_empty() {
            Some(&translation.common)
        } else if !translation.official.is_empty() {
            Some(&translation.official)
        } else {
            None
        }
    }

    /// Localized name with the English common name as the fallback.
    pub fn display_name(&self) -> &str {
        self.localized_name().unwrap_or(&self.name.common)
    }
}

/// Immutable snapshot of the remote dataset. An empty snapshot is the
/// degraded state after a failed fetch; lookups then find nothing and
/// callers fall back to the local tables.
#[derive(Debug, Clone, Default)]
pub struct CountryDataset {
    records: Vec<CountryRecord>,
}

impl CountryDataset {
    pub fn new(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Match a bare identifier: exact ISO code, exact common/official name,
    /// then substring containment of the common name in either direction.
    pub fn find_by_identifier(&self, identifier: &str) -> Option<&CountryRecord> {
        let identifier = identifier.trim().to_lowercase();
        if identifier.is_empty() {
            return None;
        }

        self.records.iter().find(|record| {
            if record.cca2.to_lowercase() == identifier || record.cca3.to_lowercase() == identifier
            {
                return true;
            }
            let common = record.name.common.to_lowercase();
            let official = record.name.official.to_lowercase();
            if common == identifier || official == identifier {
                return true;
            }
            common.contains(&identifier) || identifier.contains(&common)
        })
    }

    /// Scan free text for a country mentioned by name or ISO code, matching
    /// on word boundaries to avoid code fragments inside longer words.
    pub fn find_in_text(&self, text: &str) -> Option<&CountryRecord> {
        let text_lower = text.to_lowercase();
        self.records.iter().find(|record| {
            let candidates = [
                record.name.common.to_lowercase(),
                record.name.official.to_lowercase(),
                record.cca2.to_lowercase(),
                record.cca3.to_lowercase(),
            ];
            candidates
                .iter()
                .any(|candidate| contains_word(&text_lower, candidate))
        })
    }

    /// Find a record whose localized name appears verbatim in the text,
    /// skipping the excluded name. Used to let an explicit foreign country
    /// override the CJK default.
    pub fn find_localized_in_text(&self, text: &str, exclude: &str) -> Option<&CountryRecord> {
        self.records.iter().find(|record| {
            record
                .localized_name()
                .is_some_and(|name| name != exclude && text.contains(name))
        })
    }
}

/// Word-boundary containment: `needle` occurs in `haystack` and is not
/// flanked by alphanumeric characters.
fn contains_word(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return false;
    }

    let mut search_from = 0;
    while let Some(offset) = haystack[search_from..].find(needle) {
        let start = search_from + offset;
        let end = start + needle.len();

        let left_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |ch| !ch.is_alphanumeric());
        let right_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |ch| !ch.is_alphanumeric());

        if left_ok && right_ok {
            return true;
        }

        match haystack[start..].char_indices().nth(1) {
            Some((step, _)) => search_from = start + step,
            None => break,
        }
    }
    false
}
