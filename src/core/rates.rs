//! Per-word translation rates.

use std::collections::BTreeMap;

/// Default rate when none is configured, in USD per word.
pub const DEFAULT_RATE: f64 = 0.15;

/// Label of the language source text is written in.
pub const DEFAULT_SOURCE_LANGUAGE: &str = "Korean (KO)";

/// Built-in target language rates, in USD per word.
pub const DEFAULT_LANGUAGE_RATES: &[(&str, f64)] = &[
    ("English (EN)", 0.16),
    ("French (FR)", 0.16),
    ("German (DE)", 0.16),
    ("Spanish (ES)", 0.14),
    ("Japanese (JA)", 0.20),
    ("Simplified Chinese (zh-CN)", 0.11),
];

/// Mapping from target language label to per-word rate.
///
/// Passed explicitly into accounting; never shared or mutated globally.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    pub default_rate: f64,
    pub rates: BTreeMap<String, f64>,
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            default_rate: DEFAULT_RATE,
            rates: default_language_rates(),
        }
    }
}

impl RateTable {
    pub fn new(default_rate: f64, rates: BTreeMap<String, f64>) -> Self {
        Self {
            default_rate,
            rates,
        }
    }

    /// Rate for `language`.
    ///
    /// Falls back to a case-insensitive match, then to the default rate.
    pub fn rate_for(&self, language: &str) -> f64 {
        if let Some(rate) = self.rates.get(language) {
            return *rate;
        }
        self.rates
            .iter()
            .find(|(label, _)| label.eq_ignore_ascii_case(language))
            .map(|(_, rate)| *rate)
            .unwrap_or(self.default_rate)
    }

    /// True if `language` has an explicit rate.
    pub fn contains(&self, language: &str) -> bool {
        self.rates
            .keys()
            .any(|label| label.eq_ignore_ascii_case(language))
    }
}

pub fn default_language_rates() -> BTreeMap<String, f64> {
    DEFAULT_LANGUAGE_RATES
        .iter()
        .map(|(label, rate)| (label.to_string(), *rate))
        .collect()
}
