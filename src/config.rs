use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::{
    Throughput,
    extract::{ColumnSelector, DEFAULT_TEXT_COLUMNS},
    rates::{self, RateTable},
    scan::{DEFAULT_INCLUDES, ScanOptions, compile_patterns},
};

pub const CONFIG_FILE_NAME: &str = ".locountrc.json";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_language")]
    pub source_language: String,
    #[serde(default = "default_rate")]
    pub default_rate: f64,
    #[serde(default = "rates::default_language_rates")]
    pub language_rates: BTreeMap<String, f64>,
    #[serde(default)]
    pub target_languages: Vec<String>,
    #[serde(default = "default_text_columns")]
    pub text_columns: Vec<String>,
    #[serde(default = "default_strip_tags")]
    pub strip_tags: bool,
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_words_per_hour")]
    pub words_per_hour: f64,
    #[serde(default = "default_hours_per_day")]
    pub hours_per_day: f64,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub keep_empty: bool,
}

fn default_source_language() -> String {
    rates::DEFAULT_SOURCE_LANGUAGE.to_string()
}

fn default_rate() -> f64 {
    rates::DEFAULT_RATE
}

fn default_text_columns() -> Vec<String> {
    DEFAULT_TEXT_COLUMNS.iter().map(|s| s.to_string()).collect()
}

fn default_strip_tags() -> bool {
    true
}

fn default_includes() -> Vec<String> {
    DEFAULT_INCLUDES.iter().map(|s| s.to_string()).collect()
}

fn default_words_per_hour() -> f64 {
    Throughput::default().words_per_hour
}

fn default_hours_per_day() -> f64 {
    Throughput::default().hours_per_day
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_language: default_source_language(),
            default_rate: default_rate(),
            language_rates: rates::default_language_rates(),
            target_languages: Vec::new(),
            text_columns: default_text_columns(),
            strip_tags: default_strip_tags(),
            includes: default_includes(),
            ignores: Vec::new(),
            words_per_hour: default_words_per_hour(),
            hours_per_day: default_hours_per_day(),
            output_dir: default_output_dir(),
            keep_empty: false,
        }
    }
}

fn validate_rate(field: &str, rate: f64) -> Result<()> {
    if !rate.is_finite() || rate < 0.0 {
        bail!("Invalid rate in '{}': {}", field, rate);
    }
    Ok(())
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects invalid glob patterns, negative or non-finite rates and
    /// non-positive throughput. Errors name the offending field.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }
        for pattern in &self.includes {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'includes': \"{}\"", pattern))?;
        }

        validate_rate("defaultRate", self.default_rate)?;
        for (language, rate) in &self.language_rates {
            validate_rate(&format!("languageRates.{}", language), *rate)?;
        }

        if !(self.words_per_hour.is_finite() && self.words_per_hour > 0.0) {
            bail!("'wordsPerHour' must be positive, got {}", self.words_per_hour);
        }
        if !(self.hours_per_day.is_finite() && self.hours_per_day > 0.0) {
            bail!("'hoursPerDay' must be positive, got {}", self.hours_per_day);
        }

        Ok(())
    }

    pub fn rate_table(&self) -> RateTable {
        RateTable::new(self.default_rate, self.language_rates.clone())
    }

    pub fn throughput(&self) -> Throughput {
        Throughput {
            words_per_hour: self.words_per_hour,
            hours_per_day: self.hours_per_day,
        }
    }

    pub fn column_selector(&self, explicit: Option<String>) -> ColumnSelector {
        ColumnSelector::new(self.text_columns.clone(), explicit)
    }

    pub fn scan_options(&self, recursive: bool) -> ScanOptions {
        ScanOptions {
            includes: compile_patterns(&self.includes),
            ignores: compile_patterns(&self.ignores),
            recursive,
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was loaded from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {}", path.display()))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
