use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Local;
use serde::Serialize;
use tracing::debug;

use super::super::{
    args::{CountCommand, OutputFormat},
    exit_status::ExitStatus,
    report::{
        print_count_report, print_export_notice, print_file_warnings, print_rate_fallback,
    },
};
use crate::{
    config::{Config, load_config},
    core::{
        CountOptions, CountOutcome, Quote, Report, SourceError, TagStripper, count_files,
        scan::scan_inputs,
    },
    export::export_count,
};

/// Machine-readable form of a count run, printed with `--format json`.
#[derive(Serialize)]
struct CountJson<'a> {
    report: &'a Report,
    quote: &'a Quote,
    skipped: Vec<SkippedJson<'a>>,
}

#[derive(Serialize)]
struct SkippedJson<'a> {
    path: &'a str,
    reason: String,
}

impl<'a> CountJson<'a> {
    fn new(outcome: &'a CountOutcome, quote: &'a Quote) -> Self {
        let skipped = outcome
            .skipped
            .iter()
            .chain(&outcome.empty)
            .map(|err| SkippedJson {
                path: err.path(),
                reason: err.to_string(),
            })
            .collect();
        Self {
            report: &outcome.report,
            quote,
            skipped,
        }
    }
}

fn validate_rate_override(rate: Option<f64>) -> Result<()> {
    if let Some(rate) = rate
        && (!rate.is_finite() || rate < 0.0)
    {
        bail!("Invalid --rate: {} (expected a non-negative number)", rate);
    }
    Ok(())
}

/// Rate applied to every row: `--rate`, else the first target language's
/// rate, else the configured default.
fn resolve_rate(rate: Option<f64>, languages: &[String], config: &Config) -> f64 {
    if let Some(rate) = rate {
        return rate;
    }
    match languages.first() {
        Some(language) => config.rate_table().rate_for(language),
        None => config.default_rate,
    }
}

pub fn count(cmd: CountCommand) -> Result<ExitStatus> {
    validate_rate_override(cmd.rate)?;

    let current_dir = std::env::current_dir().context("Failed to read current directory")?;
    let loaded = load_config(&current_dir)?;
    let config = loaded.config;
    if let Some(path) = &loaded.path {
        debug!(config = %path.display(), "loaded config");
    }

    let languages = if cmd.languages.is_empty() {
        config.target_languages.clone()
    } else {
        cmd.languages.clone()
    };
    let rates = config.rate_table();
    for language in languages.iter().filter(|l| !rates.contains(l)) {
        print_rate_fallback(language, rates.default_rate);
    }

    let options = CountOptions {
        rate: resolve_rate(cmd.rate, &languages, &config),
        stripper: TagStripper::new(!cmd.no_strip && config.strip_tags),
        columns: config.column_selector(cmd.column.clone()),
        keep_empty: cmd.keep_empty || config.keep_empty,
    };

    let paths = if cmd.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        cmd.paths.clone()
    };
    let scan = scan_inputs(&paths, &config.scan_options(cmd.recursive));
    debug!(
        files = scan.files.len(),
        missing = scan.missing.len(),
        unreadable = scan.skipped_count,
        "scanned inputs"
    );

    let outcome = count_files(&scan.files, &options);
    debug!(
        counted = outcome.files_counted(),
        skipped = outcome.skipped.len(),
        empty = outcome.empty.len(),
        "counted files"
    );
    let quote = Quote::new(
        &outcome.report,
        &config.source_language,
        &languages,
        &rates,
        &config.throughput(),
    );

    let missing: Vec<&Path> = scan.missing.iter().map(PathBuf::as_path).collect();
    print_file_warnings(&outcome.skipped, &outcome.empty, &missing);

    match cmd.format {
        OutputFormat::Table => print_count_report(&outcome.report, &quote),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&CountJson::new(&outcome, &quote))
                .context("Failed to serialize report")?;
            println!("{}", json);
        }
    }

    if !cmd.common.no_export {
        let dir = cmd
            .common
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output_dir));
        let result = export_count(&outcome.report, &quote, &dir, &Local::now());
        print_export_notice(&result);
    }

    Ok(ExitStatus::Success)
}
