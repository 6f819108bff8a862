use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::debug;

use super::super::{
    args::QaCommand,
    exit_status::ExitStatus,
    report::{print_export_notice, print_qa_success, report_issues},
};
use crate::{
    config::load_config,
    core::{
        KeyedStrings,
        extract::{Extract, NestedMapExtractor},
    },
    export::export_qa,
    rules::diff,
};

/// Load the keyed strings of a JSON string file.
pub fn load_keyed_strings(path: &Path) -> Result<KeyedStrings> {
    let document = NestedMapExtractor
        .extract(path)
        .with_context(|| format!("Failed to load {}", path.display()))?;
    Ok(KeyedStrings::from_document(&document))
}

pub fn qa(cmd: QaCommand) -> Result<ExitStatus> {
    let current_dir = std::env::current_dir().context("Failed to read current directory")?;
    let config = load_config(&current_dir)?.config;

    let source = load_keyed_strings(&cmd.source)?;
    let target = load_keyed_strings(&cmd.target)?;
    debug!(
        source_keys = source.len(),
        target_keys = target.len(),
        "loaded string files"
    );

    let issues = diff(&source, &target);
    if issues.is_empty() {
        print_qa_success(source.len());
    } else {
        report_issues(&issues);
    }

    if !cmd.common.no_export {
        let dir = cmd
            .common
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&config.output_dir));
        let result = export_qa(&issues, &dir, &Local::now());
        print_export_notice(&result);
    }

    Ok(ExitStatus::from_issue_count(issues.len()))
}
