//! Expansion of input paths into candidate source files.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use glob::{MatchOptions, Pattern};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// File name patterns picked up when scanning a directory.
pub const DEFAULT_INCLUDES: &[&str] = &[
    "*.json", "*.xml", "*.xlf", "*.xliff", "*.docx", "*.pdf", "*.xlsx", "*.xlsm", "*.xls",
    "*.ods", "*.csv",
];

const NAME_MATCH: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// Rules for expanding directories.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// File name patterns a directory entry must match.
    pub includes: Vec<Pattern>,
    /// Path patterns that exclude a file or a whole directory.
    pub ignores: Vec<Pattern>,
    /// Descend into subdirectories.
    pub recursive: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            includes: compile_patterns(DEFAULT_INCLUDES),
            ignores: Vec::new(),
            recursive: false,
        }
    }
}

/// Compile glob patterns, dropping (and logging) invalid ones.
pub fn compile_patterns<S: AsRef<str>>(patterns: &[S]) -> Vec<Pattern> {
    patterns
        .iter()
        .filter_map(|p| match Pattern::new(p.as_ref()) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                warn!(pattern = p.as_ref(), error = %e, "invalid glob pattern");
                None
            }
        })
        .collect()
}

/// Result of scanning input paths.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Files to process, in input order; directory contents sorted by name.
    pub files: Vec<PathBuf>,
    /// Inputs that do not exist.
    pub missing: Vec<PathBuf>,
    /// Directory entries that could not be read.
    pub skipped_count: usize,
}

impl ScanOptions {
    fn is_ignored(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.ignores.iter().any(|p| p.matches(&path_str))
    }

    fn is_included(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy()) else {
            return false;
        };
        self.includes
            .iter()
            .any(|p| p.matches_with(&name, NAME_MATCH))
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Expand `inputs` into the files to process.
///
/// Files named explicitly are always kept, whatever their extension, so an
/// unsupported file is reported rather than silently dropped. Directories
/// contribute their non-hidden files that match an include pattern and no
/// ignore pattern.
pub fn scan_inputs(inputs: &[PathBuf], options: &ScanOptions) -> ScanResult {
    let mut result = ScanResult::default();
    let mut seen: HashSet<PathBuf> = HashSet::new();

    for input in inputs {
        if input.is_file() {
            if seen.insert(input.clone()) {
                result.files.push(input.clone());
            }
            continue;
        }
        if !input.is_dir() {
            result.missing.push(input.clone());
            continue;
        }

        let max_depth = if options.recursive { usize::MAX } else { 1 };
        let walker = WalkDir::new(input)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !is_hidden(e) && !options.is_ignored(e.path()));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    result.skipped_count += 1;
                    warn!(error = %e, "cannot access path");
                    continue;
                }
            };
            let path = entry.path();
            if entry.file_type().is_file()
                && options.is_included(path)
                && seen.insert(path.to_path_buf())
            {
                result.files.push(path.to_path_buf());
            }
        }
    }

    debug!(
        files = result.files.len(),
        missing = result.missing.len(),
        skipped = result.skipped_count,
        "scanned inputs"
    );
    result
}
