//! locount - word counting and cost estimation for localization files
//!
//! locount is a CLI tool and library that extracts translatable text from
//! localization source files (JSON, XML, XLIFF, spreadsheets, CSV, DOCX and
//! PDF), counts words with and without markup, and prices the result per
//! target language. It also compares a source and a target string file for
//! placeholder, markup and length defects.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing, commands, terminal output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, stripping, accounting and aggregation
//! - `export`: Spreadsheet reports
//! - `issues`: QA issue type definitions
//! - `rules`: Bilingual QA rules
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod export;
pub mod issues;
pub mod rules;
pub mod utils;
