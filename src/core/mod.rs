//! Word-counting engine.
//!
//! Pure, synchronous building blocks: extraction of translatable strings,
//! markup stripping, per-document accounting and report aggregation.
//!
//! ## Module Structure
//!
//! - `strip`: markup and placeholder stripping
//! - `data`: strings, documents and formats
//! - `extract`: one extractor per input kind
//! - `account`: word accountant and time estimates
//! - `report`: report aggregation and per-language quotes
//! - `rates`: per-word rate table
//! - `scan`: directory expansion
//! - `pipeline`: the end-to-end counting run
//! - `error`: per-file error taxonomy

pub mod account;
pub mod data;
pub mod error;
pub mod extract;
pub mod pipeline;
pub mod rates;
pub mod report;
pub mod scan;
pub mod strip;

pub use account::{AccountingRow, Throughput, TimeEstimate, account};
pub use data::{KeyedStrings, SourceDocument, SourceFormat, TranslatableString};
pub use error::SourceError;
pub use pipeline::{CountOptions, CountOutcome, count_documents, count_files};
pub use rates::RateTable;
pub use report::{LanguageCost, Quote, Report, ReportTotals, aggregate, sort_rows};
pub use strip::{TagStripper, strip, strip_markup};
