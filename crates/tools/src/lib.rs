//! Developer tooling: read-only corpus inspection.
//!
//! # Invariants
//! - Tools never mutate the corpus they inspect.

mod inspector;

pub use inspector::{BookCoverage, BookInfo, CorpusInspector, CorpusSummary};

pub fn crate_info() -> &'static str {
    "scripture-tools v0.1.0"
}
