#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Terminal sinks for the roster pipeline.
//!
//! Both sinks read the same immutable record list, derive their own terms,
//! and write exactly one file into the build directory.

use async_trait::async_trait;
use holodict_core::{Category, PersonRecord};
use std::path::Path;

pub mod error;
pub mod migaku;
pub mod yomichan;

pub use error::{Error, Result};
pub use migaku::MigakuSink;
pub use yomichan::YomichanSink;

/// Per-category entry counts reported after an export.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExportStats {
    pub person_names: usize,
    pub nicknames: usize,
    pub others: usize,
}

impl ExportStats {
    pub(crate) fn count(&mut self, category: Category) {
        match category {
            Category::PersonName => self.person_names += 1,
            Category::Nickname => self.nicknames += 1,
            Category::Other => self.others += 1,
        }
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.person_names + self.nicknames + self.others
    }
}

#[async_trait]
pub trait DictionarySink: Send + Sync {
    /// File name this sink produces under the build directory.
    fn file_name(&self) -> &str;

    /// Derive terms from `records` and write the output file to completion.
    /// Any serialization or I/O failure aborts the run; no partial-output
    /// guarantee is made.
    async fn export(&self, records: &[PersonRecord], build_dir: &Path) -> Result<ExportStats>;
}
