//! Yomichan archive sink.
//!
//! Builds a format-3 Yomichan dictionary in memory (index plus chunked term
//! banks), zips it, and writes one archive file. The browser extension
//! imports the zip as-is.

use async_trait::async_trait;
use holodict_config::DictionaryConfig;
use holodict_core::{Category, PersonRecord, PrimaryNamePolicy, Term, generate_terms};
use serde_json::{Value, json};
use std::io::{Cursor, Write};
use std::path::Path;
use tracing::info;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::{DictionarySink, ExportStats, Result};

/// Yomichan dictionary format version, shared by the index and term banks.
const FORMAT_VERSION: u32 = 3;

/// Rows per `term_bank_N.json` file.
const TERM_BANK_MAX: usize = 10_000;

pub struct YomichanSink {
    file_name: String,
    meta: DictionaryConfig,
}

impl YomichanSink {
    #[must_use]
    pub fn new(file_name: impl Into<String>, meta: DictionaryConfig) -> Self {
        Self {
            file_name: file_name.into(),
            meta,
        }
    }

    fn index_json(&self) -> Value {
        json!({
            "title": self.meta.title,
            "format": FORMAT_VERSION,
            "revision": self.meta.revision,
            "author": self.meta.author,
            "description": self.meta.description,
            "attribution": self.meta.attribution,
            "url": self.meta.url
        })
    }

    /// Serialize the whole archive into a byte buffer. Writing happens in
    /// memory so a failure never leaves a truncated file behind.
    fn archive_bytes(&self, terms: &[Term]) -> Result<Vec<u8>> {
        let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        writer.start_file("index.json", options)?;
        writer.write_all(serde_json::to_string(&self.index_json())?.as_bytes())?;

        for (i, chunk) in terms.chunks(TERM_BANK_MAX).enumerate() {
            let rows: Vec<Value> = chunk.iter().map(term_row).collect();
            writer.start_file(format!("term_bank_{}.json", i + 1), options)?;
            writer.write_all(serde_json::to_string(&Value::Array(rows))?.as_bytes())?;
        }

        Ok(writer.finish()?.into_inner())
    }
}

/// Display tag prefixed to each definition line.
const fn label(category: Category) -> &'static str {
    match category {
        Category::PersonName => "人名",
        Category::Nickname => "人名(ニックネーム)",
        Category::Other => "Fanname/etc",
    }
}

/// One format-3 term-bank row:
/// `[surface, reading, definition tags, rules, score, definitions, sequence, term tags]`.
fn term_row(term: &Term) -> Value {
    json!([
        term.surface,
        term.reading,
        "",
        "",
        0,
        [format!("{}: {}", label(term.category), term.note)],
        0,
        ""
    ])
}

#[async_trait]
impl DictionarySink for YomichanSink {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    async fn export(&self, records: &[PersonRecord], build_dir: &Path) -> Result<ExportStats> {
        let mut stats = ExportStats::default();
        let mut terms = Vec::new();
        for record in records {
            for term in generate_terms(record, PrimaryNamePolicy::AlwaysEmit) {
                stats.count(term.category);
                terms.push(term);
            }
        }

        let bytes = self.archive_bytes(&terms)?;

        tokio::fs::create_dir_all(build_dir).await?;
        let path = build_dir.join(&self.file_name);
        tokio::fs::write(&path, bytes).await?;

        info!(
            "Wrote {}: {} terms ({} names, {} nicknames, {} others)",
            path.display(),
            stats.total(),
            stats.person_names,
            stats.nicknames,
            stats.others
        );
        Ok(stats)
    }
}
