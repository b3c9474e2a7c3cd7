//! Migaku line sink.
//!
//! One line per term, four tab-separated fields, no header, no timestamps.
//! Re-running on the same roster yields a byte-identical file.

use async_trait::async_trait;
use holodict_core::{Category, PersonRecord, PrimaryNamePolicy, Term, generate_terms};
use std::path::Path;
use tracing::info;

use crate::{DictionarySink, ExportStats, Result};

pub struct MigakuSink {
    file_name: String,
}

impl MigakuSink {
    #[must_use]
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

/// Display tag in the third column.
const fn label(category: Category) -> &'static str {
    match category {
        Category::PersonName => "人名",
        Category::Nickname => "人名(ニックネーム)",
        Category::Other => "▶",
    }
}

/// A tab or newline inside a field would break the four-column contract.
fn sanitize(field: &str) -> String {
    field.replace(['\t', '\n', '\r'], " ")
}

fn line(term: &Term) -> String {
    format!(
        "{}\t{}\t{}\t{}",
        sanitize(&term.reading),
        sanitize(&term.surface),
        label(term.category),
        sanitize(&term.note)
    )
}

#[async_trait]
impl DictionarySink for MigakuSink {
    fn file_name(&self) -> &str {
        &self.file_name
    }

    async fn export(&self, records: &[PersonRecord], build_dir: &Path) -> Result<ExportStats> {
        let mut stats = ExportStats::default();
        let mut lines = Vec::new();
        for record in records {
            for term in generate_terms(record, PrimaryNamePolicy::RequireEligible) {
                stats.count(term.category);
                lines.push(line(&term));
            }
        }

        tokio::fs::create_dir_all(build_dir).await?;
        let path = build_dir.join(&self.file_name);
        tokio::fs::write(&path, lines.join("\n")).await?;

        info!(
            "Wrote {}: {} lines ({} names, {} nicknames, {} others)",
            path.display(),
            stats.total(),
            stats.person_names,
            stats.nicknames,
            stats.others
        );
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_has_exactly_four_fields() {
        let term = Term {
            reading: "ななし むめい".to_string(),
            surface: "七詩 ムメイ".to_string(),
            category: Category::PersonName,
            note: "七詩 ムメイ アイドル".to_string(),
        };
        let line = line(&term);
        assert_eq!(
            line.split('\t').collect::<Vec<_>>(),
            vec!["ななし むめい", "七詩 ムメイ", "人名", "七詩 ムメイ アイドル"]
        );
    }

    #[test]
    fn embedded_tabs_and_newlines_are_flattened() {
        let term = Term {
            reading: "あ\tい".to_string(),
            surface: "う\nえ".to_string(),
            category: Category::Other,
            note: "お".to_string(),
        };
        assert_eq!(line(&term).split('\t').count(), 4);
    }

    #[test]
    fn other_terms_use_the_marker_label() {
        assert_eq!(label(Category::Other), "▶");
        assert_eq!(label(Category::Nickname), "人名(ニックネーム)");
    }
}
