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

//! Roster loading.
//!
//! The roster is external, hand-curated input. A snapshot ships embedded in
//! the binary so the tool runs without any files; `--input` swaps in a newer
//! roster JSON without rebuilding.

use anyhow::Context;
use holodict_core::PersonRecord;
use std::path::Path;
use tracing::info;

const EMBEDDED_ROSTER: &str = include_str!("../data/roster.json");

/// The embedded roster snapshot.
pub fn roster() -> anyhow::Result<Vec<PersonRecord>> {
    serde_json::from_str(EMBEDDED_ROSTER).context("embedded roster is malformed")
}

/// Load a roster from an external JSON file (same schema as the embedded
/// snapshot: an ordered array of person records).
pub async fn load_from_path(path: &Path) -> anyhow::Result<Vec<PersonRecord>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read roster file: {}", path.display()))?;

    let records: Vec<PersonRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Malformed roster JSON in {}", path.display()))?;

    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_roster_parses() {
        let Ok(records) = roster() else {
            panic!("embedded roster should parse");
        };
        assert!(!records.is_empty());
    }

    #[test]
    fn embedded_roster_contains_an_alias_only_record() {
        let Ok(records) = roster() else {
            panic!("embedded roster should parse");
        };
        assert!(
            records
                .iter()
                .any(|r| r.name.reading.is_empty() && !r.alias.is_empty())
        );
    }
}
