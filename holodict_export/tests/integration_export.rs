//! Integration tests driving the embedded roster through both sinks.

use holodict_config::Config;
use holodict_export::{DictionarySink, MigakuSink, YomichanSink};
use std::path::PathBuf;

fn temp_build_dir(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("holodict-test-{}-{}", tag, std::process::id()))
}

#[tokio::test]
async fn both_sinks_write_their_files() {
    let records = holodict_dataset::roster().unwrap();
    let config = Config::default();
    let dir = temp_build_dir("both");

    let yomichan = YomichanSink::new(
        config.output.yomichan_file.clone(),
        config.dictionary.clone(),
    );
    let archive_stats = yomichan.export(&records, &dir).await.unwrap();
    assert!(archive_stats.total() > 0);
    assert!(dir.join("hololive-dictionary.zip").exists());

    let migaku = MigakuSink::new(config.output.migaku_file.clone());
    let line_stats = migaku.export(&records, &dir).await.unwrap();

    // The archive emits Latin-only primary names unconditionally; the line
    // sink gates them, so it must end up with strictly fewer name entries.
    assert!(line_stats.person_names < archive_stats.person_names);
    // Aliases and others are filtered identically in both sinks.
    assert_eq!(line_stats.nicknames, archive_stats.nicknames);
    assert_eq!(line_stats.others, archive_stats.others);

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn migaku_lines_have_four_fields_and_stable_bytes() {
    let records = holodict_dataset::roster().unwrap();
    let dir = temp_build_dir("migaku");
    let sink = MigakuSink::new("out.tsv");

    let stats = sink.export(&records, &dir).await.unwrap();
    let first = std::fs::read_to_string(dir.join("out.tsv")).unwrap();

    assert_eq!(first.lines().count(), stats.total());
    for line in first.lines() {
        assert_eq!(line.split('\t').count(), 4, "bad line: {line}");
    }

    sink.export(&records, &dir).await.unwrap();
    let second = std::fs::read_to_string(dir.join("out.tsv")).unwrap();
    assert_eq!(first, second);

    std::fs::remove_dir_all(&dir).ok();
}

#[tokio::test]
async fn archive_reopens_with_index_and_terms() {
    let records = holodict_dataset::roster().unwrap();
    let dir = temp_build_dir("zip");
    let sink = YomichanSink::new("dict.zip", Config::default().dictionary);

    let stats = sink.export(&records, &dir).await.unwrap();

    let file = std::fs::File::open(dir.join("dict.zip")).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();

    let index: serde_json::Value =
        serde_json::from_reader(archive.by_name("index.json").unwrap()).unwrap();
    assert_eq!(index["format"], 3);
    assert_eq!(index["title"], "Hololive Dictionary");

    let bank: serde_json::Value =
        serde_json::from_reader(archive.by_name("term_bank_1.json").unwrap()).unwrap();
    let rows = bank.as_array().unwrap();
    assert_eq!(rows.len(), stats.total());
    for row in rows {
        assert_eq!(row.as_array().unwrap().len(), 8);
    }

    std::fs::remove_dir_all(&dir).ok();
}
