//! Roster data model.
//!
//! A roster is an ordered list of [`PersonRecord`] values, deserialized from
//! JSON. Name pairs are stored the way the upstream roster stores them: an
//! array of two strings `["reading", "surface"]`, or a single-element array
//! `["reading"]` when the surface form is the reading itself.

use serde::Deserialize;

/// A reading/surface pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawPair")]
pub struct NamePair {
    /// Kana (or romanized) pronunciation.
    pub reading: String,
    /// Written form; falls back to the reading when absent.
    pub surface: Option<String>,
}

impl NamePair {
    #[must_use]
    pub fn new(reading: impl Into<String>, surface: Option<&str>) -> Self {
        Self {
            reading: reading.into(),
            surface: surface.map(ToOwned::to_owned),
        }
    }

    /// The surface form, falling back to the reading when none is stored.
    #[must_use]
    pub fn surface_or_reading(&self) -> &str {
        self.surface.as_deref().unwrap_or(&self.reading)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPair {
    Pair(String, String),
    Single([String; 1]),
}

impl From<RawPair> for NamePair {
    fn from(raw: RawPair) -> Self {
        match raw {
            RawPair::Pair(reading, surface) => Self {
                reading,
                surface: Some(surface),
            },
            RawPair::Single([reading]) => Self {
                reading,
                surface: None,
            },
        }
    }
}

/// One persona in the roster.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonRecord {
    /// Primary name. An empty reading marks an alias-only record: the
    /// name-based terms are skipped but aliases and others still emit.
    pub name: NamePair,
    /// Honorific/role tags; the first one annotates every emitted term.
    #[serde(default)]
    pub marks: Vec<String>,
    /// Nicknames and alternate spellings.
    #[serde(default)]
    pub alias: Vec<NamePair>,
    /// Fan-names and other related terms.
    #[serde(default)]
    pub others: Option<Vec<NamePair>>,
}

impl PersonRecord {
    /// The annotation shared by every term of this record: primary surface
    /// (or reading) followed by the first mark, trimmed.
    #[must_use]
    pub fn base_note(&self) -> String {
        let mark = self.marks.first().map_or("", String::as_str);
        let note = format!("{} {}", self.name.surface_or_reading(), mark);
        note.trim().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_deserializes_from_two_element_array() {
        let pair: Result<NamePair, _> = serde_json::from_str(r#"["ななし むめい", "七詩 ムメイ"]"#);
        assert_eq!(
            pair.ok(),
            Some(NamePair::new("ななし むめい", Some("七詩 ムメイ")))
        );
    }

    #[test]
    fn pair_deserializes_from_single_element_array() {
        let pair: Result<NamePair, _> = serde_json::from_str(r#"["むめい"]"#);
        assert_eq!(pair.ok(), Some(NamePair::new("むめい", None)));
    }

    #[test]
    fn surface_falls_back_to_reading() {
        let pair = NamePair::new("そらちゃん", None);
        assert_eq!(pair.surface_or_reading(), "そらちゃん");
    }

    #[test]
    fn base_note_joins_surface_and_first_mark() {
        let record = PersonRecord {
            name: NamePair::new("ななし むめい", Some("七詩 ムメイ")),
            marks: vec!["アイドル".to_string(), "unused".to_string()],
            alias: vec![],
            others: None,
        };
        assert_eq!(record.base_note(), "七詩 ムメイ アイドル");
    }

    #[test]
    fn base_note_trims_when_marks_missing() {
        let record = PersonRecord {
            name: NamePair::new("ときのそら", None),
            marks: vec![],
            alias: vec![],
            others: None,
        };
        assert_eq!(record.base_note(), "ときのそら");
    }
}
