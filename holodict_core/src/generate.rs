//! Per-record term generation.
//!
//! Each [`PersonRecord`] expands into a sequence of [`Term`] values: the
//! primary name, its per-segment splits, nicknames, and other/fan terms.
//! Terms are derived fresh on every sink run and never stored.

use crate::filter::is_eligible_surface;
use crate::record::PersonRecord;
use crate::split::split_name;

/// What kind of entry a term becomes in the output dictionaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    PersonName,
    Nickname,
    Other,
}

/// How the primary-name term interacts with the eligibility filter.
///
/// The two sinks historically diverged here; the divergence is kept but as
/// an explicit parameter rather than two copies of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryNamePolicy {
    /// Emit the full-name term even when its surface is Latin-only.
    /// The archive sink uses this.
    AlwaysEmit,
    /// Skip the full-name term and its splits unless the surface passes the
    /// eligibility filter. The line sink uses this.
    RequireEligible,
}

/// One output entry: reading, surface, category, and the shared note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub reading: String,
    pub surface: String,
    pub category: Category,
    pub note: String,
}

/// Expand one record into its output terms, in emission order.
///
/// The primary name (when its reading is non-empty) comes first, then its
/// eligible splits, then eligible aliases, then eligible others. A record
/// with an empty primary reading skips only the name-based terms.
#[must_use]
pub fn generate_terms(record: &PersonRecord, policy: PrimaryNamePolicy) -> Vec<Term> {
    let mut terms = Vec::new();
    let note = record.base_note();

    if !record.name.reading.is_empty() {
        let surface = record.name.surface_or_reading();
        let primary_passes = match policy {
            PrimaryNamePolicy::AlwaysEmit => true,
            PrimaryNamePolicy::RequireEligible => is_eligible_surface(surface),
        };
        if primary_passes {
            terms.push(Term {
                reading: record.name.reading.clone(),
                surface: surface.to_string(),
                category: Category::PersonName,
                note: note.clone(),
            });
            for (sub_reading, sub_surface) in split_name(&record.name.reading, surface) {
                if is_eligible_surface(&sub_surface) {
                    terms.push(Term {
                        reading: sub_reading,
                        surface: sub_surface,
                        category: Category::PersonName,
                        note: note.clone(),
                    });
                }
            }
        }
    }

    for alias in &record.alias {
        let surface = alias.surface_or_reading();
        if is_eligible_surface(surface) {
            terms.push(Term {
                reading: alias.reading.clone(),
                surface: surface.to_string(),
                category: Category::Nickname,
                note: note.clone(),
            });
        }
    }

    if let Some(others) = &record.others {
        for other in others {
            let surface = other.surface_or_reading();
            if is_eligible_surface(surface) {
                terms.push(Term {
                    reading: other.reading.clone(),
                    surface: surface.to_string(),
                    category: Category::Other,
                    note: note.clone(),
                });
            }
        }
    }

    terms
}
