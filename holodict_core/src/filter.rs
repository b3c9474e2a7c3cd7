//! Surface-form eligibility.
//!
//! The target dictionaries map foreign-script terms to pronunciations, so a
//! surface form made only of basic Latin characters carries nothing worth an
//! entry. One shared pattern decides this for both sinks.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches surface forms composed entirely of ASCII letters/digits,
/// whitespace, underscore, hyphen, apostrophe, comma, parentheses, the
/// single Greek α (it appears in one romanized stage name), and backslash.
pub const LATIN_ONLY_PATTERN: &str = r"^[A-Za-z0-9\s_\-',()α\\]+$";

#[expect(clippy::expect_used, reason = "the pattern is a constant verified by tests")]
static LATIN_ONLY: Lazy<Regex> =
    Lazy::new(|| Regex::new(LATIN_ONLY_PATTERN).expect("latin-only pattern compiles"));

/// Whether a surface form should be emitted at all.
///
/// Returns `false` for strings matching [`LATIN_ONLY_PATTERN`]; anything
/// containing at least one character outside that set is eligible.
#[must_use]
pub fn is_eligible_surface(surface: &str) -> bool {
    !LATIN_ONLY.is_match(surface)
}
