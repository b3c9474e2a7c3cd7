//! Full-name splitting.

/// Split a full-name pair into per-segment pairs.
///
/// Names are often stored as "given family" in both reading and surface;
/// pairing the whitespace-delimited segments positionally enables dictionary
/// lookups on either half alone. When the two sides split into different
/// segment counts the pairing is ambiguous and nothing is returned.
///
/// `("ななし むめい", "七詩 ムメイ")` → `[("ななし", "七詩"), ("むめい", "ムメイ")]`
#[must_use]
pub fn split_name(reading: &str, surface: &str) -> Vec<(String, String)> {
    let reading_parts: Vec<&str> = reading.split_whitespace().collect();
    let surface_parts: Vec<&str> = surface.split_whitespace().collect();

    if reading_parts.len() != surface_parts.len() {
        return Vec::new();
    }

    reading_parts
        .into_iter()
        .zip(surface_parts)
        .map(|(r, s)| (r.to_string(), s.to_string()))
        .collect()
}
