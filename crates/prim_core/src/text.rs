//! UTF-16 code-unit view over Rust strings.
//!
//! Every length and position reported by [`crate::string`] counts UTF-16 code
//! units, so a character outside the Basic Multilingual Plane (most emoji)
//! occupies two positions. Slices that cut a surrogate pair decode the orphaned
//! half as U+FFFD.

/// Number of UTF-16 code units needed to encode `s`.
pub fn unit_len(s: &str) -> usize {
    // Fast path for ASCII strings
    if s.is_ascii() {
        return s.len();
    }
    s.chars().map(char::len_utf16).sum()
}

/// Converts a byte offset into a code-unit offset.
///
/// `byte` must lie on a char boundary of `s`; offsets past the end clamp.
pub fn byte_to_unit(s: &str, byte: usize) -> usize {
    let byte = byte.min(s.len());
    unit_len(&s[..byte])
}

/// Decodes code units, replacing unpaired surrogates with U+FFFD.
pub fn from_units(units: &[u16]) -> String {
    String::from_utf16_lossy(units)
}

/// Code units `[start, end)` of `s`. Both bounds clamp to the text.
pub fn slice_units(s: &str, start: usize, end: usize) -> String {
    if s.is_ascii() {
        let end = end.min(s.len());
        let start = start.min(end);
        return s[start..end].to_string();
    }
    let units: Vec<u16> = s.encode_utf16().collect();
    let end = end.min(units.len());
    let start = start.min(end);
    from_units(&units[start..end])
}

/// One string per code unit of `s`.
pub fn split_units(s: &str) -> Vec<String> {
    if s.is_ascii() {
        return s.chars().map(String::from).collect();
    }
    s.encode_utf16().map(|u| from_units(&[u])).collect()
}
