//! Text operations.
//!
//! Lengths and positions count UTF-16 code units (see [`crate::text`]).
//! Case mapping and trimming follow the simple Unicode rules of the standard
//! library, never a locale table. No operation fails: out-of-range indices
//! clamp and empty arguments degrade to fixed results.

use crate::text;

pub fn concat(a: &str, b: &str) -> String {
    let mut out = String::with_capacity(a.len() + b.len());
    out.push_str(a);
    out.push_str(b);
    out
}

/// Number of UTF-16 code units in `s`.
pub fn length(s: &str) -> usize {
    text::unit_len(s)
}

/// Code units `start..=end` of `s`, both bounds inclusive and 0-based.
///
/// `start > end` yields empty text. A negative `start` clamps to 0 and an
/// `end` past the last unit clamps to it.
pub fn substring(s: &str, start: i64, end: i64) -> String {
    if start > end {
        return String::new();
    }
    let len = text::unit_len(s) as i64;
    let start = start.max(0);
    let end = end.saturating_add(1).min(len);
    if start >= end {
        return String::new();
    }
    text::slice_units(s, start as usize, end as usize)
}

/// Code-unit index of the first occurrence of `needle`, or -1.
///
/// An empty needle matches at 0.
pub fn index_of(s: &str, needle: &str) -> i64 {
    match s.find(needle) {
        Some(byte) => text::byte_to_unit(s, byte) as i64,
        None => -1,
    }
}

pub fn contains(s: &str, needle: &str) -> bool {
    s.contains(needle)
}

pub fn starts_with(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

pub fn ends_with(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}

pub fn to_uppercase(s: &str) -> String {
    s.to_uppercase()
}

pub fn to_lowercase(s: &str) -> String {
    s.to_lowercase()
}

/// Strips leading and trailing Unicode whitespace.
pub fn trim(s: &str) -> String {
    s.trim().to_string()
}

/// Splits on every literal occurrence of `delimiter`.
///
/// An empty delimiter yields one element per code unit (none for empty text).
/// A delimiter that never occurs yields `[s]`.
pub fn split(s: &str, delimiter: &str) -> Vec<String> {
    if delimiter.is_empty() {
        return text::split_units(s);
    }
    s.split(delimiter).map(str::to_string).collect()
}

/// Concatenates `parts` with `separator` between neighbours.
pub fn join<S: AsRef<str>>(parts: &[S], separator: &str) -> String {
    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(part.as_ref());
    }
    out
}

/// Replaces every occurrence of `old` with `new`.
///
/// An empty `old` is a no-op rather than an insertion between every unit.
pub fn replace(s: &str, old: &str, new: &str) -> String {
    if old.is_empty() {
        return s.to_string();
    }
    s.replace(old, new)
}

pub fn is_empty(s: &str) -> bool {
    s.is_empty()
}
