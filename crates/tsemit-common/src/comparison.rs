//! String comparison helpers.
//!
//! Case-insensitive variants compare the lowercase mapping of each char,
//! so ordering is by Unicode scalar value after folding rather than by
//! locale collation.

use std::cmp::Ordering;

fn folded(s: &str) -> impl DoubleEndedIterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

pub fn equate_strings_case_sensitive(a: &str, b: &str) -> bool {
    a == b
}

pub fn equate_strings_case_insensitive(a: &str, b: &str) -> bool {
    a == b || folded(a).eq(folded(b))
}

/// Byte-wise comparison. For UTF-8 this matches ordering by code point.
pub fn compare_strings_case_sensitive(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Compare two strings ignoring case.
///
/// A string that is a (folded) prefix of the other sorts first.
pub fn compare_strings_case_insensitive(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }
    folded(a).cmp(folded(b))
}

/// Case-insensitive comparison that falls back to a case-sensitive one to
/// break ties, giving a total order that still groups case variants.
pub fn compare_strings_case_insensitive_then_sensitive(a: &str, b: &str) -> Ordering {
    compare_strings_case_insensitive(a, b).then_with(|| compare_strings_case_sensitive(a, b))
}

pub fn string_comparer(ignore_case: bool) -> fn(&str, &str) -> Ordering {
    if ignore_case {
        compare_strings_case_insensitive
    } else {
        compare_strings_case_sensitive
    }
}

pub fn string_equality_comparer(ignore_case: bool) -> fn(&str, &str) -> bool {
    if ignore_case {
        equate_strings_case_insensitive
    } else {
        equate_strings_case_sensitive
    }
}

/// Whether `s` starts with `prefix`.
///
/// Ignoring case, the folded chars are compared, so the matched span of `s`
/// may differ in byte length from `prefix` (U+212A KELVIN SIGN folds to `k`).
pub fn has_prefix(s: &str, prefix: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        return s.starts_with(prefix);
    }
    let mut chars = folded(s);
    folded(prefix).all(|ch| chars.next() == Some(ch))
}

/// Whether `s` ends with `suffix`.
pub fn has_suffix(s: &str, suffix: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        return s.ends_with(suffix);
    }
    let mut chars = folded(s).rev();
    folded(suffix).rev().all(|ch| chars.next() == Some(ch))
}

#[cfg(test)]
#[path = "tests/comparison_tests.rs"]
mod tests;
