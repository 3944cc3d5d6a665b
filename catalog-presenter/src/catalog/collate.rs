//! Locale-aware dish and category name comparison
//!
//! Names are compared in three passes over their canonical decomposition,
//! the way storefront shoppers expect a mixed Russian and Latin menu to
//! be alphabetized:
//! 1. case-folded base letters, accents stripped (`ё` sorts with `е`, `é` with `e`)
//! 2. unaccented before accented
//! 3. lowercase before uppercase

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Compare two display names
pub fn compare_names(a: &str, b: &str) -> Ordering {
    primary(a)
        .cmp(primary(b))
        .then_with(|| secondary(a).cmp(secondary(b)))
        .then_with(|| tertiary(a).cmp(tertiary(b)))
}

/// Case- and accent-insensitive fold used for comparison and search
pub fn fold_name(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn primary(s: &str) -> impl Iterator<Item = char> + '_ {
    fold_name(s)
}

/// Accents per base letter; `'\0'` marks each base so bare letters sort first
fn secondary(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .map(|c| if is_combining_mark(c) { c } else { '\0' })
}

fn tertiary(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
}
