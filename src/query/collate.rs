//! Human-friendly string ordering for the name sort.
//!
//! Strings compare in levels, each consulted only on a tie at the level
//! before it:
//! 1. base letters: accents stripped, case folded
//! 2. accents: unaccented before accented
//! 3. case: lowercase before uppercase
//! 4. raw code points, so distinct strings never compare equal

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;

fn is_combining_mark(c: char) -> bool {
    ('\u{0300}'..='\u{036f}').contains(&c)
}

fn base_key(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect::<String>().to_lowercase()
}

fn accent_key(s: &str) -> String {
    s.nfd().collect::<String>().to_lowercase()
}

fn case_key(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().filter(|c| c.is_alphabetic()).map(char::is_uppercase)
}

/// Compare two strings the way a reader would expect a sorted list to look.
pub fn compare(a: &str, b: &str) -> Ordering {
    base_key(a)
        .cmp(&base_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(case_key(b)))
        .then_with(|| a.cmp(b))
}
