// src/matching/normalize.rs
// Name canonicalization applied before any similarity comparison.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::constants::BUSINESS_SUFFIXES;

static SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    // Whole-word match only, so "co" never eats into "costa".
    let pattern = format!(r"\b(?:{})\b", BUSINESS_SUFFIXES.join("|"));
    Regex::new(&pattern).expect("suffix pattern must compile")
});

/// Canonicalize a raw organization name into a comparable form.
///
/// Lower-cases the input, replaces every character that is not alphanumeric
/// or whitespace with a space, strips the legal/business suffix words from
/// [`BUSINESS_SUFFIXES`] as whole words, collapses whitespace runs, and
/// trims. Pure and idempotent; returns an empty string when the input is
/// nothing but punctuation and suffix words.
pub fn normalize(input: &str) -> String {
    let lowered = input.to_lowercase();
    let despecialed: String = lowered
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    let stripped = SUFFIX_RE.replace_all(&despecialed, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
