// src/utils/constants.rs

/// Score assigned when two names are identical after normalization.
pub const EXACT_MATCH_SCORE: f64 = 1.0;

/// Score assigned when one normalized name contains the other as a substring.
/// Deliberately ranks below an exact match but above typical edit-distance
/// scores for partial overlaps ("Modern Academy" vs. "Modern Academy Guyana").
pub const CONTAINMENT_SCORE: f64 = 0.8;

/// Default minimum similarity score for a candidate to count as a match.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.3;

/// Legal/business suffix words stripped from names during normalization.
/// Matched as whole words only, after punctuation has been replaced by spaces.
pub const BUSINESS_SUFFIXES: [&str; 13] = [
    "ltd",
    "llc",
    "inc",
    "incorporated",
    "corp",
    "corporation",
    "co",
    "company",
    "spa",
    "training",
    "centre",
    "center",
    "academy",
];
