// src/matching/similarity.rs

use crate::matching::distance::levenshtein;
use crate::matching::normalize::normalize;
use crate::utils::constants::{CONTAINMENT_SCORE, EXACT_MATCH_SCORE};

/// Score how likely two raw names refer to the same organization.
///
/// Both inputs are normalized first; equal normalized forms score
/// [`EXACT_MATCH_SCORE`], a substring relationship between two non-empty
/// forms scores [`CONTAINMENT_SCORE`], and everything else falls back to a
/// length-scaled Levenshtein score. Pure, total, and symmetric; the result
/// always lies in `[0.0, 1.0]`.
pub fn similarity(a: &str, b: &str) -> f64 {
    similarity_normalized(&normalize(a), &normalize(b))
}

/// Score two names that have already been normalized.
///
/// The ranker normalizes the raw lead name once per call and reuses it
/// across the whole candidate set; `normalize` is idempotent, so the result
/// is identical to [`similarity`] on the raw inputs.
pub fn similarity_normalized(norm_a: &str, norm_b: &str) -> f64 {
    if norm_a == norm_b {
        return EXACT_MATCH_SCORE;
    }

    if !norm_a.is_empty() && !norm_b.is_empty() && (norm_a.contains(norm_b) || norm_b.contains(norm_a))
    {
        return CONTAINMENT_SCORE;
    }

    // A name that normalized to nothing is not similar to anything.
    if norm_a.is_empty() || norm_b.is_empty() {
        return 0.0;
    }

    let distance = levenshtein(norm_a, norm_b);
    let max_len = norm_a.chars().count().max(norm_b.chars().count());
    max_len.saturating_sub(distance) as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_ceiling() {
        assert_eq!(similarity("Modern Academy", "Modern Academy"), 1.0);
        assert_eq!(similarity("Acme Widgets", "Acme Widgets"), 1.0);
        // Different raw spellings that normalize identically still hit 1.0.
        assert_eq!(similarity("Modern Academy Inc.", "modern ACADEMY ltd"), 1.0);
    }

    #[test]
    fn test_both_empty_after_normalization() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("Ltd. & Co.", "!!!"), 1.0);
    }

    #[test]
    fn test_one_side_empty_scores_zero() {
        assert_eq!(similarity("", "Acme Widgets"), 0.0);
        assert_eq!(similarity("Ltd. Inc.", "Acme Widgets"), 0.0);
    }

    #[test]
    fn test_containment_scores_exactly_point_eight() {
        assert_eq!(similarity("Modern Academy", "Modern Academy Guyana"), 0.8);
        assert_eq!(similarity("Riverside", "Riverside Clinic"), 0.8);
    }

    #[test]
    fn test_case_insensitivity() {
        assert_eq!(similarity("ABC Ltd", "abc"), similarity("abc ltd", "ABC"));
        assert_eq!(similarity("ABC Ltd", "abc"), 1.0);
    }

    #[test]
    fn test_symmetry() {
        let pairs = [
            ("Modern Academy", "Modern Academy Guyana"),
            ("Camille's Academy", "Modern Acadmy Ltd"),
            ("", "Acme"),
            ("Totally Unrelated Corp", "Georgetown International"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a), "asymmetric for {:?}/{:?}", a, b);
        }
    }

    #[test]
    fn test_edit_distance_fallback() {
        // "guyana hostel" vs "guyana hotels": distance 2 over max_len 13.
        let score = similarity_normalized("guyana hostel", "guyana hotels");
        assert!((score - 11.0 / 13.0).abs() < 1e-12);
    }

    #[test]
    fn test_scores_stay_in_unit_interval() {
        let pairs = [
            ("Totally Unrelated Corp", "Modern Academy"),
            ("x", "yyyyyyyyyyyy"),
            ("a b c", "d e f"),
        ];
        for (a, b) in pairs {
            let score = similarity(a, b);
            assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
        }
    }
}
