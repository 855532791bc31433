// src/matching/rank.rs
// Threshold filtering and deterministic ordering over a candidate set.

use log::debug;

use crate::matching::normalize::normalize;
use crate::matching::similarity::similarity_normalized;
use crate::models::matching::{CandidateName, MatchError, ScoredMatch};

/// Score every candidate against `raw_name` and return those at or above
/// `threshold`, sorted by score descending.
///
/// Ties keep the relative input order of the candidates (stable sort, no
/// secondary key). An empty candidate slice yields an empty Vec; a threshold
/// outside `[0.0, 1.0]` (NaN included) is rejected with
/// [`MatchError::InvalidThreshold`] rather than clamped.
pub fn rank_matches<'a, T: CandidateName>(
    raw_name: &str,
    candidates: &'a [T],
    threshold: f64,
) -> Result<Vec<ScoredMatch<'a, T>>, MatchError> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(MatchError::InvalidThreshold(threshold));
    }

    let normalized_raw = normalize(raw_name);

    let mut matches: Vec<ScoredMatch<'a, T>> = candidates
        .iter()
        .filter_map(|candidate| {
            let score = similarity_normalized(&normalized_raw, &normalize(candidate.name()));
            (score >= threshold).then_some(ScoredMatch { candidate, score })
        })
        .collect();

    // Stable sort: equal scores preserve candidate input order.
    matches.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!(
        "Ranked {} of {} candidates at or above threshold {} for {:?}",
        matches.len(),
        candidates.len(),
        threshold,
        raw_name
    );

    Ok(matches)
}

/// The single best match for `raw_name`, or `None` when nothing reaches the
/// threshold. "No match" is an expected outcome, distinct from `Err`.
pub fn best_match<'a, T: CandidateName>(
    raw_name: &str,
    candidates: &'a [T],
    threshold: f64,
) -> Result<Option<ScoredMatch<'a, T>>, MatchError> {
    Ok(rank_matches(raw_name, candidates, threshold)?.into_iter().next())
}
