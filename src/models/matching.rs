// src/models/matching.rs
// Types shared across the matching pipeline.

use thiserror::Error;

/// A candidate record the matcher can score.
///
/// The core is agnostic to everything except the display name; registries
/// attach whatever other attributes they like (id, address, contact info)
/// and get the original record back untouched when it matches.
pub trait CandidateName {
    fn name(&self) -> &str;
}

/// A candidate paired with its similarity score in `[0.0, 1.0]`.
///
/// Borrows the caller's record rather than cloning it; never mutated after
/// creation. Ordering among matches (descending by score, input order on
/// ties) is established by the ranker, not by this type.
#[derive(Debug)]
pub struct ScoredMatch<'a, T> {
    pub candidate: &'a T,
    pub score: f64,
}

// Manual impl: the candidate field is a borrow, so cloning a match must not
// require `T: Clone`.
impl<T> Clone for ScoredMatch<'_, T> {
    fn clone(&self) -> Self {
        Self {
            candidate: self.candidate,
            score: self.score,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    #[error("match threshold must lie within [0.0, 1.0], got {0}")]
    InvalidThreshold(f64),
}
