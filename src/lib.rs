// src/lib.rs

//! Fuzzy-matching core for reconciling free-text business names against a
//! canonical registry of known organizations.
//!
//! The matching pipeline is a pure function chain: raw names are normalized
//! (`matching::normalize`), compared by edit distance (`matching::distance`),
//! scored into `[0.0, 1.0]` (`matching::similarity`), and ranked against a
//! candidate set with deterministic tie-breaking (`matching::rank`). The
//! `registry` module loads candidate organizations from JSON files for the
//! `reconcile` CLI; library callers can supply any record type implementing
//! [`models::matching::CandidateName`].

pub mod matching;
pub mod models;
pub mod registry;
pub mod utils;

pub use matching::distance::levenshtein;
pub use matching::normalize::normalize;
pub use matching::rank::{best_match, rank_matches};
pub use matching::similarity::similarity;
pub use models::matching::{CandidateName, MatchError, ScoredMatch};
