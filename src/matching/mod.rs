// src/matching/mod.rs

pub mod distance;
pub mod normalize;
pub mod rank;
pub mod similarity;
