//! Reference-set analysis: palette clustering, statistics and parameter advice

/// Statistics-to-parameters heuristic
pub mod advisor;
/// K-means palette extraction
pub mod kmeans;
/// Style profile construction and (de)serialization
pub mod profile;

pub use profile::{StyleProfile, analyze, analyze_with_rng};
