//! Mathematical utilities shared across stages

/// Mean, standard deviation and range clamping
pub mod stats;
