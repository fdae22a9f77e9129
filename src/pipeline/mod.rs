//! Stylization entry point and its parameters

/// Stage sequencing and compositing
pub mod composite;
/// Parameter set and motif selection
pub mod params;

pub use composite::{stylize, stylize_with_rng};
pub use params::{MotifPack, ParameterSet};
