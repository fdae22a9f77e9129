//! Heuristic mapping from profile statistics to suggested parameters

use crate::color::{Rgb, to_hsl};
use crate::io::configuration::{HUE_BIAS_DOMINANCE, HUE_BIAS_MIN_SATURATION};
use crate::math::stats::clamp01;
use crate::pipeline::params::{MotifPack, ParameterSet};

/// Aggregate statistics of a reference set, each in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProfileStatistics {
    /// Mean HSL saturation of sampled pixels
    pub mean_saturation: f64,
    /// Standard deviation of sampled saturation
    pub saturation_std: f64,
    /// Fraction of pixels classified as edges
    pub edge_density: f64,
    /// Standard deviation of normalized luminance
    pub contrast_index: f64,
}

/// Overall temperature of a palette
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HueBias {
    /// Reds, oranges, yellows and magentas dominate
    Warm,
    /// Greens, cyans and blues dominate
    Cool,
    /// Neither family clearly dominates
    Mixed,
}

impl HueBias {
    /// Motif pack that suits this temperature
    pub const fn motif_pack(self) -> MotifPack {
        match self {
            Self::Warm => MotifPack::Flames,
            Self::Cool => MotifPack::Waves,
            Self::Mixed => MotifPack::Psychedelia,
        }
    }
}

/// Classify the temperature of a palette
///
/// Only entries with saturation of at least `HUE_BIAS_MIN_SATURATION` vote.
/// Warm hues lie below 1/6 or above 5/6 of the wheel, cool hues strictly
/// between 1/3 and 2/3. One family wins when it outnumbers the other by more
/// than `HUE_BIAS_DOMINANCE` times.
pub fn classify_hue_bias(palette: &[Rgb]) -> HueBias {
    let mut warm = 0usize;
    let mut cool = 0usize;
    for hsl in palette.iter().map(|c| to_hsl(*c)) {
        if hsl.s < HUE_BIAS_MIN_SATURATION {
            continue;
        }
        if hsl.h < 1.0 / 6.0 || hsl.h > 5.0 / 6.0 {
            warm += 1;
        } else if hsl.h > 1.0 / 3.0 && hsl.h < 2.0 / 3.0 {
            cool += 1;
        }
    }

    let (warm, cool) = (warm as f64, cool as f64);
    if warm > cool * HUE_BIAS_DOMINANCE {
        HueBias::Warm
    } else if cool > warm * HUE_BIAS_DOMINANCE {
        HueBias::Cool
    } else {
        HueBias::Mixed
    }
}

/// Suggest a parameter set for images resembling the profiled references
pub fn suggest_parameters(stats: &ProfileStatistics, palette: &[Rgb]) -> ParameterSet {
    ParameterSet {
        outline_weight: clamp01(0.4 + stats.edge_density * 2.0),
        saturation_boost: clamp01(0.2 + (0.6 - stats.mean_saturation) * 0.6),
        halftone_density: clamp01(0.05 + stats.contrast_index * 0.6),
        burst_strength: clamp01(0.3 + stats.contrast_index * 0.5),
        style_intensity: clamp01(0.6 + stats.contrast_index * 0.3),
        motif_pack: classify_hue_bias(palette).motif_pack(),
        apply_palette_transfer: true,
        ..ParameterSet::default()
    }
    .clamped()
}
