//! The bounded parameter set that drives one stylization pass

use crate::io::configuration::{
    EDGE_THRESHOLD_BASE, EDGE_THRESHOLD_SPAN, POSTER_LEVELS_BASE, POSTER_LEVELS_SPAN,
};
use crate::io::error::{Result, malformed_profile};
use crate::math::stats::{clamp01, clamp_range};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decorative motif family drawn over the posterized base
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotifPack {
    /// No motif layer
    #[default]
    None,
    /// Curling wave crests
    Waves,
    /// Flame tongues along the lower edge
    Flames,
    /// Spirals around the four quadrants
    Psychedelia,
}

impl fmt::Display for MotifPack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Waves => "waves",
            Self::Flames => "flames",
            Self::Psychedelia => "psychedelia",
        };
        f.write_str(name)
    }
}

impl FromStr for MotifPack {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "waves" => Ok(Self::Waves),
            "flames" => Ok(Self::Flames),
            "psychedelia" => Ok(Self::Psychedelia),
            other => Err(format!(
                "unknown motif pack '{other}' (expected none, waves, flames or psychedelia)"
            )),
        }
    }
}

/// Inclusive legal range of `outline_weight`
pub const OUTLINE_WEIGHT_RANGE: (f64, f64) = (0.3, 1.0);
/// Inclusive legal range of `saturation_boost`
pub const SATURATION_BOOST_RANGE: (f64, f64) = (0.0, 0.5);
/// Inclusive legal range of `halftone_density`
pub const HALFTONE_DENSITY_RANGE: (f64, f64) = (0.0, 0.4);

/// Configuration for `stylize`
///
/// Every field is independent. Out-of-range values are clamped by
/// [`ParameterSet::clamped`], which `stylize` applies on entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
// Each flag is an independent user toggle
#[allow(clippy::struct_excessive_bools)]
pub struct ParameterSet {
    /// Overall strength of the stylization, `[0, 1]`
    pub style_intensity: f64,
    /// Ink line weight, `[0.3, 1]`
    pub outline_weight: f64,
    /// Extra saturation before posterizing, `[0, 0.5]`
    pub saturation_boost: f64,
    /// Whether the halftone overlay is drawn
    pub halftone_enabled: bool,
    /// Halftone dot density, `[0, 0.4]`
    pub halftone_density: f64,
    /// Sunburst strength, `[0, 1]`
    pub burst_strength: f64,
    /// Motif family
    pub motif_pack: MotifPack,
    /// Leave the background transparent instead of filling it
    pub transparent_background: bool,
    /// Remap the result onto a supplied palette
    pub apply_palette_transfer: bool,
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            style_intensity: 0.7,
            outline_weight: 0.6,
            saturation_boost: 0.25,
            halftone_enabled: true,
            halftone_density: 0.15,
            burst_strength: 0.5,
            motif_pack: MotifPack::None,
            transparent_background: false,
            apply_palette_transfer: false,
        }
    }
}

impl ParameterSet {
    /// Copy with every numeric field clamped into its legal range
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            style_intensity: clamp01(self.style_intensity),
            outline_weight: clamp_range(
                self.outline_weight,
                OUTLINE_WEIGHT_RANGE.0,
                OUTLINE_WEIGHT_RANGE.1,
            ),
            saturation_boost: clamp_range(
                self.saturation_boost,
                SATURATION_BOOST_RANGE.0,
                SATURATION_BOOST_RANGE.1,
            ),
            halftone_density: clamp_range(
                self.halftone_density,
                HALFTONE_DENSITY_RANGE.0,
                HALFTONE_DENSITY_RANGE.1,
            ),
            burst_strength: clamp01(self.burst_strength),
            ..self
        }
    }

    /// Check every numeric field lies in its legal range
    ///
    /// # Errors
    ///
    /// Returns `MalformedProfile` naming the first offending field
    pub fn validate(&self) -> Result<()> {
        let checks = [
            ("styleIntensity", self.style_intensity, (0.0, 1.0)),
            ("outlineWeight", self.outline_weight, OUTLINE_WEIGHT_RANGE),
            ("saturationBoost", self.saturation_boost, SATURATION_BOOST_RANGE),
            ("halftoneDensity", self.halftone_density, HALFTONE_DENSITY_RANGE),
            ("burstStrength", self.burst_strength, (0.0, 1.0)),
        ];
        for (name, value, (lo, hi)) in checks {
            if !(lo..=hi).contains(&value) {
                return Err(malformed_profile(&format!(
                    "{name} = {value} is outside [{lo}, {hi}]"
                )));
            }
        }
        Ok(())
    }

    /// Posterization level count derived from style intensity
    pub fn poster_levels(&self) -> u32 {
        (POSTER_LEVELS_BASE + self.style_intensity * POSTER_LEVELS_SPAN).floor() as u32
    }

    /// Saturation boost actually applied by the posterizer
    pub const fn effective_saturation_boost(&self) -> f64 {
        self.saturation_boost * (0.3 + self.style_intensity * 0.7)
    }

    /// Burst strength actually drawn
    pub const fn effective_burst_strength(&self) -> f64 {
        self.burst_strength * self.style_intensity
    }

    /// Gradient threshold for the ink layer
    pub const fn edge_threshold(&self) -> f64 {
        EDGE_THRESHOLD_BASE - self.outline_weight * EDGE_THRESHOLD_SPAN
    }
}
