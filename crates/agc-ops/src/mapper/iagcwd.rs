//! Improved AGCWD for brightness-distorted images.
//!
//! Cao et al., "Contrast enhancement of brightness-distorted images by
//! improved adaptive gamma correction", Computers & Electrical
//! Engineering 66, 2018.

use super::agcwd::weighted_curve;
use super::GammaMapper;
use crate::classify::Exposure;
use crate::params::IntensityScale;
use crate::stats::ChannelStats;
use crate::{remap, AgcResult};
use agc_core::Channel;
use tracing::debug;

/// Exponent floor for the dimmed branch; keeps shadows from collapsing.
const DIMMED_EXPONENT_FLOOR: f64 = 0.5;

/// Exposure-aware AGCWD.
///
/// Classifies the channel as dimmed, normal or bright from its mean
/// intensity on the 8-bit scale, then runs a branch-specific weighted
/// correction:
///
/// - dimmed: AGCWD with `dimmed_alpha` and the mapping exponent floored
///   at 0.5;
/// - bright: negate, AGCWD with `bright_alpha`, negate back, so the
///   overexposed highlights are compressed instead of the shadows;
/// - normal: plain AGCWD with `alpha`, or the identity when
///   `use_agcwd` is false.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Iagcwd {
    /// Adjusting parameter for the normal branch (default 0.5).
    pub alpha: f64,
    /// Adjusting parameter for the bright branch (default 0.25).
    pub bright_alpha: f64,
    /// Adjusting parameter for the dimmed branch (default 0.75).
    pub dimmed_alpha: f64,
    /// Whether the normal branch corrects at all (default true).
    pub use_agcwd: bool,
    /// Exposure classifier threshold `t1` on the 8-bit scale
    /// (default 112).
    pub brightness_threshold: f64,
    /// Relative deviation band `rt` around the threshold (default 0.3).
    pub relative_band: f64,
    /// Level-grid normalization; see [`IntensityScale`].
    pub intensity_scale: IntensityScale,
}

impl Iagcwd {
    /// Creates the mapper with the published defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the normal-branch adjusting parameter.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the bright-branch adjusting parameter.
    pub fn with_bright_alpha(mut self, alpha: f64) -> Self {
        self.bright_alpha = alpha;
        self
    }

    /// Sets the dimmed-branch adjusting parameter.
    pub fn with_dimmed_alpha(mut self, alpha: f64) -> Self {
        self.dimmed_alpha = alpha;
        self
    }

    /// Enables or disables correction for normally exposed channels.
    pub fn with_use_agcwd(mut self, enabled: bool) -> Self {
        self.use_agcwd = enabled;
        self
    }

    /// Sets the exposure classifier threshold.
    pub fn with_brightness_threshold(mut self, t1: f64) -> Self {
        self.brightness_threshold = t1;
        self
    }

    /// Sets the relative deviation band.
    pub fn with_relative_band(mut self, rt: f64) -> Self {
        self.relative_band = rt;
        self
    }

    /// Sets the intensity scale.
    pub fn with_intensity_scale(mut self, scale: IntensityScale) -> Self {
        self.intensity_scale = scale;
        self
    }
}

impl Default for Iagcwd {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            bright_alpha: 0.25,
            dimmed_alpha: 0.75,
            use_agcwd: true,
            brightness_threshold: 112.0,
            relative_band: 0.3,
            intensity_scale: IntensityScale::default(),
        }
    }
}

impl GammaMapper for Iagcwd {
    fn name(&self) -> &'static str {
        "iagcwd"
    }

    fn transform(&self, brightness: &mut Channel) -> AgcResult<()> {
        let stats = ChannelStats::measure(brightness)?;
        // Exposure thresholds are defined on the 8-bit scale whatever
        // the channel depth.
        let mean_level = stats.mean * 255.0;
        let exposure =
            Exposure::classify(mean_level, self.brightness_threshold, self.relative_band)?;
        debug!(mean_level, ?exposure, "iagcwd branch");

        let level_scale = self.intensity_scale.level_scale(brightness.depth());
        match exposure {
            Exposure::Dimmed => {
                let curve = weighted_curve(
                    brightness,
                    self.dimmed_alpha,
                    self.intensity_scale,
                    Some(DIMMED_EXPONENT_FLOOR),
                )?;
                remap::apply_curve(brightness, level_scale, &curve);
            }
            Exposure::Bright => {
                // Build the curve from the negated histogram, then fold
                // the negate/remap/negate sequence into one pass over the
                // original samples. The channel stays untouched if the
                // negated histogram turns out degenerate.
                let mut negated = brightness.clone();
                negated.negate();
                let curve =
                    weighted_curve(&negated, self.bright_alpha, self.intensity_scale, None)?;
                remap::apply_pointwise(brightness, |v| {
                    1.0 - curve[Channel::quantize(1.0 - v, level_scale) as usize]
                });
            }
            Exposure::Normal => {
                if self.use_agcwd {
                    let curve =
                        weighted_curve(brightness, self.alpha, self.intensity_scale, None)?;
                    remap::apply_curve(brightness, level_scale, &curve);
                }
            }
        }
        Ok(())
    }
}
