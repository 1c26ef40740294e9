//! Adaptive gamma correction with weighting distribution (AGCWD).
//!
//! Huang, Cheng, Chiu, "Efficient Contrast Enhancement Using Adaptive
//! Gamma Correction With Weighting Distribution", IEEE TIP 22(3), 2013.

use super::GammaMapper;
use crate::params::IntensityScale;
use crate::stats::Pdf;
use crate::weighting::WeightedCdf;
use crate::{remap, AgcResult};
use agc_core::Channel;
use tracing::debug;

/// Weighted-histogram gamma correction.
///
/// The per-level curve is `l' = lmax * (l / lmax)^(1 - cdf_w(l))` where
/// `cdf_w` is the [`WeightedCdf`] with adjusting parameter `alpha`. The
/// curve is materialized as a level-indexed lookup table and applied to
/// every pixel.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agcwd {
    /// Adjusting parameter controlling how aggressively low-probability
    /// intensities are boosted (default 0.5).
    pub alpha: f64,
    /// Level-grid normalization; see [`IntensityScale`].
    pub intensity_scale: IntensityScale,
}

impl Agcwd {
    /// Creates the mapper with alpha 0.5 and the depth-correct scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the adjusting parameter.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the intensity scale.
    pub fn with_intensity_scale(mut self, scale: IntensityScale) -> Self {
        self.intensity_scale = scale;
        self
    }
}

impl Default for Agcwd {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            intensity_scale: IntensityScale::default(),
        }
    }
}

impl GammaMapper for Agcwd {
    fn name(&self) -> &'static str {
        "agcwd"
    }

    fn transform(&self, brightness: &mut Channel) -> AgcResult<()> {
        let curve = weighted_curve(brightness, self.alpha, self.intensity_scale, None)?;
        remap::apply_curve(
            brightness,
            self.intensity_scale.level_scale(brightness.depth()),
            &curve,
        );
        Ok(())
    }
}

/// Builds the AGCWD correction curve as a level-indexed lookup table.
///
/// `exponent_floor` clamps the mapping exponent from below (the IAGCWD
/// dimmed branch uses 0.5); `None` leaves `1 - cdf_w(l)` as-is. Levels
/// that never occur in the channel keep an identity entry; they are
/// unreachable when the table is applied to the same channel.
pub(crate) fn weighted_curve(
    channel: &Channel,
    alpha: f64,
    scale: IntensityScale,
    exponent_floor: Option<f64>,
) -> AgcResult<Vec<f32>> {
    let level_scale = scale.level_scale(channel.depth());
    let divisor = scale.write_back_divisor(channel.depth());
    let pdf = Pdf::from_channel(channel, level_scale)?;
    let cdf = WeightedCdf::from_pdf(&pdf, alpha)?;
    // Single-level histograms are rejected above, so at least two levels
    // exist and l_max >= 1.
    let l_max = pdf.l_max() as f64;
    debug!(l_max, alpha, levels = pdf.len(), "agcwd curve");

    let mut curve: Vec<f32> = (0..=level_scale as u32)
        .map(|l| (l as f64 / divisor) as f32)
        .collect();
    for (level, c) in cdf.iter() {
        let mut exponent = 1.0 - c;
        if let Some(floor) = exponent_floor {
            exponent = exponent.max(floor);
        }
        let value = l_max * (level as f64 / l_max).powf(exponent);
        curve[level as usize] = (value / divisor) as f32;
    }
    Ok(curve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AgcError;
    use agc_core::BitDepth;

    #[test]
    fn test_dark_sample_darkens_bright_sample_saturates() {
        // 2x2 with levels {0, 64, 128, 255}: cdf_w(0) is near 0 so the
        // darkest sample keeps an exponent close to 1, while
        // cdf_w(255) = 1 gives exponent 0 and l' = lmax exactly.
        let mut ch = Channel::from_levels_u8(2, 2, &[0, 64, 128, 255]).unwrap();
        Agcwd::new().transform(&mut ch).unwrap();
        let out = ch.to_levels_u8();
        assert_eq!(out[0], 0, "darkest must not rise above the original 0");
        assert_eq!(out[3], 255, "brightest maps to lmax");
        assert!(out[1] >= 64, "weighted curve lifts mid-tones: {}", out[1]);
    }

    #[test]
    fn test_constant_channel_rejected() {
        let mut ch = Channel::filled(4, 4, BitDepth::Eight, 0.5);
        assert!(matches!(
            Agcwd::new().transform(&mut ch),
            Err(AgcError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_invalid_alpha_rejected() {
        let mut ch = Channel::from_levels_u8(2, 2, &[0, 0, 128, 255]).unwrap();
        assert!(matches!(
            Agcwd::new().with_alpha(0.0).transform(&mut ch),
            Err(AgcError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_output_finite_and_in_range() {
        let levels: Vec<u8> = (0..64u32).map(|i| ((i * i) % 256) as u8).collect();
        let mut ch = Channel::from_levels_u8(8, 8, &levels).unwrap();
        Agcwd::new().transform(&mut ch).unwrap();
        for &v in ch.samples() {
            assert!(v.is_finite() && (0.0..=1.0).contains(&v), "sample {v}");
        }
    }

    #[test]
    fn test_legacy_scale_differs_from_quantum_on_16bit() {
        let levels: Vec<u16> = vec![0, 300, 9000, 20000, 20000, 65535, 40000, 100];
        let a = {
            let mut ch = Channel::from_levels_u16(4, 2, &levels).unwrap();
            Agcwd::new().transform(&mut ch).unwrap();
            ch
        };
        let b = {
            let mut ch = Channel::from_levels_u16(4, 2, &levels).unwrap();
            Agcwd::new()
                .with_intensity_scale(IntensityScale::Legacy8Bit)
                .transform(&mut ch)
                .unwrap();
            ch
        };
        assert_ne!(a.samples(), b.samples());
    }

    #[test]
    fn test_legacy_scale_slightly_darker_on_8bit() {
        // Same level grid, but legacy write-back divides by 256 not 255.
        let levels = [0u8, 64, 64, 128, 128, 128, 200, 255];
        let quantum = {
            let mut ch = Channel::from_levels_u8(4, 2, &levels).unwrap();
            Agcwd::new().transform(&mut ch).unwrap();
            ch
        };
        let legacy = {
            let mut ch = Channel::from_levels_u8(4, 2, &levels).unwrap();
            Agcwd::new()
                .with_intensity_scale(IntensityScale::Legacy8Bit)
                .transform(&mut ch)
                .unwrap();
            ch
        };
        for (q, l) in quantum.samples().iter().zip(legacy.samples()) {
            assert!(l <= q, "legacy {l} should not exceed quantum {q}");
        }
    }
}
