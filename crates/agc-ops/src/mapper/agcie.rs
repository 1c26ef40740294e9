//! Adaptive gamma correction for image enhancement (AGC-IE).
//!
//! Rahman et al., "An adaptive gamma correction for image enhancement",
//! EURASIP Journal on Image and Video Processing, 2016.

use super::{select_gamma, GammaMapper};
use crate::classify::ImageClass;
use crate::stats::ChannelStats;
use crate::{remap, AgcError, AgcResult};
use agc_core::Channel;
use tracing::debug;

/// Four-class adaptive gamma correction.
///
/// Shares the exponent selection with [`Agc`](super::Agc) but picks the
/// curve from the full contrast/polarity class. For the high-contrast
/// classes the curve is the truncated form
/// `c * l^gamma` with `k = l^gamma + (1 - l^gamma) * mean^gamma`,
/// `h = 1` for dim means and `c = 1 / (1 + h * (k - 1))`.
///
/// Applying the mapper twice compounds the gamma; it is deliberately not
/// idempotent.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgcIe {
    /// Contrast classifier threshold `r` (default 3).
    pub contrast_threshold: f64,
}

impl AgcIe {
    /// Creates the mapper with the default contrast threshold (3).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the contrast classifier threshold.
    pub fn with_contrast_threshold(mut self, r: f64) -> Self {
        self.contrast_threshold = r;
        self
    }
}

impl Default for AgcIe {
    fn default() -> Self {
        Self {
            contrast_threshold: 3.0,
        }
    }
}

impl GammaMapper for AgcIe {
    fn name(&self) -> &'static str {
        "agcie"
    }

    fn transform(&self, brightness: &mut Channel) -> AgcResult<()> {
        let stats = ChannelStats::measure(brightness)?;
        if stats.std_dev <= 0.0 {
            return Err(AgcError::DegenerateInput(
                "constant brightness channel: standard deviation is zero".into(),
            ));
        }
        let class = ImageClass::classify(&stats, self.contrast_threshold)?;
        let gamma = select_gamma(&stats, class.contrast());
        let mean_pow = stats.mean.powf(gamma);
        debug!(gamma, ?class, "agcie curve");

        match class {
            ImageClass::LcBright => {
                remap::apply_pointwise(brightness, |v| (v as f64).powf(gamma) as f32);
            }
            ImageClass::LcDim => {
                remap::apply_pointwise(brightness, |v| {
                    let lg = (v as f64).powf(gamma);
                    (lg / (lg + (1.0 - lg) * mean_pow)) as f32
                });
            }
            ImageClass::HcBright | ImageClass::HcDim => {
                let h = if (0.5 - stats.mean) <= 0.0 { 0.0 } else { 1.0 };
                remap::apply_pointwise(brightness, |v| {
                    let lg = (v as f64).powf(gamma);
                    let k = lg + (1.0 - lg) * mean_pow;
                    let c = 1.0 / (1.0 + h * (k - 1.0));
                    (c * lg) as f32
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agc_core::BitDepth;

    fn spread_channel() -> Channel {
        Channel::from_samples(
            4,
            2,
            BitDepth::Eight,
            vec![0.05, 0.15, 0.30, 0.45, 0.55, 0.70, 0.85, 0.95],
        )
        .unwrap()
    }

    #[test]
    fn test_constant_channel_rejected() {
        let mut ch = Channel::filled(4, 4, BitDepth::Eight, 0.25);
        assert!(matches!(
            AgcIe::new().transform(&mut ch),
            Err(AgcError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_not_idempotent() {
        let mut once = spread_channel();
        AgcIe::new().transform(&mut once).unwrap();
        let mut twice = once.clone();
        AgcIe::new().transform(&mut twice).unwrap();
        assert_ne!(
            once.samples(),
            twice.samples(),
            "gamma compounds; a second pass must change the data"
        );
    }

    #[test]
    fn test_output_stays_in_range() {
        let mut ch = spread_channel();
        AgcIe::new().transform(&mut ch).unwrap();
        for &v in ch.samples() {
            assert!((0.0..=1.0).contains(&v) && v.is_finite(), "sample {v}");
        }
    }

    #[test]
    fn test_hc_bright_matches_pure_power() {
        // For a bright mean h = 0, so c = 1 and the curve is l^gamma.
        let mut ch = Channel::from_samples(
            2,
            2,
            BitDepth::Eight,
            vec![0.2, 0.9, 0.95, 1.0],
        )
        .unwrap();
        let stats = ChannelStats::measure(&ch).unwrap();
        let class = ImageClass::classify(&stats, 3.0).unwrap();
        assert_eq!(class, ImageClass::HcBright);
        let gamma = select_gamma(&stats, class.contrast());

        let expected: Vec<f32> = ch
            .samples()
            .iter()
            .map(|&v| (v as f64).powf(gamma) as f32)
            .collect();
        AgcIe::new().transform(&mut ch).unwrap();
        assert_eq!(ch.samples(), &expected[..]);
    }
}
