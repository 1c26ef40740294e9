//! Classic adaptive gamma correction.

use super::{select_gamma, GammaMapper};
use crate::classify::{ImageClass, Polarity};
use crate::stats::ChannelStats;
use crate::{remap, AgcError, AgcResult};
use agc_core::Channel;
use tracing::debug;

/// Classic statistics-driven gamma correction.
///
/// The mapping exponent is chosen from the contrast class and the curve
/// from the brightness polarity alone: bright channels get a pure power
/// law `l^gamma`, dim channels the logistic form
/// `l^gamma / (l^gamma + (1 - l^gamma) * mean^gamma)`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agc {
    /// Contrast classifier threshold `r`: the channel counts as low
    /// contrast iff `4 * sigma <= 1 / r`.
    pub contrast_threshold: f64,
}

impl Agc {
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

impl Default for Agc {
    fn default() -> Self {
        Self {
            contrast_threshold: 3.0,
        }
    }
}

impl GammaMapper for Agc {
    fn name(&self) -> &'static str {
        "agc"
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
        debug!(gamma, ?class, "agc curve");

        match class.polarity() {
            Polarity::Bright => {
                remap::apply_pointwise(brightness, |v| (v as f64).powf(gamma) as f32);
            }
            Polarity::Dim => {
                let mean_pow = stats.mean.powf(gamma);
                remap::apply_pointwise(brightness, |v| {
                    let lg = (v as f64).powf(gamma);
                    (lg / (lg + (1.0 - lg) * mean_pow)) as f32
                });
            }
        }
        Ok(())
    }
}
