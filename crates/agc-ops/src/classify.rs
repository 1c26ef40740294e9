//! Qualitative image classification from channel statistics.
//!
//! Two independent heuristics live here:
//!
//! - contrast/polarity classes used by the purely statistical variants
//!   ([`Agc`](crate::Agc), [`AgcIe`](crate::AgcIe)), derived from mean and
//!   standard deviation with a tunable contrast threshold `r`;
//! - the global brightness-distortion classes used by
//!   [`Iagcwd`](crate::Iagcwd), derived from the mean intensity on the
//!   8-bit scale with thresholds `t1` and `rt`.

use crate::stats::ChannelStats;
use crate::{AgcError, AgcResult};

/// Contrast classification: low iff `4 * sigma <= 1 / r`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contrast {
    /// Narrow intensity spread.
    Low,
    /// Wide intensity spread.
    High,
}

/// Brightness polarity: bright iff `mean >= 0.5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Mean at or above mid-gray.
    Bright,
    /// Mean below mid-gray.
    Dim,
}

/// Combined contrast + polarity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageClass {
    /// Low contrast, bright.
    LcBright,
    /// Low contrast, dim.
    LcDim,
    /// High contrast, bright.
    HcBright,
    /// High contrast, dim.
    HcDim,
}

impl ImageClass {
    /// Classifies a channel from its statistics.
    ///
    /// # Errors
    ///
    /// [`AgcError::InvalidParameter`] if the contrast threshold `r` is
    /// not a positive finite number.
    pub fn classify(stats: &ChannelStats, r: f64) -> AgcResult<Self> {
        if !r.is_finite() || r <= 0.0 {
            return Err(AgcError::InvalidParameter(format!(
                "contrast threshold must be a positive finite number, got {r}"
            )));
        }
        let contrast = if 4.0 * stats.std_dev <= 1.0 / r {
            Contrast::Low
        } else {
            Contrast::High
        };
        let polarity = if stats.mean >= 0.5 {
            Polarity::Bright
        } else {
            Polarity::Dim
        };
        Ok(match (contrast, polarity) {
            (Contrast::Low, Polarity::Bright) => Self::LcBright,
            (Contrast::Low, Polarity::Dim) => Self::LcDim,
            (Contrast::High, Polarity::Bright) => Self::HcBright,
            (Contrast::High, Polarity::Dim) => Self::HcDim,
        })
    }

    /// The contrast component of the class.
    #[inline]
    pub fn contrast(self) -> Contrast {
        match self {
            Self::LcBright | Self::LcDim => Contrast::Low,
            Self::HcBright | Self::HcDim => Contrast::High,
        }
    }

    /// The polarity component of the class.
    #[inline]
    pub fn polarity(self) -> Polarity {
        match self {
            Self::LcBright | Self::HcBright => Polarity::Bright,
            Self::LcDim | Self::HcDim => Polarity::Dim,
        }
    }
}

/// Global brightness-distortion class (IAGCWD).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exposure {
    /// Globally underexposed.
    Dimmed,
    /// Neither branch triggered.
    Normal,
    /// Globally overexposed.
    Bright,
}

impl Exposure {
    /// Classifies from the mean intensity on the 8-bit scale.
    ///
    /// `t = (mean_level - t1) / t1`; dimmed if `t < -rt`, bright if
    /// `t > rt`, normal otherwise. Defaults are `t1 = 112`, `rt = 0.3`.
    ///
    /// # Errors
    ///
    /// [`AgcError::InvalidParameter`] if `t1` is not positive finite or
    /// `rt` is negative or non-finite.
    pub fn classify(mean_level: f64, t1: f64, rt: f64) -> AgcResult<Self> {
        if !t1.is_finite() || t1 <= 0.0 {
            return Err(AgcError::InvalidParameter(format!(
                "brightness threshold must be a positive finite number, got {t1}"
            )));
        }
        if !rt.is_finite() || rt < 0.0 {
            return Err(AgcError::InvalidParameter(format!(
                "relative deviation band must be a non-negative finite number, got {rt}"
            )));
        }
        let t = (mean_level - t1) / t1;
        Ok(if t < -rt {
            Self::Dimmed
        } else if t > rt {
            Self::Bright
        } else {
            Self::Normal
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(mean: f64, std_dev: f64) -> ChannelStats {
        ChannelStats { mean, std_dev }
    }

    #[test]
    fn test_contrast_boundary() {
        // r = 3: low contrast iff 4*sigma <= 1/3.
        let low = ImageClass::classify(&stats(0.6, 1.0 / 12.0), 3.0).unwrap();
        assert_eq!(low.contrast(), Contrast::Low);
        let high = ImageClass::classify(&stats(0.6, 0.1), 3.0).unwrap();
        assert_eq!(high.contrast(), Contrast::High);
    }

    #[test]
    fn test_polarity_boundary() {
        assert_eq!(
            ImageClass::classify(&stats(0.5, 0.2), 3.0).unwrap().polarity(),
            Polarity::Bright
        );
        assert_eq!(
            ImageClass::classify(&stats(0.49, 0.2), 3.0).unwrap().polarity(),
            Polarity::Dim
        );
    }

    #[test]
    fn test_all_four_classes() {
        assert_eq!(ImageClass::classify(&stats(0.7, 0.01), 3.0).unwrap(), ImageClass::LcBright);
        assert_eq!(ImageClass::classify(&stats(0.3, 0.01), 3.0).unwrap(), ImageClass::LcDim);
        assert_eq!(ImageClass::classify(&stats(0.7, 0.3), 3.0).unwrap(), ImageClass::HcBright);
        assert_eq!(ImageClass::classify(&stats(0.3, 0.3), 3.0).unwrap(), ImageClass::HcDim);
    }

    #[test]
    fn test_contrast_threshold_validation() {
        for bad in [0.0, -3.0, f64::NAN] {
            assert!(ImageClass::classify(&stats(0.5, 0.1), bad).is_err());
        }
    }

    #[test]
    fn test_exposure_classes() {
        // t = (200 - 112) / 112 ~ 0.786 > 0.3 -> bright.
        assert_eq!(Exposure::classify(200.0, 112.0, 0.3).unwrap(), Exposure::Bright);
        // t = (60 - 112) / 112 ~ -0.46 < -0.3 -> dimmed.
        assert_eq!(Exposure::classify(60.0, 112.0, 0.3).unwrap(), Exposure::Dimmed);
        assert_eq!(Exposure::classify(112.0, 112.0, 0.3).unwrap(), Exposure::Normal);
    }

    #[test]
    fn test_exposure_validation() {
        assert!(Exposure::classify(100.0, 0.0, 0.3).is_err());
        assert!(Exposure::classify(100.0, 112.0, -0.1).is_err());
        assert!(Exposure::classify(100.0, f64::NAN, 0.3).is_err());
    }
}
