//! Shared tunables for the weighted-histogram variants.

use agc_core::BitDepth;

/// How intensity levels are scaled between samples and the level grid.
///
/// Historical revisions of the weighted variants were inconsistent about
/// the normalization divisor: some used the quantum maximum of the image
/// depth, others hardcoded an 8-bit 255/256 pair even for 16-bit data.
/// Rather than silently picking one, the choice is an explicit parameter
/// on [`Agcwd`](crate::Agcwd) and [`Iagcwd`](crate::Iagcwd).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IntensityScale {
    /// Quantize and renormalize by the channel's own quantum maximum
    /// (255 for 8-bit, 65535 for 16-bit). Depth-correct; the default.
    #[default]
    QuantumMax,
    /// Reproduce the historical behavior: levels on the 0..=255 grid and
    /// write-back divided by 256, regardless of depth.
    Legacy8Bit,
}

impl IntensityScale {
    /// The level grid samples are quantized onto.
    #[inline]
    pub fn level_scale(self, depth: BitDepth) -> f64 {
        match self {
            Self::QuantumMax => depth.qmax(),
            Self::Legacy8Bit => 255.0,
        }
    }

    /// The divisor used when writing corrected levels back as samples.
    #[inline]
    pub fn write_back_divisor(self, depth: BitDepth) -> f64 {
        match self {
            Self::QuantumMax => depth.qmax(),
            Self::Legacy8Bit => 256.0,
        }
    }
}
