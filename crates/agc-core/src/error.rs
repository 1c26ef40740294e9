//! Error types for agc-core buffer operations.
//!
//! The [`Error`] enum covers the failure modes of buffer construction,
//! plane extraction/merging, and colorspace transforms. Enhancement-level
//! failures (degenerate statistics, bad tunables) live in `agc-ops`.

use crate::colorspace::ColorSpace;
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during buffer and colorspace operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Buffer length does not match the declared dimensions.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Declared width.
        width: u32,
        /// Declared height.
        height: u32,
        /// Reason why dimensions are invalid.
        reason: String,
    },

    /// Planes or images that must agree in size do not.
    #[error("dimension mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        /// First width.
        a_width: u32,
        /// First height.
        a_height: u32,
        /// Second width.
        b_width: u32,
        /// Second height.
        b_height: u32,
    },

    /// Plane count does not match what the colorspace requires.
    #[error("channel mismatch: expected {expected}, got {got}")]
    ChannelMismatch {
        /// Expected plane count.
        expected: usize,
        /// Actual plane count.
        got: usize,
    },

    /// Colorspace cannot be decomposed into brightness + chroma.
    #[error("unsupported colorspace: {0}")]
    UnsupportedColorspace(ColorSpace),
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::DimensionMismatch`] error.
    #[inline]
    pub fn dimension_mismatch(a: (u32, u32), b: (u32, u32)) -> Self {
        Self::DimensionMismatch {
            a_width: a.0,
            a_height: a.1,
            b_width: b.0,
            b_height: b.1,
        }
    }

    /// Creates an [`Error::ChannelMismatch`] error.
    #[inline]
    pub fn channel_mismatch(expected: usize, got: usize) -> Self {
        Self::ChannelMismatch { expected, got }
    }

    /// Returns `true` if this is a colorspace support error.
    #[inline]
    pub fn is_unsupported_colorspace(&self) -> bool {
        matches!(self, Self::UnsupportedColorspace(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message() {
        let err = Error::invalid_dimensions(10, 20, "expected 200 samples, got 100");
        let msg = err.to_string();
        assert!(msg.contains("10x20"));
        assert!(msg.contains("200"));
    }

    #[test]
    fn test_dimension_mismatch_message() {
        let err = Error::dimension_mismatch((100, 100), (50, 50));
        let msg = err.to_string();
        assert!(msg.contains("100x100"));
        assert!(msg.contains("50x50"));
    }

    #[test]
    fn test_unsupported_colorspace() {
        let err = Error::UnsupportedColorspace(ColorSpace::Cmyk);
        assert!(err.is_unsupported_colorspace());
        assert!(err.to_string().contains("CMYK"));
    }
}
