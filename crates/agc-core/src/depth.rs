//! Quantum depth of image samples.
//!
//! Samples are stored normalized to `[0, 1]` regardless of the source
//! format; [`BitDepth`] records which discrete grid they were quantized
//! on. Histogram extraction and the level-indexed remap tables in
//! `agc-ops` use it to recover integer intensity levels.

/// Bit depth of the originating image data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitDepth {
    /// 8 bits per channel (levels 0..=255).
    #[default]
    Eight,
    /// 16 bits per channel (levels 0..=65535).
    Sixteen,
}

impl BitDepth {
    /// Number of bits per channel.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Self::Eight => 8,
            Self::Sixteen => 16,
        }
    }

    /// Maximum representable level (quantum): 255 or 65535.
    #[inline]
    pub const fn qmax(self) -> f64 {
        match self {
            Self::Eight => 255.0,
            Self::Sixteen => 65535.0,
        }
    }

    /// Number of discrete levels: 256 or 65536.
    #[inline]
    pub const fn levels(self) -> usize {
        match self {
            Self::Eight => 256,
            Self::Sixteen => 65536,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qmax() {
        assert_eq!(BitDepth::Eight.qmax(), 255.0);
        assert_eq!(BitDepth::Sixteen.qmax(), 65535.0);
    }

    #[test]
    fn test_levels() {
        assert_eq!(BitDepth::Eight.levels(), 256);
        assert_eq!(BitDepth::Sixteen.levels(), 65536);
    }

    #[test]
    fn test_default_is_eight() {
        assert_eq!(BitDepth::default(), BitDepth::Eight);
    }
}
