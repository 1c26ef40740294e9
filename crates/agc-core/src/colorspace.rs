//! Colorspace tags and RGB/HSB conversion.
//!
//! The enhancement pipeline only ever rewrites the brightness plane of an
//! HSB decomposition, so the conversions here are limited to what that
//! requires: sRGB to HSB and back, with grayscale passing through
//! untouched. Hue is stored normalized to `[0, 1]` (degrees / 360) so all
//! three HSB planes share the same sample range.

/// Runtime colorspace tag carried by [`Image`](crate::Image).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSpace {
    /// Colorspace not recorded; treated as sRGB when decomposing.
    #[default]
    Undefined,
    /// Single-plane grayscale.
    Gray,
    /// 3-channel sRGB.
    Srgb,
    /// 3-channel hue/saturation/brightness.
    Hsb,
    /// 4-channel CMYK. Carried as a tag only; not decomposable.
    Cmyk,
}

impl ColorSpace {
    /// Number of planes an image in this colorspace carries.
    #[inline]
    pub const fn channel_count(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Undefined | Self::Srgb | Self::Hsb => 3,
            Self::Cmyk => 4,
        }
    }

    /// Human-readable name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Gray => "gray",
            Self::Srgb => "sRGB",
            Self::Hsb => "HSB",
            Self::Cmyk => "CMYK",
        }
    }

    /// Whether a brightness plane can be extracted from this colorspace.
    #[inline]
    pub const fn is_decomposable(self) -> bool {
        !matches!(self, Self::Cmyk)
    }
}

impl std::fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Convert an RGB pixel to HSB.
///
/// All components are in `[0, 1]`; hue is normalized (degrees / 360).
/// Achromatic pixels (max == min) get hue 0.
///
/// # Example
///
/// ```
/// use agc_core::rgb_to_hsb;
///
/// let [h, s, b] = rgb_to_hsb([1.0, 0.0, 0.0]);
/// assert_eq!((h, s, b), (0.0, 1.0, 1.0)); // pure red
/// ```
#[inline]
pub fn rgb_to_hsb(rgb: [f32; 3]) -> [f32; 3] {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max > 0.0 { delta / max } else { 0.0 };

    let h = if delta <= 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    [h / 6.0, s, v]
}

/// Convert an HSB pixel to RGB.
///
/// Hue is normalized (degrees / 360); out-of-range hue wraps.
///
/// # Example
///
/// ```
/// use agc_core::hsb_to_rgb;
///
/// let rgb = hsb_to_rgb([1.0 / 3.0, 1.0, 1.0]); // 120 degrees
/// assert!((rgb[1] - 1.0).abs() < 1e-6); // pure green
/// ```
#[inline]
pub fn hsb_to_rgb(hsb: [f32; 3]) -> [f32; 3] {
    let [h, s, v] = hsb;
    let c = v * s;
    let h_prime = (h.rem_euclid(1.0)) * 6.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());

    let (r1, g1, b1) = if h_prime < 1.0 {
        (c, x, 0.0)
    } else if h_prime < 2.0 {
        (x, c, 0.0)
    } else if h_prime < 3.0 {
        (0.0, c, x)
    } else if h_prime < 4.0 {
        (0.0, x, c)
    } else if h_prime < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let m = v - c;
    [r1 + m, g1 + m, b1 + m]
}
