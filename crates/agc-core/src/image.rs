//! Multi-channel image buffer and brightness decomposition.
//!
//! [`Image`] stores interleaved `f32` samples with a runtime
//! [`ColorSpace`] tag and a [`BitDepth`] tag. The enhancement pipeline
//! never works on the image directly; it calls [`Image::decompose`] to
//! obtain a mutable brightness [`Channel`] plus the untouched chroma
//! planes, rewrites the brightness samples, and calls
//! [`Decomposed::recombine`] to get the final image back in the original
//! colorspace.
//!
//! Grayscale images skip the HSB round trip entirely: decompose hands out
//! the sole plane and recombine returns it unchanged.

use crate::colorspace::{hsb_to_rgb, rgb_to_hsb};
use crate::{BitDepth, Channel, ColorSpace, Error, Result};

/// Interleaved multi-channel raster with colorspace and depth tags.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    data: Vec<f32>,
    width: u32,
    height: u32,
    channels: usize,
    colorspace: ColorSpace,
    depth: BitDepth,
}

impl Image {
    /// Creates an image filled with zeros.
    ///
    /// The plane count is taken from the colorspace tag.
    pub fn new(width: u32, height: u32, colorspace: ColorSpace, depth: BitDepth) -> Self {
        let channels = colorspace.channel_count();
        Self {
            data: vec![0.0; width as usize * height as usize * channels],
            width,
            height,
            channels,
            colorspace,
            depth,
        }
    }

    /// Creates an image from interleaved samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data` does not hold
    /// `width * height * channel_count` samples.
    pub fn from_data(
        width: u32,
        height: u32,
        colorspace: ColorSpace,
        depth: BitDepth,
        data: Vec<f32>,
    ) -> Result<Self> {
        let channels = colorspace.channel_count();
        let expected = width as usize * height as usize * channels;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} samples, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
            colorspace,
            depth,
        })
    }

    /// Assembles an image from separate planes.
    ///
    /// All planes must agree in size; the depth tag is taken from the
    /// first plane.
    ///
    /// # Errors
    ///
    /// [`Error::ChannelMismatch`] if the plane count does not match the
    /// colorspace, [`Error::DimensionMismatch`] if plane sizes differ.
    pub fn from_planes(planes: &[Channel], colorspace: ColorSpace) -> Result<Self> {
        let expected = colorspace.channel_count();
        if planes.len() != expected {
            return Err(Error::channel_mismatch(expected, planes.len()));
        }
        let first = &planes[0];
        for p in &planes[1..] {
            if p.dimensions() != first.dimensions() {
                return Err(Error::dimension_mismatch(first.dimensions(), p.dimensions()));
            }
        }

        let (width, height) = first.dimensions();
        let pixel_count = first.pixel_count();
        let mut data = vec![0.0f32; pixel_count * planes.len()];
        for (c, plane) in planes.iter().enumerate() {
            for (i, &v) in plane.samples().iter().enumerate() {
                data[i * planes.len() + c] = v;
            }
        }
        Ok(Self {
            data,
            width,
            height,
            channels: planes.len(),
            colorspace,
            depth: first.depth(),
        })
    }

    /// Creates an 8-bit sRGB image from interleaved RGB levels.
    pub fn from_rgb8(width: u32, height: u32, levels: &[u8]) -> Result<Self> {
        let data = levels.iter().map(|&l| l as f32 / 255.0).collect();
        Self::from_data(width, height, ColorSpace::Srgb, BitDepth::Eight, data)
    }

    /// Creates an 8-bit grayscale image from levels.
    pub fn from_gray8(width: u32, height: u32, levels: &[u8]) -> Result<Self> {
        let data = levels.iter().map(|&l| l as f32 / 255.0).collect();
        Self::from_data(width, height, ColorSpace::Gray, BitDepth::Eight, data)
    }

    /// Creates a 16-bit sRGB image from interleaved RGB levels.
    pub fn from_rgb16(width: u32, height: u32, levels: &[u16]) -> Result<Self> {
        let data = levels.iter().map(|&l| l as f32 / 65535.0).collect();
        Self::from_data(width, height, ColorSpace::Srgb, BitDepth::Sixteen, data)
    }

    /// Creates a 16-bit grayscale image from levels.
    pub fn from_gray16(width: u32, height: u32, levels: &[u16]) -> Result<Self> {
        let data = levels.iter().map(|&l| l as f32 / 65535.0).collect();
        Self::from_data(width, height, ColorSpace::Gray, BitDepth::Sixteen, data)
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the number of interleaved channels.
    #[inline]
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Returns the colorspace tag.
    #[inline]
    pub fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Returns the bit depth tag.
    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Returns the interleaved samples.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns the pixel at (x, y) as a channel slice.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds (debug builds).
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[f32] {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let offset = (y as usize * self.width as usize + x as usize) * self.channels;
        &self.data[offset..offset + self.channels]
    }

    /// Extracts plane `index` as an owned [`Channel`].
    ///
    /// Returns `None` if `index` is out of range.
    pub fn plane(&self, index: usize) -> Option<Channel> {
        if index >= self.channels {
            return None;
        }
        let samples = self
            .data
            .chunks_exact(self.channels)
            .map(|px| px[index])
            .collect();
        // Length is pixel_count by construction.
        Channel::from_samples(self.width, self.height, self.depth, samples).ok()
    }

    /// Converts to a different colorspace.
    ///
    /// Supported transforms: sRGB <-> HSB (`Undefined` sources are treated
    /// as sRGB) and the identity. Grayscale and CMYK have no conversion
    /// path here.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedColorspace`] for any other pairing.
    pub fn to_colorspace(&self, target: ColorSpace) -> Result<Self> {
        let source = match self.colorspace {
            ColorSpace::Undefined => ColorSpace::Srgb,
            cs => cs,
        };
        if source == target {
            let mut out = self.clone();
            out.colorspace = target;
            return Ok(out);
        }
        let convert: fn([f32; 3]) -> [f32; 3] = match (source, target) {
            (ColorSpace::Srgb, ColorSpace::Hsb) => rgb_to_hsb,
            (ColorSpace::Hsb, ColorSpace::Srgb) => hsb_to_rgb,
            _ => return Err(Error::UnsupportedColorspace(self.colorspace)),
        };

        let mut out = self.clone();
        out.colorspace = target;
        for px in out.data.chunks_exact_mut(3) {
            let converted = convert([px[0], px[1], px[2]]);
            px.copy_from_slice(&converted);
        }
        Ok(out)
    }

    /// Splits the image into a working brightness channel plus chroma.
    ///
    /// - Grayscale: the sole plane is the brightness channel, no chroma.
    /// - HSB: planes are used directly.
    /// - sRGB (and `Undefined`, which is coerced to sRGB): the image is
    ///   converted to HSB first.
    ///
    /// The returned brightness channel is an independent copy; the input
    /// image is never mutated.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedColorspace`] if no brightness plane can be
    /// extracted (e.g. CMYK).
    pub fn decompose(&self) -> Result<Decomposed> {
        let original = match self.colorspace {
            ColorSpace::Undefined => ColorSpace::Srgb,
            cs => cs,
        };
        match original {
            ColorSpace::Gray => Ok(Decomposed {
                brightness: self.plane(0).expect("gray image has one plane"),
                chroma: None,
                original,
            }),
            ColorSpace::Hsb | ColorSpace::Srgb => {
                let hsb = if original == ColorSpace::Hsb {
                    self.clone()
                } else {
                    self.to_colorspace(ColorSpace::Hsb)?
                };
                let hue = hsb.plane(0).expect("HSB image has three planes");
                let saturation = hsb.plane(1).expect("HSB image has three planes");
                let brightness = hsb.plane(2).expect("HSB image has three planes");
                Ok(Decomposed {
                    brightness,
                    chroma: Some(Chroma { hue, saturation }),
                    original,
                })
            }
            cs => Err(Error::UnsupportedColorspace(cs)),
        }
    }
}

/// The untouched hue and saturation planes of a decomposed color image.
#[derive(Debug, Clone)]
pub struct Chroma {
    /// Hue plane (normalized degrees / 360).
    pub hue: Channel,
    /// Saturation plane.
    pub saturation: Channel,
}

/// A brightness channel split off an image, ready for remapping.
#[derive(Debug, Clone)]
pub struct Decomposed {
    /// The working brightness channel. Mappers rewrite this in place.
    pub brightness: Channel,
    /// Hue/saturation planes, `None` for grayscale sources.
    pub chroma: Option<Chroma>,
    original: ColorSpace,
}

impl Decomposed {
    /// The colorspace the recombined image will be returned in.
    #[inline]
    pub fn original_colorspace(&self) -> ColorSpace {
        self.original
    }

    /// Reassembles the image from the (possibly transformed) brightness
    /// channel and the untouched chroma planes.
    ///
    /// Grayscale sources get the brightness channel back as-is, with no
    /// colorspace churn. Color sources are merged as HSB and converted
    /// back to the colorspace recorded at decompose time.
    pub fn recombine(&self) -> Result<Image> {
        match &self.chroma {
            None => Image::from_planes(std::slice::from_ref(&self.brightness), ColorSpace::Gray),
            Some(chroma) => {
                let hsb = Image::from_planes(
                    &[
                        chroma.hue.clone(),
                        chroma.saturation.clone(),
                        self.brightness.clone(),
                    ],
                    ColorSpace::Hsb,
                )?;
                if self.original == ColorSpace::Hsb {
                    Ok(hsb)
                } else {
                    hsb.to_colorspace(self.original)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_from_rgb8() {
        let img = Image::from_rgb8(2, 1, &[255, 0, 0, 0, 255, 0]).unwrap();
        assert_eq!(img.channels(), 3);
        assert_eq!(img.pixel(0, 0), &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_from_data_validates_length() {
        let result = Image::from_data(2, 2, ColorSpace::Srgb, BitDepth::Eight, vec![0.0; 11]);
        assert!(result.is_err());
    }

    #[test]
    fn test_plane_extraction() {
        let img = Image::from_rgb8(1, 2, &[10, 20, 30, 40, 50, 60]).unwrap();
        let green = img.plane(1).unwrap();
        assert_eq!(green.to_levels_u8(), vec![20, 50]);
        assert!(img.plane(3).is_none());
    }

    #[test]
    fn test_gray_decompose_recombine_bit_identical() {
        let img = Image::from_gray8(2, 2, &[0, 64, 128, 255]).unwrap();
        let parts = img.decompose().unwrap();
        assert!(parts.chroma.is_none());
        let back = parts.recombine().unwrap();
        assert_eq!(back.data(), img.data());
        assert_eq!(back.colorspace(), ColorSpace::Gray);
    }

    #[test]
    fn test_srgb_decompose_recombine_roundtrip() {
        let img = Image::from_rgb8(2, 1, &[200, 30, 60, 10, 90, 250]).unwrap();
        let parts = img.decompose().unwrap();
        let back = parts.recombine().unwrap();
        assert_eq!(back.colorspace(), ColorSpace::Srgb);
        for (a, b) in img.data().iter().zip(back.data()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_undefined_treated_as_srgb() {
        let data = vec![0.5f32; 2 * 2 * 3];
        let img = Image::from_data(2, 2, ColorSpace::Undefined, BitDepth::Eight, data).unwrap();
        let parts = img.decompose().unwrap();
        assert_eq!(parts.original_colorspace(), ColorSpace::Srgb);
        assert_eq!(parts.recombine().unwrap().colorspace(), ColorSpace::Srgb);
    }

    #[test]
    fn test_cmyk_not_decomposable() {
        let img = Image::new(2, 2, ColorSpace::Cmyk, BitDepth::Eight);
        let err = img.decompose().unwrap_err();
        assert!(err.is_unsupported_colorspace());
    }

    #[test]
    fn test_hsb_input_skips_conversion() {
        let data = vec![0.25f32, 0.5, 0.75, 0.1, 0.2, 0.3];
        let img = Image::from_data(2, 1, ColorSpace::Hsb, BitDepth::Eight, data.clone()).unwrap();
        let parts = img.decompose().unwrap();
        assert_eq!(parts.brightness.samples(), &[0.75, 0.3]);
        let back = parts.recombine().unwrap();
        assert_eq!(back.colorspace(), ColorSpace::Hsb);
        assert_eq!(back.data(), &data[..]);
    }

    #[test]
    fn test_from_planes_rejects_mismatched_sizes() {
        let a = Channel::new(2, 2, BitDepth::Eight);
        let b = Channel::new(2, 3, BitDepth::Eight);
        let c = Channel::new(2, 2, BitDepth::Eight);
        let err = Image::from_planes(&[a, b, c], ColorSpace::Hsb).unwrap_err();
        assert!(matches!(err, Error::DimensionMismatch { .. }));
    }

    #[test]
    fn test_from_planes_rejects_wrong_count() {
        let a = Channel::new(2, 2, BitDepth::Eight);
        let err = Image::from_planes(&[a], ColorSpace::Hsb).unwrap_err();
        assert!(matches!(err, Error::ChannelMismatch { expected: 3, got: 1 }));
    }
}
