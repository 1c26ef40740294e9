//! Single-plane channel buffer.
//!
//! A [`Channel`] is the working surface of the enhancement engine: the
//! brightness plane extracted from an image, width x height `f32` samples
//! normalized to `[0, 1]`, plus the [`BitDepth`] tag of the source data.
//!
//! Histogram extraction ([`Channel::level_counts`]) is deliberately
//! sparse: levels with zero occurrences are absent, and iteration is
//! ascending by level, which is what the weighted-distribution math in
//! `agc-ops` expects.

use crate::{BitDepth, Error, Result};
use std::collections::BTreeMap;

/// Single-plane raster of normalized samples.
#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    data: Vec<f32>,
    width: u32,
    height: u32,
    depth: BitDepth,
}

impl Channel {
    /// Creates a channel filled with zeros.
    pub fn new(width: u32, height: u32, depth: BitDepth) -> Self {
        Self {
            data: vec![0.0; width as usize * height as usize],
            width,
            height,
            depth,
        }
    }

    /// Creates a channel from existing samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data` does not hold
    /// exactly `width * height` samples.
    pub fn from_samples(width: u32, height: u32, depth: BitDepth, data: Vec<f32>) -> Result<Self> {
        let expected = width as usize * height as usize;
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
            depth,
        })
    }

    /// Creates a channel filled with a constant sample value.
    pub fn filled(width: u32, height: u32, depth: BitDepth, value: f32) -> Self {
        Self {
            data: vec![value; width as usize * height as usize],
            width,
            height,
            depth,
        }
    }

    /// Creates an 8-bit channel from integer levels (0..=255).
    pub fn from_levels_u8(width: u32, height: u32, levels: &[u8]) -> Result<Self> {
        let data = levels.iter().map(|&l| l as f32 / 255.0).collect();
        Self::from_samples(width, height, BitDepth::Eight, data)
    }

    /// Creates a 16-bit channel from integer levels (0..=65535).
    pub fn from_levels_u16(width: u32, height: u32, levels: &[u16]) -> Result<Self> {
        let data = levels.iter().map(|&l| l as f32 / 65535.0).collect();
        Self::from_samples(width, height, BitDepth::Sixteen, data)
    }

    /// Returns the channel width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the channel height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the bit depth tag.
    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// Returns the total number of samples.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the channel has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the samples in row-major order.
    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.data
    }

    /// Returns the samples mutably.
    #[inline]
    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Returns the sample at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is out of bounds (debug builds).
    #[inline]
    pub fn sample(&self, x: u32, y: u32) -> f32 {
        debug_assert!(x < self.width && y < self.height, "sample out of bounds");
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Returns row `y` as a sample slice.
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of bounds (debug builds).
    #[inline]
    pub fn row(&self, y: u32) -> &[f32] {
        debug_assert!(y < self.height, "row out of bounds");
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Iterates over rows as sample slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        (0..self.height).map(|y| self.row(y))
    }

    /// Quantizes a normalized sample onto the `0..=scale` level grid.
    #[inline]
    pub fn quantize(sample: f32, scale: f64) -> u32 {
        (sample.clamp(0.0, 1.0) as f64 * scale).round() as u32
    }

    /// One-pass intensity histogram on the `0..=scale` level grid.
    ///
    /// Levels with zero occurrences are absent from the map; iteration is
    /// ascending by level. `scale` is usually [`BitDepth::qmax`].
    pub fn level_counts(&self, scale: f64) -> BTreeMap<u32, u64> {
        let mut counts = BTreeMap::new();
        for &v in &self.data {
            *counts.entry(Self::quantize(v, scale)).or_insert(0u64) += 1;
        }
        counts
    }

    /// Inverts every sample in place (level -> qmax - level).
    pub fn negate(&mut self) {
        for v in &mut self.data {
            *v = 1.0 - *v;
        }
    }

    /// Exports samples as 8-bit levels.
    pub fn to_levels_u8(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| Self::quantize(v, 255.0) as u8)
            .collect()
    }

    /// Exports samples as 16-bit levels.
    pub fn to_levels_u16(&self) -> Vec<u16> {
        self.data
            .iter()
            .map(|&v| Self::quantize(v, 65535.0) as u16)
            .collect()
    }
}
