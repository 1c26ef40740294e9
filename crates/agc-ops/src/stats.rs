//! Global channel statistics: mean, standard deviation, intensity PDF.
//!
//! Everything the gamma mappers consume is precomputed here in one pass
//! over the brightness channel. Accumulation is done in `f64`; the
//! resulting statistics are normalized to `[0, 1]` (divided by the
//! quantum maximum at import time, since samples are already normalized).

use crate::{AgcError, AgcResult};
use agc_core::Channel;
use std::collections::BTreeMap;

/// Population mean and standard deviation of a brightness channel,
/// normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelStats {
    /// Mean sample value.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
}

impl ChannelStats {
    /// Measures mean and standard deviation over all samples.
    ///
    /// # Errors
    ///
    /// [`AgcError::DegenerateInput`] for a zero-sample channel, where the
    /// standard deviation is undefined. Callers must short-circuit rather
    /// than propagate NaN into the gamma formulas.
    pub fn measure(channel: &Channel) -> AgcResult<Self> {
        let n = channel.pixel_count();
        if n == 0 {
            return Err(AgcError::DegenerateInput(
                "zero-sample channel has no defined statistics".into(),
            ));
        }
        let inv_n = 1.0 / n as f64;
        let mean: f64 = channel.samples().iter().map(|&v| v as f64).sum::<f64>() * inv_n;
        let variance: f64 = channel
            .samples()
            .iter()
            .map(|&v| {
                let d = v as f64 - mean;
                d * d
            })
            .sum::<f64>()
            * inv_n;
        Ok(Self {
            mean,
            std_dev: variance.sqrt(),
        })
    }
}

/// Discrete probability mass per observed intensity level.
///
/// Built from a one-pass histogram; levels with zero occurrences are
/// absent, iteration is ascending by level, and the masses sum to 1
/// within floating tolerance.
#[derive(Debug, Clone)]
pub struct Pdf {
    entries: BTreeMap<u32, f64>,
    l_max: u32,
    grid_levels: usize,
}

impl Pdf {
    /// Builds the PDF of a channel on the `0..=scale` level grid.
    ///
    /// # Errors
    ///
    /// [`AgcError::DegenerateInput`] for a zero-sample channel.
    pub fn from_channel(channel: &Channel, scale: f64) -> AgcResult<Self> {
        let n = channel.pixel_count();
        if n == 0 {
            return Err(AgcError::DegenerateInput(
                "cannot build a histogram over zero samples".into(),
            ));
        }
        let inv_n = 1.0 / n as f64;
        let entries: BTreeMap<u32, f64> = channel
            .level_counts(scale)
            .into_iter()
            .map(|(level, count)| (level, count as f64 * inv_n))
            .collect();
        let l_max = *entries.keys().next_back().expect("non-empty histogram");
        Ok(Self {
            entries,
            l_max,
            grid_levels: scale as usize + 1,
        })
    }

    /// Probability mass at `level`, `None` if the level never occurs.
    #[inline]
    pub fn mass(&self, level: u32) -> Option<f64> {
        self.entries.get(&level).copied()
    }

    /// Largest observed level.
    #[inline]
    pub fn l_max(&self) -> u32 {
        self.l_max
    }

    /// Number of distinct observed levels.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no levels were observed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(level, mass)` ascending by level.
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.entries.iter().map(|(&l, &p)| (l, p))
    }

    /// Smallest and largest probability mass over the full level grid.
    ///
    /// The PDF is defined over every level of the `0..=scale` grid, so
    /// the minimum is 0 whenever any grid level never occurs; only a
    /// channel covering the entire grid can have a nonzero minimum.
    pub fn mass_range(&self) -> (f64, f64) {
        let mut min = if self.entries.len() < self.grid_levels {
            0.0
        } else {
            f64::INFINITY
        };
        let mut max = f64::NEG_INFINITY;
        for &p in self.entries.values() {
            min = min.min(p);
            max = max.max(p);
        }
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agc_core::BitDepth;
    use approx::assert_relative_eq;

    #[test]
    fn test_stats_constant_channel() {
        let ch = Channel::filled(4, 4, BitDepth::Eight, 128.0 / 255.0);
        let stats = ChannelStats::measure(&ch).unwrap();
        assert_relative_eq!(stats.mean, 128.0 / 255.0, epsilon = 1e-6);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_stats_empty_channel_fails() {
        let ch = Channel::new(0, 0, BitDepth::Eight);
        assert!(matches!(
            ChannelStats::measure(&ch),
            Err(AgcError::DegenerateInput(_))
        ));
    }

    #[test]
    fn test_stats_known_values() {
        let ch = Channel::from_samples(2, 2, BitDepth::Eight, vec![0.0, 0.0, 1.0, 1.0]).unwrap();
        let stats = ChannelStats::measure(&ch).unwrap();
        assert_relative_eq!(stats.mean, 0.5);
        assert_relative_eq!(stats.std_dev, 0.5);
    }

    #[test]
    fn test_pdf_sums_to_one() {
        let levels: Vec<u8> = (0..64).map(|i| (i * 5 % 251) as u8).collect();
        let ch = Channel::from_levels_u8(8, 8, &levels).unwrap();
        let pdf = Pdf::from_channel(&ch, 255.0).unwrap();
        let total: f64 = pdf.iter().map(|(_, p)| p).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pdf_sparse_ascending() {
        let ch = Channel::from_levels_u8(2, 2, &[200, 10, 10, 90]).unwrap();
        let pdf = Pdf::from_channel(&ch, 255.0).unwrap();
        assert_eq!(pdf.len(), 3);
        assert_eq!(pdf.l_max(), 200);
        let levels: Vec<u32> = pdf.iter().map(|(l, _)| l).collect();
        assert_eq!(levels, vec![10, 90, 200]);
        assert_relative_eq!(pdf.mass(10).unwrap(), 0.5);
        assert_eq!(pdf.mass(11), None);
    }

    #[test]
    fn test_pdf_mass_range_spans_grid() {
        // Most of the 0..=255 grid is unobserved, so the minimum is 0
        // even though every observed level has positive mass.
        let ch = Channel::from_levels_u8(2, 2, &[5, 5, 5, 250]).unwrap();
        let pdf = Pdf::from_channel(&ch, 255.0).unwrap();
        let (min, max) = pdf.mass_range();
        assert_eq!(min, 0.0);
        assert_relative_eq!(max, 0.75);
    }

    #[test]
    fn test_pdf_mass_range_full_grid() {
        // Every level of a 0..=3 grid occurs, so the observed minimum
        // applies.
        let samples = vec![0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0, 1.0, 1.0];
        let ch = Channel::from_samples(3, 2, BitDepth::Eight, samples).unwrap();
        let pdf = Pdf::from_channel(&ch, 3.0).unwrap();
        let (min, max) = pdf.mass_range();
        assert_relative_eq!(min, 1.0 / 6.0);
        assert_relative_eq!(max, 0.5);
    }
}
