//! Per-pixel remap execution.
//!
//! The remap is embarrassingly parallel: every output sample depends only
//! on the input sample at the same position plus globally precomputed
//! statistics or a level-indexed curve. With the default `parallel`
//! feature the work is striped over rows with Rayon; the per-row stripe
//! is also the natural cancellation granularity for callers that need it.
//! Without the feature a serial loop is used.

use agc_core::Channel;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Applies a pure sample transform to every pixel of a channel.
///
/// The closure receives the normalized input sample and returns the
/// corrected one; it must not carry mutable state.
pub fn apply_pointwise<F>(channel: &mut Channel, f: F)
where
    F: Fn(f32) -> f32 + Sync,
{
    let width = channel.width() as usize;
    if width == 0 || channel.height() == 0 {
        return;
    }
    let samples = channel.samples_mut();

    #[cfg(feature = "parallel")]
    {
        samples.par_chunks_mut(width).for_each(|row| {
            for v in row {
                *v = f(*v);
            }
        });
    }

    #[cfg(not(feature = "parallel"))]
    {
        for v in samples.iter_mut() {
            *v = f(*v);
        }
    }
}

/// Applies a level-indexed correction curve to every pixel.
///
/// Samples are quantized onto the `0..=scale` grid and replaced by
/// `curve[level]`. The curve must hold `scale + 1` entries.
pub fn apply_curve(channel: &mut Channel, scale: f64, curve: &[f32]) {
    debug_assert_eq!(curve.len(), scale as usize + 1, "curve covers the level grid");
    apply_pointwise(channel, |v| curve[Channel::quantize(v, scale) as usize]);
}
