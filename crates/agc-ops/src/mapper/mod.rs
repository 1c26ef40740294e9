//! The four gamma mapping variants.
//!
//! Every variant is a plain parameter struct implementing [`GammaMapper`]:
//! it precomputes its context (statistics, classification, weighted CDF)
//! once per call and then rewrites the brightness channel in a single
//! pass. Parameters are immutable; nothing persists between calls.
//!
//! - [`Agc`] - classic adaptive gamma correction
//! - [`AgcIe`] - image-enhancement variant (full four-class curve)
//! - [`Agcwd`] - adaptive gamma correction with weighting distribution
//! - [`Iagcwd`] - improved AGCWD for brightness-distorted images

mod agc;
mod agcie;
mod agcwd;
mod iagcwd;

pub use agc::Agc;
pub use agcie::AgcIe;
pub use agcwd::Agcwd;
pub use iagcwd::Iagcwd;

use crate::classify::Contrast;
use crate::stats::ChannelStats;
use crate::AgcResult;
use agc_core::Channel;

/// A content-adaptive gamma mapping applied to a brightness channel.
///
/// `transform` either rewrites every sample or fails before touching any:
/// degenerate statistics (flat channel, vanishing histogram spread) abort
/// with [`AgcError::DegenerateInput`](crate::AgcError::DegenerateInput)
/// instead of writing NaN pixels.
pub trait GammaMapper {
    /// Short variant name, used for logging.
    fn name(&self) -> &'static str;

    /// Remaps the brightness channel in place.
    fn transform(&self, brightness: &mut Channel) -> AgcResult<()>;
}

/// Mapping exponent shared by [`Agc`] and [`AgcIe`].
///
/// Low contrast: `-log2(sigma)`. High contrast:
/// `exp((1 - (mean + sigma)) / 2)`. Callers must reject `sigma == 0`
/// first; `-log2(0)` is infinite.
pub(crate) fn select_gamma(stats: &ChannelStats, contrast: Contrast) -> f64 {
    match contrast {
        Contrast::Low => -stats.std_dev.log2(),
        Contrast::High => ((1.0 - (stats.mean + stats.std_dev)) / 2.0).exp(),
    }
}
