//! # agc-ops
//!
//! Statistics-driven adaptive gamma correction.
//!
//! Given an image's brightness channel, this crate computes global
//! statistics (mean, standard deviation, intensity histogram) and derives
//! a spatially-uniform but content-adaptive gamma mapping from them. Four
//! variants are provided, differing only in how the correction curve is
//! derived:
//!
//! - [`Agc`] - classic adaptive gamma correction
//! - [`AgcIe`] - image-enhancement variant with tunable contrast
//!   classification
//! - [`Agcwd`] - weighted-histogram variant
//! - [`Iagcwd`] - brightness-distortion-aware variant that switches
//!   parameters on a global brightness heuristic
//!
//! All four share the [`GammaMapper`] capability and plug into the
//! [`enhance`] orchestrator, which handles the brightness split/merge via
//! `agc-core`.
//!
//! # Example
//!
//! ```rust
//! use agc_core::Image;
//! use agc_ops::{enhance, Agcwd};
//!
//! let img = Image::from_rgb8(2, 2, &[
//!     10, 20, 30, 200, 180, 160,
//!     90, 80, 70, 250, 240, 230,
//! ]).unwrap();
//!
//! let enhanced = enhance(&img, &Agcwd::new()).unwrap();
//! assert_eq!(enhanced.colorspace(), img.colorspace());
//! ```
//!
//! # Determinism and failure behavior
//!
//! The engine is a pure, single-pass function of the input image and the
//! mapper parameters. A failed call never yields a partially modified
//! image: [`enhance`] works on an internal copy of the brightness plane
//! and the caller's image is untouched either way.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod classify;
pub mod mapper;
pub mod params;
pub mod pipeline;
pub mod remap;
pub mod stats;
pub mod weighting;

pub use classify::{Contrast, Exposure, ImageClass, Polarity};
pub use error::{AgcError, AgcResult};
pub use mapper::{Agc, AgcIe, Agcwd, GammaMapper, Iagcwd};
pub use params::IntensityScale;
pub use pipeline::enhance;
pub use stats::{ChannelStats, Pdf};
pub use weighting::WeightedCdf;
