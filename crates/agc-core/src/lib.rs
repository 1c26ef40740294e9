//! # agc-core
//!
//! Core buffer types for adaptive gamma correction pipelines.
//!
//! This crate provides the image-buffer layer the enhancement engine in
//! `agc-ops` runs on top of:
//!
//! - [`Channel`] - single-plane raster of normalized `f32` samples
//! - [`Image`] - interleaved multi-channel raster with a colorspace tag
//! - [`ColorSpace`] - runtime colorspace tags and RGB/HSB conversion
//! - [`BitDepth`] - quantum depth (8/16 bit) defining the level grid
//! - [`Error`] - shared error type for buffer operations
//!
//! ## Design
//!
//! Samples are always stored normalized to `[0, 1]`; the [`BitDepth`] tag
//! records the quantization grid an image came from (255 or 65535 levels),
//! which histogram extraction and level-indexed lookup tables rely on.
//!
//! The brightness decomposition used by every gamma-correction variant
//! lives here as [`Image::decompose`] / [`Decomposed::recombine`]:
//! grayscale images pass through untouched, color images round-trip
//! through HSB so only the brightness plane is rewritten.
//!
//! ## Crate structure
//!
//! ```text
//! agc-core (this crate)
//!    ^
//!    |
//!    +-- agc-ops   (statistics, classifiers, gamma mappers)
//!    +-- agc-tests (end-to-end scenarios)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod colorspace;
pub mod depth;
pub mod error;
pub mod image;

pub use channel::Channel;
pub use colorspace::{hsb_to_rgb, rgb_to_hsb, ColorSpace};
pub use depth::BitDepth;
pub use error::{Error, Result};
pub use image::{Chroma, Decomposed, Image};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use agc_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::channel::Channel;
    pub use crate::colorspace::{hsb_to_rgb, rgb_to_hsb, ColorSpace};
    pub use crate::depth::BitDepth;
    pub use crate::error::{Error, Result};
    pub use crate::image::{Chroma, Decomposed, Image};
}
