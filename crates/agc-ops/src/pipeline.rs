//! Enhancement orchestrator.

use crate::mapper::GammaMapper;
use crate::AgcResult;
use agc_core::Image;
use tracing::{debug, trace};

/// Runs a gamma mapper over an image's brightness channel.
///
/// Decomposes the image into brightness plus chroma, remaps the
/// brightness with `mapper` and recombines in the original colorspace.
/// Chroma planes pass through untouched, so hue and saturation are
/// preserved exactly (up to the sRGB round trip for RGB inputs).
///
/// The input image is never mutated; on any error the caller still holds
/// the unmodified original.
///
/// # Errors
///
/// - [`AgcError::Core`](crate::AgcError::Core) if the image cannot be
///   decomposed (CMYK) or reassembled.
/// - [`AgcError::DegenerateInput`](crate::AgcError::DegenerateInput) or
///   [`AgcError::InvalidParameter`](crate::AgcError::InvalidParameter)
///   surfaced from the mapper.
pub fn enhance<M>(image: &Image, mapper: &M) -> AgcResult<Image>
where
    M: GammaMapper + ?Sized,
{
    trace!(
        width = image.width(),
        height = image.height(),
        colorspace = %image.colorspace(),
        mapper = mapper.name(),
        "enhance"
    );
    let mut parts = image.decompose()?;
    mapper.transform(&mut parts.brightness)?;
    let out = parts.recombine()?;
    debug!(mapper = mapper.name(), "enhance done");
    Ok(out)
}
