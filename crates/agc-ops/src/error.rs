//! Error types for the enhancement engine.

use thiserror::Error;

/// Error type for adaptive gamma correction operations.
#[derive(Error, Debug)]
pub enum AgcError {
    /// Channel statistics cannot drive the gamma formulas (flat or empty
    /// input). The mapper refuses to proceed rather than write NaN pixels.
    #[error("degenerate input: {0}")]
    DegenerateInput(String),

    /// A tunable is outside its sane domain (alpha, contrast threshold,
    /// brightness thresholds).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Buffer-level failure from `agc-core`.
    #[error(transparent)]
    Core(#[from] agc_core::Error),
}

/// Result type for adaptive gamma correction operations.
pub type AgcResult<T> = Result<T, AgcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_error_converts() {
        let core = agc_core::Error::channel_mismatch(3, 1);
        let err: AgcError = core.into();
        assert!(matches!(err, AgcError::Core(_)));
        assert!(err.to_string().contains("expected 3"));
    }

    #[test]
    fn test_colorspace_failure_surfaces_as_core() {
        let core = agc_core::Error::UnsupportedColorspace(agc_core::ColorSpace::Cmyk);
        let err: AgcError = core.into();
        assert!(matches!(err, AgcError::Core(_)));
        assert!(err.to_string().contains("unsupported colorspace"));
    }

    #[test]
    fn test_degenerate_message() {
        let err = AgcError::DegenerateInput("zero standard deviation".into());
        assert!(err.to_string().contains("degenerate"));
    }
}
