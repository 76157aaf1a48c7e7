//! Error type shared by every pipeline stage.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CannyError>;

/// Errors that can occur while detecting edges.
///
/// Every stage validates its own inputs and fails fast; a failure aborts the
/// whole pipeline and is returned to the caller unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CannyError {
    /// A numeric parameter is outside its accepted range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The raster is smaller than the kernel window of a stage.
    #[error("{width}x{height} image is too small for {stage}: both dimensions must be at least {required}")]
    ImageTooSmall {
        stage: &'static str,
        width: u32,
        height: u32,
        required: u32,
    },

    /// The raster has no samples.
    #[error("input image is empty ({width}x{height})")]
    EmptyInput { width: u32, height: u32 },

    /// Two rasters that must line up pixel for pixel do not.
    #[error("dimension mismatch: expected {}x{}, got {}x{}", expected.0, expected.1, actual.0, actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

impl CannyError {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
