//! Detector parameters.

use crate::blur::BlurMode;
use crate::error::{CannyError, Result};
use crate::hysteresis::{validate_low_fraction, validate_num_deviations};
use crate::suppression::SuppressionAnchor;

/// Blur radius used when no configuration is given.
pub const DEFAULT_RADIUS: u32 = 10;
/// Gaussian spread used when no configuration is given.
pub const DEFAULT_SIGMA: f64 = 2.5;
/// Standard deviations above the mean magnitude for the high threshold.
pub const DEFAULT_NUM_DEVIATIONS: f64 = 2.0;
/// Low threshold as a fraction of the high threshold.
pub const DEFAULT_LOW_FRACTION: f64 = 0.5;

/// Parameters of an [`EdgeDetector`](crate::EdgeDetector).
///
/// # Examples
///
/// ```rust
/// use canny_edge::{BlurMode, CannyConfig};
///
/// let config = CannyConfig::default()
///     .with_blur(3, 1.2)
///     .with_thresholds(1.5, 0.4)
///     .with_blur_mode(BlurMode::Separable);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CannyConfig {
    /// Half-width of the Gaussian window.
    pub radius: u32,
    /// Spread (σ) of the Gaussian.
    pub sigma: f64,
    /// High threshold = mean + `num_deviations` · standard deviation.
    pub num_deviations: f64,
    /// Low threshold = high threshold · `low_fraction`.
    pub low_fraction: f64,
    pub blur_mode: BlurMode,
    pub suppression_anchor: SuppressionAnchor,
}

impl Default for CannyConfig {
    fn default() -> Self {
        Self {
            radius: DEFAULT_RADIUS,
            sigma: DEFAULT_SIGMA,
            num_deviations: DEFAULT_NUM_DEVIATIONS,
            low_fraction: DEFAULT_LOW_FRACTION,
            blur_mode: BlurMode::default(),
            suppression_anchor: SuppressionAnchor::default(),
        }
    }
}

impl CannyConfig {
    #[must_use]
    pub fn with_blur(mut self, radius: u32, sigma: f64) -> Self {
        self.radius = radius;
        self.sigma = sigma;
        self
    }

    #[must_use]
    pub fn with_thresholds(mut self, num_deviations: f64, low_fraction: f64) -> Self {
        self.num_deviations = num_deviations;
        self.low_fraction = low_fraction;
        self
    }

    #[must_use]
    pub fn with_blur_mode(mut self, blur_mode: BlurMode) -> Self {
        self.blur_mode = blur_mode;
        self
    }

    #[must_use]
    pub fn with_suppression_anchor(mut self, anchor: SuppressionAnchor) -> Self {
        self.suppression_anchor = anchor;
        self
    }

    /// Checks every numeric parameter.
    ///
    /// # Errors
    ///
    /// Returns [`CannyError::InvalidParameter`] naming the first parameter out
    /// of range.
    pub fn validate(&self) -> Result<()> {
        if self.radius == 0 {
            return Err(CannyError::invalid(
                "radius",
                f64::from(self.radius),
                "must be greater than 0",
            ));
        }
        if !(self.sigma.is_finite() && self.sigma > 0.0) {
            return Err(CannyError::invalid(
                "sigma",
                self.sigma,
                "must be a positive finite number",
            ));
        }
        validate_num_deviations(self.num_deviations)?;
        validate_low_fraction(self.low_fraction)
    }

    /// Pixels lost on each side of the input: the blur radius, one for the
    /// Sobel window and one for the hysteresis neighborhood.
    pub fn border(&self) -> u32 {
        self.radius.saturating_add(2)
    }
}

/// Size of the edge map produced for a `width × height` input and blur
/// `radius`, or `None` when the input is too small for the pipeline.
///
/// # Examples
///
/// ```rust
/// use canny_edge::output_dimensions;
///
/// assert_eq!(output_dimensions(640, 480, 10), Some((616, 456)));
/// assert_eq!(output_dimensions(24, 100, 10), None);
/// ```
pub fn output_dimensions(width: u32, height: u32, radius: u32) -> Option<(u32, u32)> {
    let shrink = radius.checked_mul(2)?.checked_add(4)?;
    let w = width.checked_sub(shrink)?;
    let h = height.checked_sub(shrink)?;
    (w > 0 && h > 0).then_some((w, h))
}
