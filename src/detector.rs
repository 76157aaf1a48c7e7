//! The full detection pipeline.

use image::GrayImage;

use crate::blur::gaussian_blur;
use crate::config::CannyConfig;
use crate::error::Result;
use crate::gradient::GradientField;
use crate::hysteresis::{hysteresis, Thresholds};
use crate::kernel::GaussianKernel;
use crate::raster::{ensure_non_empty, ensure_window_fits};
use crate::sobel::{sobel_gradients, GradientComponents};
use crate::suppression::non_maximum_suppression;

/// Every intermediate result of one detection run.
///
/// Each stage writes its own field exactly once; only `field` is modified
/// after creation, by non-maximum suppression, before `edges` is derived
/// from it.
#[derive(Debug, Clone, PartialEq)]
pub struct CannyStages {
    /// Smoothed input, `radius` pixels smaller on each side.
    pub blurred: GrayImage,
    /// Sobel responses of `blurred`.
    pub gradients: GradientComponents,
    /// Magnitude after suppression, directions and pre-suppression statistics.
    pub field: GradientField,
    pub thresholds: Thresholds,
    /// Binary edge map: 255 for edges, 0 elsewhere.
    pub edges: GrayImage,
}

/// Canny edge detector with statistically derived thresholds.
///
/// # Examples
///
/// ```rust
/// use canny_edge::{CannyConfig, EdgeDetector};
/// use image::{GrayImage, Luma};
///
/// let image = GrayImage::from_fn(40, 40, |x, _| Luma([if x < 20 { 10 } else { 200 }]));
/// let detector = EdgeDetector::new(CannyConfig::default().with_blur(3, 1.0));
/// let edges = detector.detect(&image).unwrap();
/// assert_eq!(edges.dimensions(), (30, 30));
/// assert!(edges.pixels().any(|p| p[0] == 255));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EdgeDetector {
    config: CannyConfig,
}

impl EdgeDetector {
    pub fn new(config: CannyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CannyConfig {
        &self.config
    }

    /// Offset of edge-map pixel `(0, 0)` inside the input image.
    pub fn border(&self) -> u32 {
        self.config.border()
    }

    /// Runs the pipeline and returns the binary edge map.
    ///
    /// The map is `2·radius + 4` pixels narrower and shorter than `image`.
    ///
    /// # Errors
    ///
    /// - [`CannyError::InvalidParameter`](crate::CannyError::InvalidParameter) if the
    ///   configuration is out of range; checked before any stage runs.
    /// - [`CannyError::EmptyInput`](crate::CannyError::EmptyInput) for an image without pixels.
    /// - [`CannyError::ImageTooSmall`](crate::CannyError::ImageTooSmall) if a stage's window
    ///   does not fit.
    pub fn detect(&self, image: &GrayImage) -> Result<GrayImage> {
        self.detect_stages(image).map(|stages| stages.edges)
    }

    /// Runs the pipeline and keeps every intermediate result.
    ///
    /// # Errors
    ///
    /// Same as [`detect`](Self::detect).
    pub fn detect_stages(&self, image: &GrayImage) -> Result<CannyStages> {
        let config = &self.config;
        config.validate()?;
        ensure_non_empty(image)?;
        debug!(
            "start canny on {}x{} image: {:?}",
            image.width(),
            image.height(),
            config
        );

        // Size check first: the kernel allocates one weight per tap.
        ensure_window_fits(image, "gaussian blur", GaussianKernel::window(config.radius))?;
        let kernel = GaussianKernel::new(config.radius, config.sigma)?;
        let blurred = gaussian_blur(image, &kernel, config.blur_mode)?;
        let gradients = sobel_gradients(&blurred)?;
        let mut field = GradientField::from_components(&gradients)?;
        let thresholds =
            Thresholds::from_stats(field.stats(), config.num_deviations, config.low_fraction)?;
        non_maximum_suppression(&mut field, config.suppression_anchor);
        let edges = hysteresis(field.magnitude(), &thresholds)?;

        debug!("canny done: {}x{} edge map", edges.width(), edges.height());
        Ok(CannyStages {
            blurred,
            gradients,
            field,
            thresholds,
            edges,
        })
    }
}

/// Detects edges with the default blur (`radius` 10, `sigma` 2.5).
///
/// # Arguments
///
/// * `image` - Grayscale input, at least 25x25
/// * `num_deviations` - Standard deviations above the mean gradient magnitude
///   at which the high threshold sits (> 0)
/// * `low_fraction` - Low threshold as a fraction of the high one, in `(0, 1)`
///
/// # Errors
///
/// See [`EdgeDetector::detect`].
///
/// # Examples
///
/// ```rust,no_run
/// use image::open;
/// use canny_edge::detect;
///
/// let image = open("input.png").unwrap().to_luma8();
/// let edges = detect(&image, 2.0, 0.5).unwrap();
/// edges.save("input_canny.png").unwrap();
/// ```
pub fn detect(image: &GrayImage, num_deviations: f64, low_fraction: f64) -> Result<GrayImage> {
    let config = CannyConfig::default().with_thresholds(num_deviations, low_fraction);
    EdgeDetector::new(config).detect(image)
}
