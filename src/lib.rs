//! # Canny Edge Detection
//!
//! This crate detects edges in grayscale images with the four-stage Canny
//! pipeline. The hysteresis thresholds are not supplied directly; they are
//! derived from the statistics of the gradient magnitude, so the same
//! parameters adapt to bright, dark, sharp and soft images alike.
//!
//! ## Pipeline
//!
//! 1. Gaussian smoothing ([`gaussian_blur`])
//! 2. Sobel gradients ([`sobel_gradients`]) and their magnitude, direction and
//!    statistics ([`GradientField`])
//! 3. Non-maximum suppression ([`non_maximum_suppression`])
//! 4. Double thresholding with 8-neighbor promotion ([`hysteresis`])
//!
//! Every stage only produces output where its whole window fits, so the edge
//! map is smaller than the input: `2·radius + 4` pixels in each dimension
//! (see [`output_dimensions`]).
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use image::open;
//! use canny_edge::detect;
//!
//! // High threshold two standard deviations above the mean magnitude,
//! // low threshold at half of it.
//! let image = open("example.png").unwrap().to_luma8();
//! let edges = detect(&image, 2.0, 0.5).unwrap();
//! edges.save("example_canny.png").unwrap();
//! ```
//!
//! ## Configuration
//!
//! ```rust,no_run
//! use image::open;
//! use canny_edge::{visualize_edges, BlurMode, CannyConfig, EdgeDetector};
//!
//! let image = open("example.png").unwrap().to_luma8();
//! let detector = EdgeDetector::new(
//!     CannyConfig::default()
//!         .with_blur(4, 1.4)
//!         .with_thresholds(1.5, 0.4)
//!         .with_blur_mode(BlurMode::Separable),
//! );
//!
//! let stages = detector.detect_stages(&image).unwrap();
//! println!("thresholds: {:?}", stages.thresholds);
//!
//! let overlay = visualize_edges(&image, &stages.edges, detector.border());
//! overlay.save("example_overlay.png").unwrap();
//! ```
//!
//! ## Optional Features
//!
//! ### Logger Feature
//!
//! Enable debug logging to follow the pipeline stage by stage:
//!
//! ```toml
//! [dependencies]
//! canny-edge = { version = "0.1.0", features = ["logger"] }
//! log = "0.4"
//! env_logger = "0.11"
//! ```
//!
//! ```rust,no_run
//! use image::open;
//! use canny_edge::detect;
//!
//! env_logger::init();
//!
//! let image = open("example.png").unwrap().to_luma8();
//! let edges = detect(&image, 2.0, 0.5).unwrap();
//! // With the logger feature you'll see messages like:
//! // DEBUG canny_edge::blur: blurred 640x480 -> 620x460 (VerticalOnly, radius 10, sigma 2.5)
//! // DEBUG canny_edge::hysteresis: hysteresis thresholds: high 212 low 106
//! ```

// Conditional logging macros
#[cfg(feature = "logger")]
macro_rules! debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*);
    };
}

#[cfg(not(feature = "logger"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

mod blur;
mod config;
mod detector;
mod error;
mod gradient;
mod hysteresis;
mod kernel;
mod raster;
mod sobel;
mod suppression;
mod visualize;

pub use blur::{gaussian_blur, BlurMode};
pub use config::{
    output_dimensions, CannyConfig, DEFAULT_LOW_FRACTION, DEFAULT_NUM_DEVIATIONS, DEFAULT_RADIUS,
    DEFAULT_SIGMA,
};
pub use detector::{detect, CannyStages, EdgeDetector};
pub use error::{CannyError, Result};
pub use gradient::{GradientField, MagnitudeStats, Sector};
pub use hysteresis::{hysteresis, Thresholds};
pub use kernel::GaussianKernel;
pub use raster::Raster;
pub use sobel::{
    sobel_gradients, sobel_horizontal, sobel_vertical, GradientComponents, Kernel3,
    SOBEL_HORIZONTAL, SOBEL_VERTICAL,
};
pub use suppression::{non_maximum_suppression, SuppressionAnchor};
pub use visualize::visualize_edges;
