//! Gradient magnitude, quantized direction and magnitude statistics.

use image::Luma;

use crate::error::{CannyError, Result};
use crate::raster::{ensure_non_empty, sample, Raster};
use crate::sobel::GradientComponents;

/// Gradient direction quantized to one of four 45° sectors.
///
/// The sector also names the pair of neighbors that non-maximum suppression
/// compares a pixel against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sector {
    /// Around 0° / 180°: left and right neighbors.
    Horizontal,
    /// Around 45° / 225°: upper-right and lower-left neighbors.
    AntiDiagonal,
    /// Around 90° / 270°: top and bottom neighbors.
    Vertical,
    /// Around 135° / 315°: upper-left and lower-right neighbors.
    Diagonal,
}

impl Sector {
    /// Quantizes an angle in degrees, normalized into `[0, 360)`.
    ///
    /// Boundaries sit at `22.5 + 45k`; an angle exactly on a boundary goes to
    /// the lower sector code.
    pub fn from_degrees(angle: f64) -> Self {
        if angle <= 22.5 || (157.5..=202.5).contains(&angle) || angle >= 337.5 {
            Self::Horizontal
        } else if (22.5..=67.5).contains(&angle) || (202.5..=247.5).contains(&angle) {
            Self::AntiDiagonal
        } else if (67.5..=112.5).contains(&angle) || (247.5..=292.5).contains(&angle) {
            Self::Vertical
        } else {
            Self::Diagonal
        }
    }

    /// Direction of the gradient `(gx, gy)`.
    pub fn from_gradient(gx: i32, gy: i32) -> Self {
        let mut angle = f64::from(gy).atan2(f64::from(gx)).to_degrees();
        if angle < 0.0 {
            angle += 360.0;
        }
        Self::from_degrees(angle)
    }

    /// Sector code in degrees: 0, 45, 90 or 135.
    pub fn degrees(self) -> u8 {
        match self {
            Self::Horizontal => 0,
            Self::AntiDiagonal => 45,
            Self::Vertical => 90,
            Self::Diagonal => 135,
        }
    }

    /// `(dx, dy)` offsets of the two neighbors along this sector.
    pub(crate) fn neighbor_offsets(self) -> [(i64, i64); 2] {
        match self {
            Self::Horizontal => [(-1, 0), (1, 0)],
            Self::AntiDiagonal => [(1, -1), (-1, 1)],
            Self::Vertical => [(0, -1), (0, 1)],
            Self::Diagonal => [(-1, -1), (1, 1)],
        }
    }
}

/// Population statistics of a magnitude raster in integer arithmetic.
///
/// Both running sums drop their fraction after every addition and both
/// divisions are integer divisions, so `mean` and `std_dev` can differ by
/// one or more from a floating-point computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MagnitudeStats {
    pub mean: i64,
    pub std_dev: i64,
}

/// Per-pixel gradient magnitude and direction of a [`GradientComponents`] pair.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientField {
    magnitude: Raster<f64>,
    directions: Vec<Sector>,
    stats: MagnitudeStats,
}

impl GradientField {
    /// Derives magnitude `sqrt(gx² + gy²)`, quantized direction and the
    /// magnitude statistics.
    ///
    /// Statistics are accumulated as described on [`MagnitudeStats`]; the
    /// standard deviation is taken around the integer mean.
    ///
    /// # Errors
    ///
    /// - [`CannyError::EmptyInput`] if the rasters have no pixels.
    /// - [`CannyError::DimensionMismatch`] if `gx` and `gy` differ in size.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use canny_edge::{sobel_gradients, GradientField, Sector};
    /// use image::{GrayImage, Luma};
    ///
    /// let image = GrayImage::from_fn(8, 8, |x, _| Luma([if x < 4 { 0 } else { 255 }]));
    /// let field = GradientField::from_components(&sobel_gradients(&image).unwrap()).unwrap();
    /// assert_eq!(field.direction(2, 3), Sector::Horizontal);
    /// assert_eq!(field.magnitude().get_pixel(2, 3)[0], 1020.0);
    /// ```
    pub fn from_components(components: &GradientComponents) -> Result<Self> {
        let GradientComponents { gx, gy } = components;
        ensure_non_empty(gx)?;
        if gx.dimensions() != gy.dimensions() {
            return Err(CannyError::DimensionMismatch {
                expected: gx.dimensions(),
                actual: gy.dimensions(),
            });
        }

        let (width, height) = gx.dimensions();
        let magnitude: Raster<f64> = Raster::from_fn(width, height, |x, y| {
            let (dx, dy) = (f64::from(sample(gx, x, y)), f64::from(sample(gy, x, y)));
            Luma([(dx * dx + dy * dy).sqrt()])
        });
        let directions = gx
            .iter()
            .zip(gy.iter())
            .map(|(&dx, &dy)| Sector::from_gradient(dx, dy))
            .collect();
        let stats = magnitude_stats(&magnitude);
        debug!(
            "gradient field {}x{}: mean {} std_dev {}",
            width, height, stats.mean, stats.std_dev
        );

        Ok(Self {
            magnitude,
            directions,
            stats,
        })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.magnitude.dimensions()
    }

    pub fn magnitude(&self) -> &Raster<f64> {
        &self.magnitude
    }

    pub(crate) fn magnitude_mut(&mut self) -> &mut Raster<f64> {
        &mut self.magnitude
    }

    /// Quantized direction at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    pub fn direction(&self, x: u32, y: u32) -> Sector {
        let (width, height) = self.dimensions();
        assert!(x < width && y < height, "({x}, {y}) outside {width}x{height}");
        self.directions[(y * width + x) as usize]
    }

    /// Direction raster holding sector codes (0, 45, 90, 135).
    pub fn direction_codes(&self) -> Raster<u8> {
        let (width, height) = self.dimensions();
        Raster::from_fn(width, height, |x, y| Luma([self.direction(x, y).degrees()]))
    }

    pub fn stats(&self) -> MagnitudeStats {
        self.stats
    }
}

fn magnitude_stats(magnitude: &Raster<f64>) -> MagnitudeStats {
    let count = i64::from(magnitude.width()) * i64::from(magnitude.height());

    // Truncate after each addition, not once at the end.
    let sum = magnitude
        .iter()
        .fold(0i64, |acc, &m| (acc as f64 + m) as i64);
    let mean = sum / count;

    let mean_f = mean as f64;
    let squares = magnitude
        .iter()
        .fold(0i64, |acc, &m| (acc as f64 + (m - mean_f) * (m - mean_f)) as i64);
    let std_dev = ((squares / count) as f64).sqrt() as i64;

    MagnitudeStats { mean, std_dev }
}
