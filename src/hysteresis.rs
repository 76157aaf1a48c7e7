//! Double-threshold classification with 8-neighbor promotion.

use image::{GrayImage, Luma};
use imageproc::definitions::{HasBlack, HasWhite};

use crate::error::{CannyError, Result};
use crate::gradient::MagnitudeStats;
use crate::raster::{ensure_window_fits, sample, Raster};

/// High and low hysteresis thresholds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Magnitudes at or above this are edges.
    pub high: f64,
    /// Magnitudes below this are never edges. Always a whole number.
    pub low: f64,
}

impl Thresholds {
    /// Derives thresholds from magnitude statistics.
    ///
    /// `high = mean + num_deviations · std_dev`, `low = high · low_fraction`
    /// truncated toward zero. With a whole `num_deviations` both thresholds are
    /// integers.
    ///
    /// # Errors
    ///
    /// Returns [`CannyError::InvalidParameter`] if `num_deviations` is not a
    /// positive finite number or `low_fraction` is outside `(0, 1)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use canny_edge::{MagnitudeStats, Thresholds};
    ///
    /// let stats = MagnitudeStats { mean: 40, std_dev: 25 };
    /// let t = Thresholds::from_stats(stats, 2.0, 0.5).unwrap();
    /// assert_eq!(t.high, 90.0);
    /// assert_eq!(t.low, 45.0);
    /// ```
    pub fn from_stats(stats: MagnitudeStats, num_deviations: f64, low_fraction: f64) -> Result<Self> {
        validate_num_deviations(num_deviations)?;
        validate_low_fraction(low_fraction)?;

        let high = stats.mean as f64 + num_deviations * stats.std_dev as f64;
        let low = (high * low_fraction).trunc();
        debug!("hysteresis thresholds: high {} low {}", high, low);
        Ok(Self { high, low })
    }
}

pub(crate) fn validate_num_deviations(num_deviations: f64) -> Result<()> {
    if num_deviations.is_finite() && num_deviations > 0.0 {
        Ok(())
    } else {
        Err(CannyError::invalid(
            "num_deviations",
            num_deviations,
            "must be a positive finite number",
        ))
    }
}

pub(crate) fn validate_low_fraction(low_fraction: f64) -> Result<()> {
    if low_fraction > 0.0 && low_fraction < 1.0 {
        Ok(())
    } else {
        Err(CannyError::invalid(
            "low_fraction",
            low_fraction,
            "must lie strictly between 0 and 1",
        ))
    }
}

/// Classifies every interior magnitude pixel as edge (255) or non-edge (0).
///
/// - at or above `high`: edge
/// - below `low`: non-edge
/// - otherwise: edge only if some pixel of its 3x3 neighborhood is at or
///   above `high`
///
/// Promotion is a single pass over direct neighbors, not a flood fill. The
/// one-pixel border has no full neighborhood and is dropped, so the result is
/// `(width − 2) × (height − 2)`.
///
/// # Errors
///
/// Fails if the raster is empty or smaller than 3x3.
pub fn hysteresis(magnitude: &Raster<f64>, thresholds: &Thresholds) -> Result<GrayImage> {
    ensure_window_fits(magnitude, "hysteresis", 3)?;

    let Thresholds { high, low } = *thresholds;
    let edge = Luma::<u8>::white();
    let background = Luma::<u8>::black();
    let strong = |x: u32, y: u32| sample(magnitude, x, y) >= high;

    let (width, height) = (magnitude.width() - 2, magnitude.height() - 2);
    let out = GrayImage::from_fn(width, height, |ox, oy| {
        // Output (0, 0) is magnitude (1, 1)
        let (x, y) = (ox + 1, oy + 1);
        let value = sample(magnitude, x, y);
        if value >= high {
            edge
        } else if value < low {
            background
        } else if (y - 1..=y + 1).any(|ny| (x - 1..=x + 1).any(|nx| strong(nx, ny))) {
            // Only strong neighbors count; a promoted weak pixel does not
            // promote others.
            edge
        } else {
            background
        }
    });

    debug!(
        "hysteresis {}x{}: {} edge pixels",
        width,
        height,
        out.pixels().filter(|p| p[0] == 255).count()
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::raster_from_rows;

    fn thresholds(high: f64, low: f64) -> Thresholds {
        Thresholds { high, low }
    }

    #[test]
    fn thresholds_follow_the_formula() {
        let t = Thresholds::from_stats(
            MagnitudeStats {
                mean: 12,
                std_dev: 7,
            },
            1.5,
            0.4,
        )
        .unwrap();
        assert_eq!(t.high, 22.5);
        assert_eq!(t.low, 9.0);
    }

    #[test]
    fn low_threshold_is_truncated() {
        let stats = MagnitudeStats {
            mean: 7,
            std_dev: 4,
        };
        // high 15, 15 · 0.3 = 4.5 -> 4
        let t = Thresholds::from_stats(stats, 2.0, 0.3).unwrap();
        assert_eq!(t, thresholds(15.0, 4.0));

        // A magnitude of 4 sits between the two and is promoted by a strong neighbor.
        let magnitude = raster_from_rows(&[
            vec![0.0, 0.0, 0.0, 0.0],
            vec![0.0, 4.0, 15.0, 0.0],
            vec![0.0, 0.0, 0.0, 0.0],
        ])
        .unwrap();
        let out = hysteresis(&magnitude, &t).unwrap();
        assert_eq!(out.get_pixel(0, 0)[0], 255);
    }

    #[test]
    fn zero_stats_give_zero_thresholds() {
        let t = Thresholds::from_stats(MagnitudeStats::default(), 3.0, 0.25).unwrap();
        assert_eq!(t, thresholds(0.0, 0.0));
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let stats = MagnitudeStats::default();
        for fraction in [0.0, 1.0, -0.2, 1.7, f64::NAN] {
            assert!(matches!(
                Thresholds::from_stats(stats, 2.0, fraction),
                Err(CannyError::InvalidParameter {
                    name: "low_fraction",
                    ..
                })
            ));
        }
        for deviations in [0.0, -1.0, f64::INFINITY] {
            assert!(matches!(
                Thresholds::from_stats(stats, deviations, 0.5),
                Err(CannyError::InvalidParameter {
                    name: "num_deviations",
                    ..
                })
            ));
        }
    }

    #[test]
    fn classifies_strong_weak_and_background() {
        let magnitude = raster_from_rows(&[
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            vec![0.0, 10.0, 6.0, 0.0, 6.0, 0.0],
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 4.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
        ])
        .unwrap();
        let out = hysteresis(&magnitude, &thresholds(10.0, 5.0)).unwrap();
        assert_eq!(out.dimensions(), (4, 3));
        // strong
        assert_eq!(out.get_pixel(0, 0)[0], 255);
        // weak next to strong
        assert_eq!(out.get_pixel(1, 0)[0], 255);
        // weak, no strong neighbor
        assert_eq!(out.get_pixel(3, 0)[0], 0);
        // below low
        assert_eq!(out.get_pixel(2, 2)[0], 0);
        assert_eq!(out.pixels().filter(|p| p[0] == 255).count(), 2);
    }

    #[test]
    fn weak_pixels_are_not_chained() {
        // 6 touches 10 and is promoted; the second 6 only touches the first.
        let magnitude = raster_from_rows(&[
            vec![0.0, 0.0, 0.0, 0.0, 0.0],
            vec![10.0, 6.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 6.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 0.0, 0.0],
        ])
        .unwrap();
        let out = hysteresis(&magnitude, &thresholds(10.0, 5.0)).unwrap();
        assert_eq!(out.get_pixel(0, 0)[0], 255);
        assert_eq!(out.get_pixel(1, 1)[0], 0);
    }

    #[test]
    fn border_strong_pixels_promote_interior_neighbors() {
        let magnitude = raster_from_rows(&[
            vec![10.0, 0.0, 0.0],
            vec![0.0, 7.0, 0.0],
            vec![0.0, 0.0, 0.0],
        ])
        .unwrap();
        let out = hysteresis(&magnitude, &thresholds(10.0, 5.0)).unwrap();
        assert_eq!(out.dimensions(), (1, 1));
        assert_eq!(out.get_pixel(0, 0)[0], 255);
    }

    #[test]
    fn zero_thresholds_mark_everything() {
        let magnitude: Raster<f64> = Raster::new(6, 5);
        let out = hysteresis(&magnitude, &thresholds(0.0, 0.0)).unwrap();
        assert!(out.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn too_small_raster_is_rejected() {
        let magnitude: Raster<f64> = Raster::new(2, 2);
        assert!(matches!(
            hysteresis(&magnitude, &thresholds(1.0, 0.5)),
            Err(CannyError::ImageTooSmall { .. })
        ));
    }
}
