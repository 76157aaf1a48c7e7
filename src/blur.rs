//! Gaussian smoothing ahead of gradient estimation.
//!
//! Output is produced only where the whole kernel window fits, so the blurred
//! image is `radius` pixels smaller on every side than its input.

use image::{GrayImage, Luma};

use crate::error::Result;
use crate::kernel::GaussianKernel;
use crate::raster::{ensure_window_fits, sample, Raster};

/// How the 1-D kernel is swept over the image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BlurMode {
    /// Vertical sweep only.
    ///
    /// Matches the edge maps of the reference detector, whose horizontal
    /// sweep was overwritten by the vertical one before use.
    #[default]
    VerticalOnly,
    /// Horizontal sweep into a floating intermediate, then a vertical sweep
    /// of that intermediate. A true 2-D Gaussian blur.
    Separable,
}

/// Blurs `image` with `kernel`, trimming `kernel.radius()` pixels from each side.
///
/// Each output sample is the weighted window sum divided by the kernel norm,
/// rounded to the nearest integer.
///
/// # Errors
///
/// - [`CannyError::EmptyInput`](crate::CannyError::EmptyInput) if the image has no pixels.
/// - [`CannyError::ImageTooSmall`](crate::CannyError::ImageTooSmall) if either dimension is
///   below `2·radius + 1`.
///
/// # Examples
///
/// ```rust
/// use canny_edge::{gaussian_blur, BlurMode, GaussianKernel};
/// use image::{GrayImage, Luma};
///
/// let image = GrayImage::from_pixel(12, 9, Luma([90]));
/// let kernel = GaussianKernel::new(2, 1.0).unwrap();
/// let blurred = gaussian_blur(&image, &kernel, BlurMode::Separable).unwrap();
/// assert_eq!(blurred.dimensions(), (8, 5));
/// ```
pub fn gaussian_blur(
    image: &GrayImage,
    kernel: &GaussianKernel,
    mode: BlurMode,
) -> Result<GrayImage> {
    ensure_window_fits(image, "gaussian blur", GaussianKernel::window(kernel.radius()))?;

    let blurred = match mode {
        BlurMode::VerticalOnly => vertical_only(image, kernel),
        BlurMode::Separable => separable(image, kernel),
    };
    debug!(
        "blurred {}x{} -> {}x{} ({:?}, radius {}, sigma {})",
        image.width(),
        image.height(),
        blurred.width(),
        blurred.height(),
        mode,
        kernel.radius(),
        kernel.sigma()
    );
    Ok(blurred)
}

fn vertical_only(image: &GrayImage, kernel: &GaussianKernel) -> GrayImage {
    let r = kernel.radius();
    let taps = GaussianKernel::window(r);
    let (width, height) = (image.width() - 2 * r, image.height() - 2 * r);

    GrayImage::from_fn(width, height, |x, y| {
        let value = kernel.apply((0..taps).map(|i| f64::from(image.get_pixel(x + r, y + i)[0])));
        Luma([to_intensity(value)])
    })
}

fn separable(image: &GrayImage, kernel: &GaussianKernel) -> GrayImage {
    let r = kernel.radius();
    let taps = GaussianKernel::window(r);
    let width = image.width() - 2 * r;

    // Rows keep their full height until the vertical sweep trims them.
    let horizontal: Raster<f64> = Raster::from_fn(width, image.height(), |x, y| {
        Luma([kernel.apply((0..taps).map(|i| f64::from(image.get_pixel(x + i, y)[0])))])
    });

    GrayImage::from_fn(width, image.height() - 2 * r, |x, y| {
        let value = kernel.apply((0..taps).map(|i| sample(&horizontal, x, y + i)));
        Luma([to_intensity(value)])
    })
}

#[inline]
fn to_intensity(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
