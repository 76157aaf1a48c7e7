//! 3x3 Sobel gradient estimation.

use image::{GrayImage, Luma};

use crate::error::Result;
use crate::raster::{ensure_window_fits, Raster};

/// A 3x3 convolution kernel, indexed `[row][column]`.
pub type Kernel3 = [[i32; 3]; 3];

/// Horizontal Sobel kernel; responds to vertical edges.
///
/// ```text
/// [-1  0  1]
/// [-2  0  2]
/// [-1  0  1]
/// ```
pub const SOBEL_HORIZONTAL: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Vertical Sobel kernel; responds to horizontal edges.
///
/// ```text
/// [-1 -2 -1]
/// [ 0  0  0]
/// [ 1  2  1]
/// ```
pub const SOBEL_VERTICAL: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Horizontal and vertical gradient components of the same image.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientComponents {
    /// Response to [`SOBEL_HORIZONTAL`].
    pub gx: Raster<i32>,
    /// Response to [`SOBEL_VERTICAL`].
    pub gy: Raster<i32>,
}

impl GradientComponents {
    pub fn dimensions(&self) -> (u32, u32) {
        self.gx.dimensions()
    }
}

/// Convolves `image` with [`SOBEL_HORIZONTAL`].
///
/// # Errors
///
/// Fails if the image is empty or smaller than 3x3.
pub fn sobel_horizontal(image: &GrayImage) -> Result<Raster<i32>> {
    convolve3(image, &SOBEL_HORIZONTAL)
}

/// Convolves `image` with [`SOBEL_VERTICAL`].
///
/// # Errors
///
/// Fails if the image is empty or smaller than 3x3.
pub fn sobel_vertical(image: &GrayImage) -> Result<Raster<i32>> {
    convolve3(image, &SOBEL_VERTICAL)
}

/// Computes both Sobel responses of `image`.
///
/// The outermost row and column on each side have no full 3x3 neighborhood,
/// so both rasters are `(width − 2) × (height − 2)`. Values are signed and
/// unclamped.
///
/// # Examples
///
/// ```rust
/// use canny_edge::sobel_gradients;
/// use image::{GrayImage, Luma};
///
/// let image = GrayImage::from_fn(6, 6, |x, _| Luma([if x < 3 { 0 } else { 100 }]));
/// let gradients = sobel_gradients(&image).unwrap();
/// assert_eq!(gradients.dimensions(), (4, 4));
/// assert_eq!(gradients.gx.get_pixel(1, 0)[0], 400);
/// assert_eq!(gradients.gy.get_pixel(1, 0)[0], 0);
/// ```
pub fn sobel_gradients(image: &GrayImage) -> Result<GradientComponents> {
    let gx = sobel_horizontal(image)?;
    let gy = sobel_vertical(image)?;
    debug!("sobel gradients {}x{}", gx.width(), gx.height());
    Ok(GradientComponents { gx, gy })
}

fn convolve3(image: &GrayImage, kernel: &Kernel3) -> Result<Raster<i32>> {
    ensure_window_fits(image, "sobel gradient", 3)?;

    // Output (x, y) is centered on input (x + 1, y + 1)
    let (width, height) = (image.width() - 2, image.height() - 2);
    Ok(Raster::from_fn(width, height, |x, y| {
        // Largest response is 4 · 255, no overflow
        let mut sum = 0i32;
        for (ky, row) in kernel.iter().enumerate() {
            for (kx, weight) in row.iter().enumerate() {
                let pixel = image.get_pixel(x + kx as u32, y + ky as u32)[0];
                sum += weight * i32::from(pixel);
            }
        }
        Luma([sum])
    }))
}
