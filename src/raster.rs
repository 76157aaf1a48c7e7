//! Single-channel rasters shared between the pipeline stages.
//!
//! Every stage works on `image` buffers with a single `Luma` channel: intensity
//! rasters are plain [`GrayImage`](image::GrayImage)s, derived fields use wider sample types.
//! Coordinates follow the `image` convention, `(x, y)` = `(column, row)`.

use image::{GenericImageView, Luma, Primitive};
use imageproc::definitions::Image;

use crate::error::{CannyError, Result};

/// Row-major grid of scalar samples.
pub type Raster<T> = Image<Luma<T>>;

/// Reads the sample at `(x, y)`.
#[inline]
pub(crate) fn sample<T: Primitive + 'static>(raster: &Raster<T>, x: u32, y: u32) -> T {
    raster.get_pixel(x, y)[0]
}

/// Fails with [`CannyError::EmptyInput`] when either dimension is zero.
pub(crate) fn ensure_non_empty<I: GenericImageView>(image: &I) -> Result<()> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(CannyError::EmptyInput { width, height });
    }
    Ok(())
}

/// Fails with [`CannyError::ImageTooSmall`] unless both dimensions reach `required`.
pub(crate) fn ensure_window_fits<I: GenericImageView>(
    image: &I,
    stage: &'static str,
    required: u32,
) -> Result<()> {
    ensure_non_empty(image)?;
    let (width, height) = image.dimensions();
    if width < required || height < required {
        return Err(CannyError::ImageTooSmall {
            stage,
            width,
            height,
            required,
        });
    }
    Ok(())
}

/// Builds a raster from rows of samples. All rows must have the same length.
#[cfg(test)]
pub(crate) fn raster_from_rows<T: Primitive + 'static>(rows: &[Vec<T>]) -> Result<Raster<T>> {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |row| row.len()) as u32;
    if width == 0 || height == 0 {
        return Err(CannyError::EmptyInput { width, height });
    }
    if let Some(bad) = rows.iter().find(|row| row.len() as u32 != width) {
        return Err(CannyError::DimensionMismatch {
            expected: (width, height),
            actual: (bad.len() as u32, height),
        });
    }
    let data: Vec<T> = rows.iter().flatten().copied().collect();
    Raster::from_raw(width, height, data).ok_or(CannyError::DimensionMismatch {
        expected: (width, height),
        actual: (width, height),
    })
}

#[cfg(test)]
pub(crate) fn gray_from_rows(rows: &[Vec<u8>]) -> Result<image::GrayImage> {
    raster_from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::GrayImage;

    #[test]
    fn rows_are_laid_out_row_major() {
        let raster = raster_from_rows(&[vec![1i32, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(raster.dimensions(), (3, 2));
        assert_eq!(sample(&raster, 2, 0), 3);
        assert_eq!(sample(&raster, 0, 1), 4);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let result = raster_from_rows(&[vec![1i32, 2, 3], vec![4, 5]]);
        assert!(matches!(result, Err(CannyError::DimensionMismatch { .. })));
    }

    #[test]
    fn empty_rows_are_rejected() {
        let result = raster_from_rows::<u8>(&[]);
        assert_eq!(
            result.unwrap_err(),
            CannyError::EmptyInput {
                width: 0,
                height: 0
            }
        );
    }

    #[test]
    fn window_check_reports_required_size() {
        let img = GrayImage::new(2, 10);
        let err = ensure_window_fits(&img, "sobel", 3).unwrap_err();
        assert_eq!(
            err,
            CannyError::ImageTooSmall {
                stage: "sobel",
                width: 2,
                height: 10,
                required: 3,
            }
        );
    }
}
