//! Non-maximum suppression along the quantized gradient direction.

use image::Luma;

use crate::gradient::GradientField;
use crate::raster::sample;

/// Where a suppressed pixel's zero is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SuppressionAnchor {
    /// One row up and one column left of the examined pixel.
    ///
    /// Reproduces the edge maps of the reference detector.
    #[default]
    UpperLeft,
    /// The examined pixel itself.
    Center,
}

/// Thins edges by zeroing magnitudes that are not local maxima.
///
/// Every interior pixel is compared with its two neighbors along its
/// [`Sector`](crate::Sector). When it is strictly smaller than both, a zero is
/// written at the position selected by `anchor`. The magnitude raster is
/// updated in place in raster order, so later comparisons see earlier zeros.
///
/// Returns the number of zeros written.
///
/// # Examples
///
/// ```rust
/// use canny_edge::{non_maximum_suppression, sobel_gradients, GradientField, SuppressionAnchor};
/// use image::{GrayImage, Luma};
///
/// let image = GrayImage::from_fn(9, 9, |x, y| Luma([((x * 7 + y * 3) % 40) as u8]));
/// let mut field = GradientField::from_components(&sobel_gradients(&image).unwrap()).unwrap();
/// let zeroed = non_maximum_suppression(&mut field, SuppressionAnchor::Center);
/// assert!(zeroed <= 5 * 5);
/// ```
pub fn non_maximum_suppression(field: &mut GradientField, anchor: SuppressionAnchor) -> usize {
    let (width, height) = field.dimensions();
    let mut zeroed = 0;

    for y in 1..height.saturating_sub(1) {
        for x in 1..width.saturating_sub(1) {
            let [(ax, ay), (bx, by)] = field.direction(x, y).neighbor_offsets();
            let magnitude = field.magnitude_mut();
            let center = sample(magnitude, x, y);
            let first = sample(magnitude, offset(x, ax), offset(y, ay));
            let second = sample(magnitude, offset(x, bx), offset(y, by));

            if center < first && center < second {
                let (tx, ty) = match anchor {
                    SuppressionAnchor::UpperLeft => (x - 1, y - 1),
                    SuppressionAnchor::Center => (x, y),
                };
                magnitude.put_pixel(tx, ty, Luma([0.0]));
                zeroed += 1;
            }
        }
    }

    debug!("non-maximum suppression zeroed {} pixels ({:?})", zeroed, anchor);
    zeroed
}

#[inline]
fn offset(coord: u32, delta: i64) -> u32 {
    (i64::from(coord) + delta) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::raster_from_rows;
    use crate::sobel::GradientComponents;
    use crate::Sector;

    /// Field whose magnitudes equal `gx` and whose direction is horizontal everywhere.
    fn horizontal_field(rows: &[Vec<i32>]) -> GradientField {
        let gx = raster_from_rows(rows).unwrap();
        let gy = raster_from_rows(&vec![vec![0; rows[0].len()]; rows.len()]).unwrap();
        GradientField::from_components(&GradientComponents { gx, gy }).unwrap()
    }

    fn magnitudes(field: &GradientField) -> Vec<f64> {
        field.magnitude().as_raw().clone()
    }

    #[test]
    fn valley_is_zeroed_up_and_left() {
        let mut field = horizontal_field(&[
            vec![1, 1, 1],
            vec![5, 2, 5],
            vec![1, 1, 1],
        ]);
        let zeroed = non_maximum_suppression(&mut field, SuppressionAnchor::UpperLeft);
        assert_eq!(zeroed, 1);
        assert_eq!(
            magnitudes(&field),
            vec![0.0, 1.0, 1.0, 5.0, 2.0, 5.0, 1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn valley_is_zeroed_in_place_with_center_anchor() {
        let mut field = horizontal_field(&[
            vec![1, 1, 1],
            vec![5, 2, 5],
            vec![1, 1, 1],
        ]);
        non_maximum_suppression(&mut field, SuppressionAnchor::Center);
        assert_eq!(
            magnitudes(&field),
            vec![1.0, 1.0, 1.0, 5.0, 0.0, 5.0, 1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn smaller_than_one_neighbor_is_kept() {
        let mut field = horizontal_field(&[
            vec![1, 1, 1, 1],
            vec![9, 4, 3, 1],
            vec![1, 1, 1, 1],
        ]);
        let before = magnitudes(&field);
        assert_eq!(non_maximum_suppression(&mut field, SuppressionAnchor::Center), 0);
        assert_eq!(magnitudes(&field), before);
    }

    #[test]
    fn equal_neighbors_are_not_suppressed() {
        let mut field = horizontal_field(&vec![vec![3; 5]; 4]);
        assert_eq!(non_maximum_suppression(&mut field, SuppressionAnchor::UpperLeft), 0);
    }

    #[test]
    fn earlier_zeros_are_visible_to_later_pixels() {
        // (1,1) is a horizontal valley and is zeroed first. (1,2) points
        // vertically and would be below both (1,1) and (1,3), but by the time
        // it is examined its upper neighbor already reads 0.
        let gx = raster_from_rows(&[
            vec![0, 0, 0],
            vec![5, 3, 5],
            vec![0, 0, 0],
            vec![0, 0, 0],
            vec![0, 0, 0],
        ])
        .unwrap();
        let gy = raster_from_rows(&[
            vec![0, 0, 0],
            vec![0, 0, 0],
            vec![0, 2, 0],
            vec![0, 6, 0],
            vec![0, 0, 0],
        ])
        .unwrap();
        let mut field = GradientField::from_components(&GradientComponents { gx, gy }).unwrap();
        assert_eq!(field.direction(1, 1), Sector::Horizontal);
        assert_eq!(field.direction(1, 2), Sector::Vertical);

        let zeroed = non_maximum_suppression(&mut field, SuppressionAnchor::Center);
        assert_eq!(zeroed, 1);
        assert_eq!(sample(field.magnitude(), 1, 1), 0.0);
        assert_eq!(sample(field.magnitude(), 1, 2), 2.0);
    }

    #[test]
    fn vertical_sector_compares_rows() {
        let gx = raster_from_rows(&vec![vec![0; 3]; 3]).unwrap();
        let gy = raster_from_rows(&[vec![0, 7, 0], vec![0, 2, 0], vec![0, 7, 0]]).unwrap();
        let mut field = GradientField::from_components(&GradientComponents { gx, gy }).unwrap();
        assert_eq!(field.direction(1, 1), Sector::Vertical);
        assert_eq!(non_maximum_suppression(&mut field, SuppressionAnchor::Center), 1);
        assert_eq!(sample(field.magnitude(), 1, 1), 0.0);
    }

    #[test]
    fn diagonal_sectors_compare_their_own_corners() {
        // gx = gy > 0 is 45°: compares upper-right and lower-left.
        let d = vec![vec![1, 1, 9], vec![1, 4, 1], vec![9, 1, 1]];
        let mut anti = GradientField::from_components(&GradientComponents {
            gx: raster_from_rows(&d).unwrap(),
            gy: raster_from_rows(&d).unwrap(),
        })
        .unwrap();
        assert_eq!(anti.direction(1, 1), Sector::AntiDiagonal);
        assert_eq!(non_maximum_suppression(&mut anti, SuppressionAnchor::Center), 1);

        // gx = -gy with gy > 0 is 135°: the same corners are not compared.
        let neg: Vec<Vec<i32>> = d.iter().map(|r| r.iter().map(|v| -v).collect()).collect();
        let mut diag = GradientField::from_components(&GradientComponents {
            gx: raster_from_rows(&neg).unwrap(),
            gy: raster_from_rows(&d).unwrap(),
        })
        .unwrap();
        assert_eq!(diag.direction(1, 1), Sector::Diagonal);
        assert_eq!(non_maximum_suppression(&mut diag, SuppressionAnchor::Center), 0);
    }

    #[test]
    fn tiny_fields_have_no_interior() {
        let mut field = horizontal_field(&[vec![4, 1]]);
        assert_eq!(non_maximum_suppression(&mut field, SuppressionAnchor::UpperLeft), 0);
    }
}
