//! Edge map overlay for inspecting results.

use image::{buffer::ConvertBuffer, GrayImage, Rgb, RgbImage};

/// Paints the edges of `edges` in red over the grayscale source `image`.
///
/// Edge maps are smaller than their input; `border` is the offset of edge-map
/// pixel `(0, 0)` inside `image`, as returned by
/// [`EdgeDetector::border`](crate::EdgeDetector::border). Edge pixels that
/// land outside `image` are skipped.
///
/// # Examples
///
/// ```rust,no_run
/// use image::open;
/// use canny_edge::{visualize_edges, EdgeDetector};
///
/// let image = open("input.png").unwrap().to_luma8();
/// let detector = EdgeDetector::default();
/// let edges = detector.detect(&image).unwrap();
/// let overlay = visualize_edges(&image, &edges, detector.border());
/// overlay.save("edges_overlay.png").unwrap();
/// ```
pub fn visualize_edges(image: &GrayImage, edges: &GrayImage, border: u32) -> RgbImage {
    let mut canvas: RgbImage = image.convert();
    let red = Rgb([255u8, 0, 0]);

    for (x, y, pixel) in edges.enumerate_pixels() {
        if pixel[0] == 0 {
            continue;
        }
        let (Some(cx), Some(cy)) = (x.checked_add(border), y.checked_add(border)) else {
            continue;
        };
        if cx < canvas.width() && cy < canvas.height() {
            canvas.put_pixel(cx, cy, red);
        }
    }

    canvas
}
