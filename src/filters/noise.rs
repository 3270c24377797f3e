//! Median filter computed in HSV space.
//!
//! Each interior pixel gathers the HSV values of its `window x window`
//! neighborhood, sorts hue, saturation and value independently and picks the
//! element at `count / 2` from each list. The resulting HSV triple is
//! converted back to RGB. Pixels closer than `window / 2` to any edge, and
//! every alpha value, are copied from the source.

use ndarray::{Array3, ArrayView3};

use super::color_science::{hsv_to_rgb, rgb_to_hsv, Hsv, Rgb};
use super::image::{into_pixels, par_rows, rgba_view, standard_copy};
use crate::error::FilterError;

/// Check that a median window is a positive odd size.
pub fn check_window_size(window_size: usize) -> Result<(), FilterError> {
    if window_size == 0 || window_size % 2 == 0 {
        log::warn!("rejecting median window size {window_size}");
        return Err(FilterError::InvalidWindowSize(window_size));
    }
    Ok(())
}

/// Apply the HSV median filter to an RGBA image.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `window_size` - Side of the square neighborhood, positive and odd
///
/// # Returns
/// Median-filtered image with the same dimensions
pub fn median_hsv_rgba(input: ArrayView3<u8>, window_size: usize) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let half = window_size / 2;
    let output = standard_copy(input);

    if width <= 2 * half || height <= 2 * half {
        return output;
    }

    let count = window_size * window_size;
    let median_index = count / 2;

    par_rows(output, |y, mut row| {
        if y < half || y >= height - half {
            return;
        }

        let mut hues: Vec<u16> = Vec::with_capacity(count);
        let mut saturations: Vec<u8> = Vec::with_capacity(count);
        let mut values: Vec<u8> = Vec::with_capacity(count);

        for x in half..width - half {
            hues.clear();
            saturations.clear();
            values.clear();

            for sy in y - half..=y + half {
                for sx in x - half..=x + half {
                    let hsv = rgb_to_hsv(Rgb::new(
                        input[[sy, sx, 0]],
                        input[[sy, sx, 1]],
                        input[[sy, sx, 2]],
                    ));
                    hues.push(hsv.h);
                    saturations.push(hsv.s);
                    values.push(hsv.v);
                }
            }

            hues.sort_unstable();
            saturations.sort_unstable();
            values.sort_unstable();

            let rgb = hsv_to_rgb(Hsv::new(
                hues[median_index],
                saturations[median_index],
                values[median_index],
            ));

            row[[x, 0]] = rgb.r;
            row[[x, 1]] = rgb.g;
            row[[x, 2]] = rgb.b;
        }
    })
}

/// Median-filter a flat RGBA buffer.
///
/// Fails on a malformed buffer or a zero/even window size.
pub fn median(pixels: &[u8], width: usize, height: usize, window_size: usize) -> Result<Vec<u8>, FilterError> {
    check_window_size(window_size)?;
    let input = rgba_view(pixels, width, height)?;
    log::debug!("median {width}x{height} image, window {window_size}");
    Ok(into_pixels(median_hsv_rgba(input, window_size)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: usize, height: usize, rgba: [u8; 4]) -> Array3<u8> {
        let mut img = Array3::<u8>::zeros((height, width, 4));
        for y in 0..height {
            for x in 0..width {
                for c in 0..4 {
                    img[[y, x, c]] = rgba[c];
                }
            }
        }
        img
    }

    #[test]
    fn test_median_removes_salt() {
        let mut img = solid(5, 5, [0, 0, 0, 255]);
        img[[2, 2, 0]] = 255;
        img[[2, 2, 1]] = 255;
        img[[2, 2, 2]] = 255;

        let result = median_hsv_rgba(img.view(), 3);

        assert_eq!(result[[2, 2, 0]], 0);
        assert_eq!(result[[2, 2, 1]], 0);
        assert_eq!(result[[2, 2, 2]], 0);
    }

    #[test]
    fn test_median_removes_colored_outlier() {
        let mut img = solid(3, 3, [255, 0, 0, 255]);
        img[[1, 1, 0]] = 0;
        img[[1, 1, 2]] = 255;

        let result = median_hsv_rgba(img.view(), 3);

        assert_eq!(result[[1, 1, 0]], 255);
        assert_eq!(result[[1, 1, 1]], 0);
        assert_eq!(result[[1, 1, 2]], 0);
    }

    #[test]
    fn test_median_channels_are_independent() {
        // Four dark reds, five bright greens: hue median is green (120),
        // saturation median 100, value median picks the bright side.
        let mut img = solid(3, 3, [0, 255, 0, 255]);
        for &(y, x) in &[(0, 0), (0, 2), (2, 0), (2, 2)] {
            img[[y, x, 0]] = 51;
            img[[y, x, 1]] = 0;
        }

        let result = median_hsv_rgba(img.view(), 3);

        assert_eq!(result[[1, 1, 0]], 0);
        assert_eq!(result[[1, 1, 1]], 255);
        assert_eq!(result[[1, 1, 2]], 0);
    }

    #[test]
    fn test_median_keeps_border_and_alpha() {
        let mut img = solid(7, 7, [10, 20, 30, 77]);
        img[[0, 3, 0]] = 250;
        img[[6, 6, 2]] = 1;

        let result = median_hsv_rgba(img.view(), 5);

        for y in 0..7 {
            for x in 0..7 {
                if x < 2 || y < 2 || x > 4 || y > 4 {
                    for c in 0..4 {
                        assert_eq!(result[[y, x, c]], img[[y, x, c]]);
                    }
                }
                assert_eq!(result[[y, x, 3]], 77);
            }
        }
    }

    #[test]
    fn test_median_window_larger_than_image_is_noop() {
        let img = solid(4, 4, [200, 100, 50, 255]);
        assert_eq!(median_hsv_rgba(img.view(), 5), img);
    }

    #[test]
    fn test_median_window_one_requantizes_only() {
        let mut img = solid(4, 3, [0, 0, 0, 255]);
        img[[1, 1, 0]] = 200;
        img[[1, 1, 1]] = 100;
        img[[1, 1, 2]] = 50;

        let result = median_hsv_rgba(img.view(), 1);

        for c in 0..3 {
            assert!(result[[1, 1, c]].abs_diff(img[[1, 1, c]]) <= 3);
        }
    }

    #[test]
    fn test_check_window_size() {
        assert!(check_window_size(1).is_ok());
        assert!(check_window_size(7).is_ok());
        assert_eq!(check_window_size(0), Err(FilterError::InvalidWindowSize(0)));
        assert_eq!(check_window_size(4), Err(FilterError::InvalidWindowSize(4)));
    }
}
