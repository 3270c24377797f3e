//! Smoothing filter: 3x3 box blur blended with the original pixel.
//!
//! The outermost row and column on every side are copied unchanged, so every
//! neighborhood read stays inside the image. Alpha is never modified.

use ndarray::{Array3, ArrayView3};

use super::image::{into_pixels, par_rows, rgba_view, standard_copy};
use crate::error::FilterError;

/// Check that a smoothing factor lies in `[0, 1]` (NaN is rejected).
pub fn check_factor(factor: f64) -> Result<(), FilterError> {
    if (0.0..=1.0).contains(&factor) {
        Ok(())
    } else {
        log::warn!("rejecting smoothing factor {factor}");
        Err(FilterError::InvalidSmoothingFactor(factor))
    }
}

/// Apply the smoothing filter to an RGBA image.
///
/// For each interior pixel and each of R, G, B:
/// `mean(3x3) * (1 - factor) + center * factor`, truncated to `u8`.
/// `factor = 0` is a pure box blur, `factor = 1` the identity.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
/// * `factor` - Weight of the original pixel, 0.0-1.0
///
/// # Returns
/// Smoothed image with the same dimensions
pub fn smooth_rgba(input: ArrayView3<u8>, factor: f64) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let output = standard_copy(input);

    if width < 3 || height < 3 {
        return output;
    }

    let blur_weight = 1.0 - factor;

    par_rows(output, |y, mut row| {
        if y == 0 || y == height - 1 {
            return;
        }

        for x in 1..width - 1 {
            for c in 0..3 {
                let mut sum = 0u32;
                for sy in y - 1..=y + 1 {
                    for sx in x - 1..=x + 1 {
                        sum += input[[sy, sx, c]] as u32;
                    }
                }

                let center = input[[y, x, c]] as f64;
                let value = (sum as f64 / 9.0) * blur_weight + center * factor;
                row[[x, c]] = value as u8;
            }
        }
    })
}

/// Smooth a flat RGBA buffer.
///
/// Fails on a malformed buffer or a factor outside `[0, 1]`.
pub fn smoothing(pixels: &[u8], width: usize, height: usize, factor: f64) -> Result<Vec<u8>, FilterError> {
    check_factor(factor)?;
    let input = rgba_view(pixels, width, height)?;
    log::debug!("smoothing {width}x{height} image, factor {factor}");
    Ok(into_pixels(smooth_rgba(input, factor)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: usize, height: usize) -> Array3<u8> {
        let mut img = Array3::<u8>::zeros((height, width, 4));
        for y in 0..height {
            for x in 0..width {
                img[[y, x, 0]] = (x * 40) as u8;
                img[[y, x, 1]] = (y * 30) as u8;
                img[[y, x, 2]] = ((x + y) * 10) as u8;
                img[[y, x, 3]] = 200;
            }
        }
        img
    }

    #[test]
    fn test_smooth_factor_one_is_identity() {
        let img = ramp(5, 4);
        let result = smooth_rgba(img.view(), 1.0);
        assert_eq!(result, img);
    }

    #[test]
    fn test_smooth_box_blur_center() {
        let mut img = Array3::<u8>::zeros((3, 3, 4));
        img[[1, 1, 0]] = 90;
        img[[0, 0, 1]] = 100;

        let result = smooth_rgba(img.view(), 0.0);

        // 90 / 9 and 100 / 9 truncated
        assert_eq!(result[[1, 1, 0]], 10);
        assert_eq!(result[[1, 1, 1]], 11);
        assert_eq!(result[[1, 1, 2]], 0);
    }

    #[test]
    fn test_smooth_blends_with_center() {
        let mut img = Array3::<u8>::zeros((3, 3, 4));
        img[[1, 1, 0]] = 180;

        let result = smooth_rgba(img.view(), 0.5);

        // 20 * 0.5 + 180 * 0.5
        assert_eq!(result[[1, 1, 0]], 100);
    }

    #[test]
    fn test_smooth_keeps_border_and_alpha() {
        let img = ramp(6, 5);
        let result = smooth_rgba(img.view(), 0.0);

        for y in 0..5 {
            for x in 0..6 {
                if x == 0 || y == 0 || x == 5 || y == 4 {
                    for c in 0..4 {
                        assert_eq!(result[[y, x, c]], img[[y, x, c]]);
                    }
                }
                assert_eq!(result[[y, x, 3]], 200);
            }
        }
    }

    #[test]
    fn test_smooth_reads_source_only() {
        // A horizontal ramp is linear, so the box mean equals the center
        // when every neighbor is read from the source.
        let mut img = Array3::<u8>::zeros((3, 5, 4));
        for y in 0..3 {
            for x in 0..5 {
                img[[y, x, 0]] = (x * 9) as u8;
            }
        }

        let result = smooth_rgba(img.view(), 0.0);

        assert_eq!(result[[1, 1, 0]], 9);
        assert_eq!(result[[1, 2, 0]], 18);
        assert_eq!(result[[1, 3, 0]], 27);
    }

    #[test]
    fn test_smooth_tiny_image_unchanged() {
        let img = ramp(2, 7);
        assert_eq!(smooth_rgba(img.view(), 0.0), img);
    }

    #[test]
    fn test_smoothing_rejects_bad_factor() {
        let pixels = vec![0u8; 3 * 3 * 4];
        assert_eq!(
            smoothing(&pixels, 3, 3, 1.5),
            Err(FilterError::InvalidSmoothingFactor(1.5))
        );
        assert!(smoothing(&pixels, 3, 3, f64::NAN).is_err());
        assert!(smoothing(&pixels, 3, 3, -0.1).is_err());
    }
}
