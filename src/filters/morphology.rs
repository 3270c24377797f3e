//! Morphology filters: Dilate, Erode.
//!
//! Both operate on the red channel with a 3x3 square structuring element.
//! The result is written to R, G and B alike and alpha is forced to 255; the
//! source's green, blue and alpha do not influence the output.
//!
//! The two operators differ only in their reduction and in what they read
//! outside the image:
//! - **Dilate**: maximum, out-of-bounds reads as 0
//! - **Erode**: minimum, out-of-bounds reads as 255

use ndarray::{Array3, ArrayView3};

use super::image::{into_pixels, par_rows, rgba_view, BorderFill, PixelAccessor, CHANNELS, OPAQUE};
use crate::error::FilterError;

/// Reduce the 3x3 red-channel neighborhood of every pixel with `reduce`.
fn morph_3x3(input: ArrayView3<u8>, fill: BorderFill, reduce: fn(u8, u8) -> u8) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let pixels = PixelAccessor::new(input, fill);

    par_rows(Array3::zeros((height, width, CHANNELS)), |y, mut row| {
        let y = y as isize;
        for x in 0..width {
            let x = x as isize;
            let mut value = pixels.red(x, y);
            for dy in -1..=1 {
                for dx in -1..=1 {
                    value = reduce(value, pixels.red(x + dx, y + dy));
                }
            }

            let x = x as usize;
            row[[x, 0]] = value;
            row[[x, 1]] = value;
            row[[x, 2]] = value;
            row[[x, 3]] = OPAQUE;
        }
    })
}

// ============================================================================
// Dilate
// ============================================================================

/// Apply 3x3 dilation to an RGBA image.
///
/// Bright regions of the red channel grow by one pixel; the frame is padded
/// with black, so it never brightens the border.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
///
/// # Returns
/// Opaque grayscale image with the same dimensions
pub fn dilate_rgba(input: ArrayView3<u8>) -> Array3<u8> {
    morph_3x3(input, BorderFill::Black, u8::max)
}

/// Dilate a flat RGBA buffer.
pub fn dilate(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>, FilterError> {
    let input = rgba_view(pixels, width, height)?;
    log::debug!("dilate {width}x{height} image");
    Ok(into_pixels(dilate_rgba(input)))
}

// ============================================================================
// Erode
// ============================================================================

/// Apply 3x3 erosion to an RGBA image.
///
/// Dark regions of the red channel grow by one pixel; the frame is padded
/// with white, so it never darkens the border.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
///
/// # Returns
/// Opaque grayscale image with the same dimensions
pub fn erode_rgba(input: ArrayView3<u8>) -> Array3<u8> {
    morph_3x3(input, BorderFill::White, u8::min)
}

/// Erode a flat RGBA buffer.
pub fn erode(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>, FilterError> {
    let input = rgba_view(pixels, width, height)?;
    log::debug!("erode {width}x{height} image");
    Ok(into_pixels(erode_rgba(input)))
}
