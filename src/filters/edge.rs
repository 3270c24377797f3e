//! Sobel edge detection.
//!
//! Intensity is the unweighted mean of R, G and B. Samples outside the image
//! read as 0, so every pixel including the frame gets a defined gradient.
//!
//! Output is grayscale: R = G = B = gradient magnitude (saturated at 255),
//! alpha forced to 255.

use ndarray::{Array3, ArrayView3};

use super::image::{into_pixels, par_rows, rgba_view, BorderFill, PixelAccessor, CHANNELS, OPAQUE};
use crate::error::FilterError;

/// Horizontal Sobel kernel.
pub const KERNEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];

/// Vertical Sobel kernel.
pub const KERNEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Gradient magnitude `sqrt(gx^2 + gy^2)` at `(x, y)`.
#[inline]
pub fn gradient_magnitude(pixels: &PixelAccessor, x: usize, y: usize) -> f64 {
    let mut gx = 0.0f64;
    let mut gy = 0.0f64;

    for ky in 0..3 {
        for kx in 0..3 {
            let lum = pixels.intensity(x as isize + kx as isize - 1, y as isize + ky as isize - 1);
            gx += KERNEL_X[ky][kx] as f64 * lum;
            gy += KERNEL_Y[ky][kx] as f64 * lum;
        }
    }

    (gx * gx + gy * gy).sqrt()
}

/// Round half to even, then saturate into `0..=255`.
#[inline]
fn to_channel(magnitude: f64) -> u8 {
    magnitude.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Apply Sobel edge detection to an RGBA image.
///
/// # Arguments
/// * `input` - RGBA image (height, width, 4)
///
/// # Returns
/// Opaque grayscale edge image with the same dimensions
pub fn sobel_rgba(input: ArrayView3<u8>) -> Array3<u8> {
    let (height, width, _) = input.dim();
    let pixels = PixelAccessor::new(input, BorderFill::Black);

    par_rows(Array3::zeros((height, width, CHANNELS)), |y, mut row| {
        for x in 0..width {
            let edge_value = to_channel(gradient_magnitude(&pixels, x, y));
            row[[x, 0]] = edge_value;
            row[[x, 1]] = edge_value;
            row[[x, 2]] = edge_value;
            row[[x, 3]] = OPAQUE;
        }
    })
}

/// Run Sobel edge detection on a flat RGBA buffer.
pub fn sobel(pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>, FilterError> {
    let input = rgba_view(pixels, width, height)?;
    log::debug!("sobel {width}x{height} image");
    Ok(into_pixels(sobel_rgba(input)))
}
