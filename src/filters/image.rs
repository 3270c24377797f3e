//! RGBA buffer plumbing shared by every filter.
//!
//! Pixel buffers are flat `u8` slices laid out row-major with four bytes per
//! pixel (R, G, B, A). Internally they are viewed as `(height, width, 4)`
//! arrays so filters can index them as `input[[y, x, c]]`.

use ndarray::{Array3, ArrayView3, ArrayViewMut2, Axis};
use rayon::prelude::*;

use crate::error::FilterError;

/// Bytes per pixel.
pub const CHANNELS: usize = 4;

/// Fully opaque alpha.
pub const OPAQUE: u8 = 255;

/// Check that `len` bytes describe a `width` x `height` RGBA image.
pub fn check_dimensions(len: usize, width: usize, height: usize) -> Result<(), FilterError> {
    if width == 0 || height == 0 {
        log::warn!("rejecting empty image {width}x{height}");
        return Err(FilterError::EmptyImage { width, height });
    }

    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS))
        .unwrap_or(usize::MAX);
    if len != expected {
        log::warn!("rejecting buffer of {len} bytes for a {width}x{height} image");
        return Err(FilterError::InvalidBufferLength {
            expected,
            actual: len,
        });
    }

    Ok(())
}

/// Check that an array view is a non-empty RGBA image.
pub fn check_rgba(input: &ArrayView3<u8>) -> Result<(), FilterError> {
    let (height, width, channels) = input.dim();
    if channels != CHANNELS {
        log::warn!("rejecting image with {channels} channels");
        return Err(FilterError::InvalidChannelCount(channels));
    }
    if width == 0 || height == 0 {
        log::warn!("rejecting empty image {width}x{height}");
        return Err(FilterError::EmptyImage { width, height });
    }
    Ok(())
}

/// Validate a flat RGBA buffer and view it as a `(height, width, 4)` array.
pub fn rgba_view(pixels: &[u8], width: usize, height: usize) -> Result<ArrayView3<'_, u8>, FilterError> {
    check_dimensions(pixels.len(), width, height)?;
    ArrayView3::from_shape((height, width, CHANNELS), pixels).map_err(|_| {
        FilterError::InvalidBufferLength {
            expected: width * height * CHANNELS,
            actual: pixels.len(),
        }
    })
}

/// Flatten a filter result back into a row-major RGBA buffer.
pub fn into_pixels(image: Array3<u8>) -> Vec<u8> {
    if image.is_standard_layout() {
        image.into_raw_vec_and_offset().0
    } else {
        image.iter().copied().collect()
    }
}

/// Copy of `input` in standard (row-major) layout.
pub(crate) fn standard_copy(input: ArrayView3<u8>) -> Array3<u8> {
    let mut output = Array3::<u8>::zeros(input.raw_dim());
    output.assign(&input);
    output
}

/// Run `f` over every output row in parallel.
///
/// `f` receives the row index and a `(width, 4)` view of that row. Rows must
/// only be computed from immutable data captured by `f`.
pub(crate) fn par_rows<F>(mut output: Array3<u8>, f: F) -> Array3<u8>
where
    F: Fn(usize, ArrayViewMut2<'_, u8>) + Sync + Send,
{
    output
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(y, row)| f(y, row));
    output
}

/// Value returned for samples that fall outside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderFill {
    /// Out-of-bounds samples read as 0.
    Black,
    /// Out-of-bounds samples read as 255.
    White,
}

impl BorderFill {
    /// The channel value substituted for out-of-bounds samples.
    #[inline]
    pub fn value(self) -> u8 {
        match self {
            BorderFill::Black => 0,
            BorderFill::White => 255,
        }
    }
}

/// Bounds-checked sampler over an RGBA image.
///
/// Coordinates are signed so neighborhood offsets can step past the frame;
/// such reads return the configured [`BorderFill`] instead of panicking.
#[derive(Debug, Clone, Copy)]
pub struct PixelAccessor<'a> {
    image: ArrayView3<'a, u8>,
    fill: BorderFill,
}

impl<'a> PixelAccessor<'a> {
    pub fn new(image: ArrayView3<'a, u8>, fill: BorderFill) -> Self {
        Self { image, fill }
    }

    pub fn width(&self) -> usize {
        self.image.dim().1
    }

    pub fn height(&self) -> usize {
        self.image.dim().0
    }

    pub fn fill(&self) -> BorderFill {
        self.fill
    }

    #[inline]
    fn index(&self, x: isize, y: isize) -> Option<(usize, usize)> {
        if x < 0 || y < 0 || x as usize >= self.width() || y as usize >= self.height() {
            None
        } else {
            Some((x as usize, y as usize))
        }
    }

    /// Red channel at `(x, y)`.
    #[inline]
    pub fn red(&self, x: isize, y: isize) -> u8 {
        match self.index(x, y) {
            Some((x, y)) => self.image[[y, x, 0]],
            None => self.fill.value(),
        }
    }

    /// Unweighted mean of R, G and B at `(x, y)`.
    #[inline]
    pub fn intensity(&self, x: isize, y: isize) -> f64 {
        match self.index(x, y) {
            Some((x, y)) => {
                let r = self.image[[y, x, 0]] as f64;
                let g = self.image[[y, x, 1]] as f64;
                let b = self.image[[y, x, 2]] as f64;
                (r + g + b) / 3.0
            }
            None => self.fill.value() as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dimensions_rejects_short_buffer() {
        let err = check_dimensions(15, 2, 2).unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidBufferLength {
                expected: 16,
                actual: 15
            }
        );
    }

    #[test]
    fn test_check_dimensions_rejects_zero_width() {
        let err = check_dimensions(0, 0, 3).unwrap_err();
        assert_eq!(err, FilterError::EmptyImage { width: 0, height: 3 });
    }

    #[test]
    fn test_rgba_view_shape() {
        let pixels = vec![0u8; 3 * 2 * 4];
        let view = rgba_view(&pixels, 3, 2).unwrap();
        assert_eq!(view.dim(), (2, 3, 4));
    }

    #[test]
    fn test_check_rgba_rejects_rgb() {
        let img = Array3::<u8>::zeros((2, 2, 3));
        assert_eq!(
            check_rgba(&img.view()),
            Err(FilterError::InvalidChannelCount(3))
        );
    }

    #[test]
    fn test_accessor_black_border() {
        let mut img = Array3::<u8>::zeros((2, 2, 4));
        img[[1, 0, 0]] = 90;
        img[[1, 0, 1]] = 30;
        img[[1, 0, 2]] = 0;

        let pixels = PixelAccessor::new(img.view(), BorderFill::Black);

        assert_eq!(pixels.red(0, 1), 90);
        assert_eq!(pixels.intensity(0, 1), 40.0);
        assert_eq!(pixels.red(-1, 0), 0);
        assert_eq!(pixels.red(0, 2), 0);
        assert_eq!(pixels.intensity(2, 0), 0.0);
        assert_eq!(pixels.fill(), BorderFill::Black);
    }

    #[test]
    fn test_accessor_white_border() {
        let img = Array3::<u8>::zeros((2, 2, 4));
        let pixels = PixelAccessor::new(img.view(), BorderFill::White);

        assert_eq!(pixels.red(1, 1), 0);
        assert_eq!(pixels.red(-1, -1), 255);
        assert_eq!(pixels.red(5, 0), 255);
        assert_eq!(pixels.fill(), BorderFill::White);
        assert_eq!(pixels.intensity(0, -1), 255.0);
    }

    #[test]
    fn test_par_rows_visits_every_row() {
        let out = par_rows(Array3::<u8>::zeros((5, 2, 4)), |y, mut row| {
            for x in 0..2 {
                row[[x, 0]] = y as u8;
            }
        });
        for y in 0..5 {
            assert_eq!(out[[y, 1, 0]], y as u8);
        }
    }

    #[test]
    fn test_into_pixels_row_major() {
        let mut img = Array3::<u8>::zeros((2, 1, 4));
        img[[1, 0, 2]] = 7;
        let flat = into_pixels(img);
        assert_eq!(flat, vec![0, 0, 0, 0, 0, 0, 7, 0]);
    }
}
