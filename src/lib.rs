//! RGBA Filters
//!
//! Deterministic image filters over flat RGBA pixel buffers, with Python
//! bindings via PyO3 and WASM bindings for JavaScript.
//!
//! ## Image Format
//! Every filter takes a row-major RGBA buffer (`width * height * 4` bytes)
//! together with its dimensions and returns a new buffer of the same size:
//!
//! ```
//! let pixels = vec![255u8; 3 * 3 * 4];
//! let edges = rgba_filters::sobel(&pixels, 3, 3).unwrap();
//! assert_eq!(edges.len(), pixels.len());
//! ```
//!
//! ## Filters
//! - [`smoothing`]: 3x3 box blur blended with the original pixel
//! - [`median`]: order-statistic filter in HSV space
//! - [`sobel`]: gradient-magnitude edge detection
//! - [`dilate`] / [`erode`]: 3x3 red-channel morphology
//!
//! Filters never mutate their input and keep no state between calls, so
//! independent calls may run concurrently.

pub mod error;
pub mod filters;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::FilterError;
pub use filters::blur::smoothing;
pub use filters::color_science::{hsv_to_rgb, rgb_to_hsv, Hsv, Rgb};
pub use filters::edge::sobel;
pub use filters::morphology::{dilate, erode};
pub use filters::noise::median;
pub use filters::select::{Filter, FilterKind};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::error::FilterError;
    use crate::filters::image::check_rgba;
    use crate::filters::{blur, edge, morphology, noise};

    impl From<FilterError> for PyErr {
        fn from(err: FilterError) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    /// Smooth an RGBA u8 image (H, W, 4).
    ///
    /// `factor` weights the original pixel against the 3x3 mean.
    #[pyfunction]
    #[pyo3(signature = (image, factor=0.5))]
    pub fn smoothing<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        factor: f64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = image.as_array();
        check_rgba(&input)?;
        blur::check_factor(factor)?;
        Ok(blur::smooth_rgba(input, factor).into_pyarray(py))
    }

    /// HSV median filter with an odd square window.
    #[pyfunction]
    #[pyo3(signature = (image, window_size=3))]
    pub fn median<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        window_size: usize,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = image.as_array();
        check_rgba(&input)?;
        noise::check_window_size(window_size)?;
        Ok(noise::median_hsv_rgba(input, window_size).into_pyarray(py))
    }

    #[pyfunction]
    pub fn sobel<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = image.as_array();
        check_rgba(&input)?;
        Ok(edge::sobel_rgba(input).into_pyarray(py))
    }

    #[pyfunction]
    pub fn dilate<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = image.as_array();
        check_rgba(&input)?;
        Ok(morphology::dilate_rgba(input).into_pyarray(py))
    }

    #[pyfunction]
    pub fn erode<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let input = image.as_array();
        check_rgba(&input)?;
        Ok(morphology::erode_rgba(input).into_pyarray(py))
    }

    /// RGBA filters extension module
    #[pymodule]
    pub fn rgba_filters(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(smoothing, m)?)?;
        m.add_function(wrap_pyfunction!(median, m)?)?;
        m.add_function(wrap_pyfunction!(sobel, m)?)?;
        m.add_function(wrap_pyfunction!(dilate, m)?)?;
        m.add_function(wrap_pyfunction!(erode, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::rgba_filters;
