//! WebAssembly exports for the RGBA filters.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. They take the
//! bytes of a canvas `ImageData` (RGBA, row-major) plus its dimensions and
//! return the filtered bytes, ready for `new ImageData(...)`.
//!
//! Invalid arguments surface as a thrown JS `Error`.

use wasm_bindgen::prelude::*;

use crate::filters::select::Filter;
use crate::filters::{blur, edge, morphology, noise};

/// Smooth an RGBA image.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `factor` - Weight of the original pixel, 0.0-1.0
///
/// # Returns
/// Flat array of smoothed RGBA bytes
#[wasm_bindgen]
pub fn smoothing_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    factor: f64,
) -> Result<Vec<u8>, JsError> {
    Ok(blur::smoothing(data, width, height, factor)?)
}

/// HSV median filter with an odd square window.
#[wasm_bindgen]
pub fn median_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    window_size: usize,
) -> Result<Vec<u8>, JsError> {
    Ok(noise::median(data, width, height, window_size)?)
}

/// Sobel edge magnitude as an opaque grayscale image.
#[wasm_bindgen]
pub fn sobel_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    Ok(edge::sobel(data, width, height)?)
}

/// 3x3 red-channel dilation.
#[wasm_bindgen]
pub fn dilate_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    Ok(morphology::dilate(data, width, height)?)
}

/// 3x3 red-channel erosion.
#[wasm_bindgen]
pub fn erode_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    Ok(morphology::erode(data, width, height)?)
}

/// Apply a filter chosen by name with its default parameters.
///
/// Accepts `smoothing`, `median`, `sobel`, `dilation` (or `dilatation`)
/// and `erosion`.
#[wasm_bindgen]
pub fn apply_filter_wasm(
    name: &str,
    data: &[u8],
    width: usize,
    height: usize,
) -> Result<Vec<u8>, JsError> {
    let filter: Filter = name.parse()?;
    Ok(filter.apply(data, width, height)?)
}
