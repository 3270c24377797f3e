//! Filter modules for RGBA pixel buffers.
//!
//! ## Supported Format
//!
//! | Format | Shape | Type | Description |
//! |--------|-------|------|-------------|
//! | RGBA8 | (H, W, 4) | u8 | Red, green, blue, alpha, 0-255 |
//!
//! Flat entry points take a row-major `&[u8]` of length `width * height * 4`
//! plus the dimensions; array-level functions take an `ArrayView3<u8>`.
//!
//! ## Architecture
//!
//! All filters follow these principles:
//! - **Pure** - Read only from the input, return a freshly allocated image
//! - **Same size** - Output dimensions always equal input dimensions
//! - **Thread-safe** - Rows are computed in parallel with rayon
//!
//! ## Filters
//!
//! | Filter | Border | Alpha |
//! |--------|--------|-------|
//! | smoothing | 1px frame copied | preserved |
//! | median | `window / 2` frame copied | preserved |
//! | sobel | zero padding | forced to 255 |
//! | dilate | zero padding | forced to 255 |
//! | erode | 255 padding | forced to 255 |

pub mod image;
pub mod color_science;
pub mod blur;
pub mod noise;
pub mod edge;
pub mod morphology;
pub mod select;
