//! Error type shared by every filter entry point.

/// An error raised when a filter receives arguments it cannot process.
///
/// All variants describe contract violations detected before any pixel is
/// touched, so a failed call never produces partial output.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// Width or height is zero.
    #[error("image dimensions must be positive, got {width}x{height}")]
    EmptyImage {
        /// Requested width in pixels.
        width: usize,
        /// Requested height in pixels.
        height: usize,
    },

    /// The pixel buffer does not hold exactly `width * height * 4` bytes.
    #[error("pixel buffer length ({actual}) does not match the image size ({expected})")]
    InvalidBufferLength {
        /// `width * height * 4`.
        expected: usize,
        /// Length of the buffer that was passed in.
        actual: usize,
    },

    /// An array view was not RGBA.
    #[error("expected 4 channels (RGBA), got {0}")]
    InvalidChannelCount(usize),

    /// The median window is zero or even.
    #[error("window size must be a positive odd integer, got {0}")]
    InvalidWindowSize(usize),

    /// The smoothing factor is NaN or outside `[0, 1]`.
    #[error("smoothing factor must lie in [0, 1], got {0}")]
    InvalidSmoothingFactor(f64),

    /// A filter name could not be parsed.
    #[error("unknown filter: {0}")]
    UnknownFilter(String),
}
