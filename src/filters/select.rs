//! Filter selection by name.
//!
//! Hosts that let a user pick a filter from a list (a button bar, a CLI
//! flag, a JS call) resolve the name to a [`FilterKind`], turn it into a
//! parameterized [`Filter`] and call [`Filter::apply`].

use std::fmt;
use std::str::FromStr;

use super::{blur, edge, morphology, noise};
use crate::error::FilterError;

/// Smoothing factor used when a filter is selected by name only.
pub const DEFAULT_SMOOTHING_FACTOR: f64 = 0.5;

/// Median window used when a filter is selected by name only.
pub const DEFAULT_MEDIAN_WINDOW: usize = 3;

/// The available filters, without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Smoothing,
    Median,
    Sobel,
    Dilation,
    Erosion,
}

impl FilterKind {
    /// Every filter, in menu order.
    pub const ALL: [FilterKind; 5] = [
        FilterKind::Smoothing,
        FilterKind::Median,
        FilterKind::Sobel,
        FilterKind::Dilation,
        FilterKind::Erosion,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Smoothing => "smoothing",
            FilterKind::Median => "median",
            FilterKind::Sobel => "sobel",
            FilterKind::Dilation => "dilation",
            FilterKind::Erosion => "erosion",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "smoothing" | "smooth" => Ok(FilterKind::Smoothing),
            "median" => Ok(FilterKind::Median),
            "sobel" => Ok(FilterKind::Sobel),
            "dilation" | "dilatation" | "dilate" => Ok(FilterKind::Dilation),
            "erosion" | "erode" => Ok(FilterKind::Erosion),
            _ => Err(FilterError::UnknownFilter(s.to_string())),
        }
    }
}

/// A filter together with its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    Smoothing { factor: f64 },
    Median { window_size: usize },
    Sobel,
    Dilation,
    Erosion,
}

impl Filter {
    pub fn kind(&self) -> FilterKind {
        match self {
            Filter::Smoothing { .. } => FilterKind::Smoothing,
            Filter::Median { .. } => FilterKind::Median,
            Filter::Sobel => FilterKind::Sobel,
            Filter::Dilation => FilterKind::Dilation,
            Filter::Erosion => FilterKind::Erosion,
        }
    }

    /// Run the filter over a flat RGBA buffer.
    pub fn apply(&self, pixels: &[u8], width: usize, height: usize) -> Result<Vec<u8>, FilterError> {
        match *self {
            Filter::Smoothing { factor } => blur::smoothing(pixels, width, height, factor),
            Filter::Median { window_size } => noise::median(pixels, width, height, window_size),
            Filter::Sobel => edge::sobel(pixels, width, height),
            Filter::Dilation => morphology::dilate(pixels, width, height),
            Filter::Erosion => morphology::erode(pixels, width, height),
        }
    }
}

impl From<FilterKind> for Filter {
    fn from(kind: FilterKind) -> Self {
        match kind {
            FilterKind::Smoothing => Filter::Smoothing {
                factor: DEFAULT_SMOOTHING_FACTOR,
            },
            FilterKind::Median => Filter::Median {
                window_size: DEFAULT_MEDIAN_WINDOW,
            },
            FilterKind::Sobel => Filter::Sobel,
            FilterKind::Dilation => Filter::Dilation,
            FilterKind::Erosion => Filter::Erosion,
        }
    }
}

impl FromStr for Filter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<FilterKind>().map(Filter::from)
    }
}
