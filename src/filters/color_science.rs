//! RGB <-> HSV conversion with integer-quantized HSV.
//!
//! Hue is stored in whole degrees `[0, 360)`, saturation and value in whole
//! percent `[0, 100]`. The quantization makes the round trip lossy: a color
//! comes back within 3 units per channel (within 1 for greys).

// ============================================================================
// Color Types
// ============================================================================

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }
}

/// Integer HSV: `h` in degrees `[0, 360)`, `s` and `v` in percent `[0, 100]`.
///
/// Achromatic colors carry `h == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

impl Hsv {
    pub const fn new(h: u16, s: u8, v: u8) -> Self {
        Self { h, s, v }
    }

    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self)
    }
}

impl From<Rgb> for Hsv {
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsv(rgb)
    }
}

impl From<Hsv> for Rgb {
    fn from(hsv: Hsv) -> Self {
        hsv_to_rgb(hsv)
    }
}

// ============================================================================
// Conversions
// ============================================================================

/// Convert RGB to integer HSV.
///
/// Hue uses the six-region formula and is rounded to whole degrees, then
/// wrapped into `[0, 360)`. Zero chroma yields `h = 0`; black yields `s = 0`.
#[inline]
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = rgb.r as f64;
    let g = rgb.g as f64;
    let b = rgb.b as f64;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0
    } else {
        let sector = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        // 359.5 and above rounds to 360, which is the same hue as 0
        ((sector * 60.0).round() as u16) % 360
    };

    let s = if max == 0.0 {
        0
    } else {
        ((delta / max) * 100.0).round() as u8
    };
    let v = ((max / 255.0) * 100.0).round() as u8;

    Hsv { h, s, v }
}

/// Convert integer HSV back to RGB.
///
/// Channels are rounded to the nearest integer and saturate at 0 and 255.
#[inline]
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let h = hsv.h as f64;
    let value = hsv.v as f64 / 100.0;
    let c = value * (hsv.s as f64 / 100.0);
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = value - c;

    let (r, g, b) = match hsv.h {
        0..=59 => (c, x, 0.0),
        60..=119 => (x, c, 0.0),
        120..=179 => (0.0, c, x),
        180..=239 => (0.0, x, c),
        240..=299 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    Rgb {
        r: to_channel(r + m),
        g: to_channel(g + m),
        b: to_channel(b + m),
    }
}

#[inline]
fn to_channel(unit: f64) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}
