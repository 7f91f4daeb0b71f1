//! Conversion between RGB and CMYK.
//!
//! These are the naive device-independent formulas, no ICC profile is
//! involved. Both directions are pure functions; when a host binds an RGB and
//! a CMYK value to the same state it picks one direction per edit.
//!
//! ```rust
//! use chromix::{cmyk_to_rgb, rgb_to_cmyk, Color};
//! let orange = Color::new(255, 165, 0);
//! let cmyk = rgb_to_cmyk(orange);
//! assert_eq!((cmyk.cyan, cmyk.magenta, cmyk.yellow, cmyk.key), (0, 35, 100, 0));
//! assert_eq!(cmyk_to_rgb(cmyk), Color::new(255, 166, 0));
//! ```

use serde::{Deserialize, Serialize};

use crate::color::{Color, Component, Rgb};
use crate::math::quantize;

const PERCENT: Component = 100.0;

/// CMYK channels as integer percentages in `0..=100`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CmykValue {
    /// Cyan ink coverage.
    pub cyan: u8,
    /// Magenta ink coverage.
    pub magenta: u8,
    /// Yellow ink coverage.
    pub yellow: u8,
    /// Key (black) ink coverage.
    pub key: u8,
}

impl CmykValue {
    /// Create a new value. Channels above 100 are kept as is and clamped when
    /// converted.
    pub const fn new(cyan: u8, magenta: u8, yellow: u8, key: u8) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
        }
    }
}

chromix_macros::gen_model! {
    /// CMYK with fractional components in `0.0..=1.0`.
    pub struct Cmyk {
        /// The cyan component.
        cyan: Component,
        /// The magenta component.
        magenta: Component,
        /// The yellow component.
        yellow: Component,
        /// The key (black) component.
        key: Component,
    }
}

impl Rgb {
    /// Convert this color to CMYK.
    pub fn to_cmyk(&self) -> Cmyk {
        let Rgb { red, green, blue } = self.map(|v| v.clamp(0.0, 1.0));

        let max = red.max(green).max(blue);

        // Pure black would divide by zero below.
        if max <= 0.0 {
            return Cmyk::new(0.0, 0.0, 0.0, 1.0);
        }

        let key = 1.0 - max;
        let ink = |v: Component| ((1.0 - v - key) / max).clamp(0.0, 1.0);

        Cmyk::new(ink(red), ink(green), ink(blue), key)
    }
}

impl Cmyk {
    /// Convert this color to RGB.
    pub fn to_rgb(&self) -> Rgb {
        let Cmyk {
            cyan,
            magenta,
            yellow,
            key,
        } = self.map(|v| v.clamp(0.0, 1.0));

        let white = 1.0 - key;

        Rgb::new(
            (1.0 - cyan) * white,
            (1.0 - magenta) * white,
            (1.0 - yellow) * white,
        )
    }
}

impl From<CmykValue> for Cmyk {
    fn from(value: CmykValue) -> Self {
        let percent = |v: u8| Component::from(v.min(100)) / PERCENT;
        Cmyk::new(
            percent(value.cyan),
            percent(value.magenta),
            percent(value.yellow),
            percent(value.key),
        )
    }
}

impl From<Cmyk> for CmykValue {
    fn from(value: Cmyk) -> Self {
        CmykValue::new(
            quantize(value.cyan, PERCENT),
            quantize(value.magenta, PERCENT),
            quantize(value.yellow, PERCENT),
            quantize(value.key, PERCENT),
        )
    }
}

impl From<Color> for CmykValue {
    fn from(value: Color) -> Self {
        rgb_to_cmyk(value)
    }
}

impl From<CmykValue> for Color {
    fn from(value: CmykValue) -> Self {
        cmyk_to_rgb(value)
    }
}

/// Convert an 8-bit color to integer CMYK percentages.
pub fn rgb_to_cmyk(color: Color) -> CmykValue {
    color.to_rgb().to_cmyk().into()
}

/// Convert integer CMYK percentages to an 8-bit color.
pub fn cmyk_to_rgb(cmyk: CmykValue) -> Color {
    Cmyk::from(cmyk).to_rgb().into()
}
