//! A [`Color`] is an 8-bit sRGB triple as it is stored by a palette. [`Rgb`]
//! holds the same color with normalized components and is the model all
//! blending happens in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::math::{almost_zero, clamp_unit, quantize, Vector};

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all normalized components are stored
/// as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all normalized components are stored
/// as.
pub type Component = f64;

const CHANNEL_MAX: Component = 255.0;

/// An immutable color with 8-bit red, green and blue channels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// The red channel.
    #[serde(rename = "r")]
    pub red: u8,
    /// The green channel.
    #[serde(rename = "g")]
    pub green: u8,
    /// The blue channel.
    #[serde(rename = "b")]
    pub blue: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Color = Color::new(255, 255, 255);

    /// Create a new color from its 8-bit channels.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse a hex color. Accepts `#RRGGBB` and `#RGB`, with or without the
    /// leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || Error::InvalidHex(hex.to_owned());

        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);

        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match digits.len() {
            3 => {
                // Every digit is doubled, #abc == #aabbcc.
                let r = channel(&digits[0..1])?;
                let g = channel(&digits[1..2])?;
                let b = channel(&digits[2..3])?;
                Ok(Self::new(r * 17, g * 17, b * 17))
            }
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Return the color as an uppercase `#RRGGBB` string.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Return the hue of the color in degrees, or `None` if the color is
    /// achromatic and the hue is powerless.
    pub fn hue(&self) -> Option<Component> {
        self.to_rgb().hue()
    }

    /// Convert the color to normalized components.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::new(
            self.red as Component / CHANNEL_MAX,
            self.green as Component / CHANNEL_MAX,
            self.blue as Component / CHANNEL_MAX,
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

chromix_macros::gen_model! {
    /// A color with red, green and blue components normalized to
    /// `0.0..=1.0`.
    pub struct Rgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl Rgb {
    /// Return the components as a vector for channel arithmetic.
    pub fn to_vector(&self) -> Vector {
        Vector::new(self.red, self.green, self.blue)
    }

    /// Create a model from a channel vector, clamping each channel into
    /// range.
    pub fn from_vector(vector: Vector) -> Self {
        clamp_unit(vector).to_array().into()
    }

    /// Euclidean distance between two colors in the normalized domain.
    pub fn distance(&self, other: &Rgb) -> Component {
        (self.to_vector() - other.to_vector()).length()
    }

    /// Calculate the hue in degrees. `None` when all components are equal.
    pub fn hue(&self) -> Option<Component> {
        let Rgb { red, green, blue } = *self;

        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);

        let delta = max - min;

        if almost_zero(delta) {
            return None;
        }

        let hue = 60.0
            * if max == red {
                (green - blue) / delta + if green < blue { 6.0 } else { 0.0 }
            } else if max == green {
                (blue - red) / delta + 2.0
            } else {
                (red - green) / delta + 4.0
            };

        Some(hue)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::new(
            quantize(value.red, CHANNEL_MAX),
            quantize(value.green, CHANNEL_MAX),
            quantize(value.blue, CHANNEL_MAX),
        )
    }
}

impl From<Color> for Rgb {
    fn from(value: Color) -> Self {
        value.to_rgb()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn parse_hex_colors() {
        assert_eq!(Color::from_hex("#FFA500"), Ok(Color::new(255, 165, 0)));
        assert_eq!(Color::from_hex("ffa500"), Ok(Color::new(255, 165, 0)));
        assert_eq!(Color::from_hex("  #00ff7f "), Ok(Color::new(0, 255, 127)));
        assert_eq!(Color::from_hex("#f0a"), Ok(Color::new(255, 0, 170)));
        assert_eq!("#000".parse::<Color>(), Ok(Color::BLACK));
    }

    #[test]
    fn reject_malformed_hex_colors() {
        for hex in ["", "#", "#12", "#12345", "#1234567", "#GGGGGG", "#+1+2+3", "#ääbb"] {
            assert_eq!(
                Color::from_hex(hex),
                Err(Error::InvalidHex(hex.to_owned())),
                "{hex:?} should be rejected"
            );
        }
    }

    #[test]
    fn format_hex() {
        assert_eq!(Color::new(255, 165, 0).to_hex(), "#FFA500");
        assert_eq!(Color::new(1, 2, 3).to_string(), "#010203");
        let color = Color::new(18, 52, 86);
        assert_eq!(color.to_hex().parse::<Color>(), Ok(color));
    }

    #[test]
    fn hue_of_primaries() {
        assert_component_eq!(Color::new(255, 0, 0).hue().unwrap(), 0.0);
        assert_component_eq!(Color::new(0, 255, 0).hue().unwrap(), 120.0);
        assert_component_eq!(Color::new(0, 0, 255).hue().unwrap(), 240.0);
        assert_component_eq!(Color::new(255, 0, 255).hue().unwrap(), 300.0);
    }

    #[test]
    fn hue_is_powerless_if_there_is_no_chroma() {
        assert!(Color::WHITE.hue().is_none());
        assert!(Color::BLACK.hue().is_none());
        assert!(Color::new(128, 128, 128).hue().is_none());
    }

    #[test]
    fn normalized_round_trip() {
        let color = Color::new(170, 0, 85);
        let rgb = color.to_rgb();
        assert_component_eq!(rgb.red, 2.0 / 3.0);
        assert_component_eq!(rgb.blue, 1.0 / 3.0);
        assert_eq!(Color::from(rgb), color);
    }

    #[test]
    fn rgb_out_of_range_is_clamped() {
        assert_eq!(Color::from(Rgb::new(-0.1, 0.5, 1.2)), Color::new(0, 128, 255));
        let rgb = Rgb::from_vector(Vector::new(2.0, -1.0, 0.25));
        assert_eq!(rgb, Rgb::new(1.0, 0.0, 0.25));
    }

    #[test]
    fn distance_between_colors() {
        let black = Color::BLACK.to_rgb();
        let white = Color::WHITE.to_rgb();
        assert_component_eq!(black.distance(&white), (3.0 as Component).sqrt());
        let red = Color::new(255, 0, 0).to_rgb();
        assert_component_eq!(red.distance(&red), 0.0);
    }
}
