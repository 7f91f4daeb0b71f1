//! chromix provides the color primitives behind a palette editor: 8-bit
//! colors, RGB and CMYK conversion, and weighted mixes of named colors with a
//! search for the ratios that approximate a target color.

#![deny(missing_docs)]

mod catalog;
mod cmyk;
mod color;
mod config;
mod error;
mod math;
mod mix;
mod search;
mod variant;

pub use catalog::{sort_by_hue, ColorSource, NamedColor, VariantSink};
pub use cmyk::{cmyk_to_rgb, rgb_to_cmyk, Cmyk, CmykValue};
pub use color::{Color, Component, Rgb};
pub use config::{MixConfig, SearchOptions};
pub use error::{Error, Result};
pub use mix::{BlendResult, Changes, ComponentId, Mix, MixComponent, Share, NO_MIX};
pub use search::SearchOutcome;
pub use variant::{Variant, VariantComponent};
