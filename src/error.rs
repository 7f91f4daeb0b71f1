//! Errors reported by the library.

use crate::color::Component;
use crate::mix::ComponentId;

/// Everything that can go wrong while authoring colors or editing a mix.
///
/// None of these are fatal; an operation that fails leaves its target
/// untouched.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A hex color string could not be parsed.
    #[error("Invalid hex color {0:?}: expected 3 or 6 hexadecimal digits")]
    InvalidHex(String),

    /// A ratio was negative, infinite or NaN.
    #[error("Invalid ratio {0}: ratios must be finite and non-negative")]
    InvalidRatio(Component),

    /// The id does not refer to a component of the mix.
    #[error("No component with id {0} in this mix")]
    UnknownComponent(ComponentId),

    /// A search was started without any base colors.
    #[error("Nothing to mix with")]
    NothingToMix,

    /// A [`MixConfig`](crate::MixConfig) value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
