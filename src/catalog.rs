//! Interfaces to the collaborators that own colors and variants. The library
//! never loads or stores anything itself.

use std::cmp::Ordering;
use std::convert::Infallible;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::variant::Variant;

/// A color with the name it is listed under in a palette.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedColor {
    /// Name of the color.
    pub name: String,
    /// The color itself.
    #[serde(flatten)]
    pub color: Color,
}

impl NamedColor {
    /// Create a new named color.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Supplies the base colors a mix can be built from, in display order.
pub trait ColorSource {
    /// Return the available colors.
    fn colors(&self) -> Vec<NamedColor>;
}

impl ColorSource for [NamedColor] {
    fn colors(&self) -> Vec<NamedColor> {
        self.to_vec()
    }
}

impl ColorSource for Vec<NamedColor> {
    fn colors(&self) -> Vec<NamedColor> {
        self.clone()
    }
}

/// Receives variants to persist.
pub trait VariantSink {
    /// Error reported by the store.
    type Error;

    /// Persist a variant.
    fn store(&mut self, variant: Variant) -> Result<(), Self::Error>;
}

impl VariantSink for Vec<Variant> {
    type Error = Infallible;

    fn store(&mut self, variant: Variant) -> Result<(), Self::Error> {
        self.push(variant);
        Ok(())
    }
}

/// Sort colors by hue. Achromatic colors come first, the order of colors
/// with equal hue is kept.
pub fn sort_by_hue(colors: &mut [NamedColor]) {
    colors.sort_by(|a, b| match (a.color.hue(), b.color.hue()) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => a.total_cmp(&b),
    });
}
