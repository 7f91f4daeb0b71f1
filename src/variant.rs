//! A [`Variant`] is the record handed to a store when a mix is saved: the
//! resulting color plus a frozen snapshot of every component.

use serde::{Deserialize, Serialize};

use crate::catalog::VariantSink;
use crate::color::{Color, Component};
use crate::error::{Error, Result};
use crate::mix::Mix;

/// One component of a saved [`Variant`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantComponent {
    /// Name of the component color.
    pub name: String,
    /// Color of the component as `#RRGGBB`.
    pub hex: String,
    /// Ratio of the component.
    pub ratio: Component,
    /// Share of the component in `0.0..=100.0`.
    pub percentage: Component,
}

/// A named snapshot of a completed mix.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Name of the variant.
    pub name: String,
    /// Blended color as `#RRGGBB`.
    pub hex_color: String,
    /// Components in mix order.
    pub components: Vec<VariantComponent>,
}

impl Mix {
    /// Take a snapshot of the current blend.
    pub fn to_variant(&self, name: impl Into<String>) -> Variant {
        let blend = self.blend();

        Variant {
            name: name.into(),
            hex_color: blend.color.to_hex(),
            components: blend
                .shares
                .iter()
                .map(|share| VariantComponent {
                    name: share.name.clone(),
                    hex: share.color.to_hex(),
                    ratio: share.ratio,
                    percentage: share.percentage,
                })
                .collect(),
        }
    }

    /// Snapshot the mix and hand it to `sink`. Returns the stored variant's
    /// blended color.
    pub fn save_variant<S: VariantSink>(
        &self,
        name: impl Into<String>,
        sink: &mut S,
    ) -> std::result::Result<Color, S::Error> {
        let color = self.blend().color;
        let variant = self.to_variant(name);

        tracing::debug!(
            variant = %variant.name,
            color = %color,
            components = variant.components.len(),
            "Saving variant"
        );

        sink.store(variant)?;
        Ok(color)
    }

    /// Restore an editing session from a saved variant. Stored percentages
    /// are ignored and derived again from the ratios.
    pub fn from_variant(variant: &Variant) -> Result<Self> {
        let mut mix = Mix::new();

        for component in &variant.components {
            let color = Color::from_hex(&component.hex)?;
            if !component.ratio.is_finite() || component.ratio < 0.0 {
                return Err(Error::InvalidRatio(component.ratio));
            }

            match mix.components.iter_mut().find(|c| c.name == component.name) {
                Some(existing) => existing.ratio += component.ratio,
                None => {
                    mix.push(component.name.clone(), color, component.ratio);
                }
            }
        }

        mix.recompute();
        Ok(mix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    fn red_and_blue() -> Mix {
        let mut mix = Mix::new();
        let red = mix.add_component("Red", Color::new(255, 0, 0));
        mix.add_component("Blue", Color::new(0, 0, 255));
        mix.set_ratio(red, 2.0).unwrap();
        mix
    }

    #[test]
    fn snapshot_of_a_mix() {
        let variant = red_and_blue().to_variant("Purple-ish");

        assert_eq!(variant.name, "Purple-ish");
        assert_eq!(variant.hex_color, "#AA0055");
        assert_eq!(variant.components.len(), 2);
        assert_eq!(variant.components[0].name, "Red");
        assert_eq!(variant.components[0].hex, "#FF0000");
        assert_eq!(variant.components[0].ratio, 2.0);
        assert_component_eq!(variant.components[0].percentage, 200.0 / 3.0, 1e-3);
        assert_eq!(variant.components[1].hex, "#0000FF");
    }

    #[test]
    fn snapshot_is_frozen() {
        let mut mix = red_and_blue();
        let variant = mix.to_variant("Before");
        mix.clear();
        assert_eq!(variant.hex_color, "#AA0055");
        assert_eq!(variant.components.len(), 2);
    }

    #[test]
    fn serialized_keys_are_camel_case() {
        let json = serde_json::to_value(red_and_blue().to_variant("V")).unwrap();
        assert_eq!(json["hexColor"], "#AA0055");
        assert_eq!(json["components"][1]["name"], "Blue");
        assert_eq!(json["components"][1]["hex"], "#0000FF");
        assert_eq!(json["components"][1]["ratio"], 1.0);
    }

    #[test]
    fn restore_from_variant() {
        let variant = red_and_blue().to_variant("V");
        let mix = Mix::from_variant(&variant).unwrap();

        assert_eq!(mix.len(), 2);
        assert_eq!(mix.blend().color, Color::new(170, 0, 85));
        assert_eq!(mix.to_variant("V"), variant);
    }

    #[test]
    fn restore_rejects_malformed_components() {
        let mut variant = red_and_blue().to_variant("V");
        variant.components[1].hex = "blue".to_owned();
        assert_eq!(
            Mix::from_variant(&variant).unwrap_err(),
            Error::InvalidHex("blue".to_owned())
        );

        let mut variant = red_and_blue().to_variant("V");
        variant.components[0].ratio = -2.0;
        assert_eq!(
            Mix::from_variant(&variant).unwrap_err(),
            Error::InvalidRatio(-2.0)
        );
    }

    #[test]
    fn save_into_a_sink() {
        let mut store: Vec<Variant> = vec![];
        let color = red_and_blue().save_variant("Saved", &mut store).unwrap();

        assert_eq!(color, Color::new(170, 0, 85));
        assert_eq!(store.len(), 1);
        assert_eq!(store[0].name, "Saved");
    }
}
