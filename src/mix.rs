//! A [`Mix`] is an ordered list of named colors, each with a ratio. The mix
//! keeps its [`BlendResult`] current: every mutation recomputes the blended
//! color and the percentage share of each component.
//!
//! Blending is a ratio weighted average of the normalized RGB components. It
//! is not a pigment model.
//!
//! ```rust
//! use chromix::{Color, Mix};
//! let mut mix = Mix::new();
//! mix.add_component("Red", Color::new(255, 0, 0));
//! mix.add_component("Red", Color::new(255, 0, 0));
//! mix.add_component("Blue", Color::new(0, 0, 255));
//! assert_eq!(mix.blend().color, Color::new(170, 0, 85));
//! ```

use std::fmt;

use bitflags::bitflags;

use crate::catalog::ColorSource;
use crate::color::{Color, Component, Rgb};
use crate::config::MixConfig;
use crate::error::{Error, Result};
use crate::math::weighted_mean;

/// Color reported when there is nothing to blend. It is a display fallback,
/// not the result of mixing anything.
pub const NO_MIX: Color = Color::new(128, 128, 128);

/// Stable handle to a component of a [`Mix`]. Ids are never reused by the
/// mix that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentId(u32);

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

bitflags! {
    /// What a mutation of a [`Mix`] changed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Changes : u8 {
        /// The ratio of a component changed.
        const RATIO = 1 << 0;
        /// A component was removed from the mix.
        const REMOVED = 1 << 1;
    }
}

/// One ingredient of a [`Mix`].
#[derive(Clone, Debug, PartialEq)]
pub struct MixComponent {
    pub(crate) id: ComponentId,
    pub(crate) name: String,
    pub(crate) color: Color,
    pub(crate) ratio: Component,
    pub(crate) percentage: Component,
}

impl MixComponent {
    /// The id of the component inside its mix.
    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// The name of the component.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The color of the component.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The relative weight of the component.
    pub fn ratio(&self) -> Component {
        self.ratio
    }

    /// The share of the component in `0.0..=100.0`, derived from the ratios
    /// of the whole mix.
    pub fn percentage(&self) -> Component {
        self.percentage
    }
}

/// The share of a single component in a [`BlendResult`].
#[derive(Clone, Debug, PartialEq)]
pub struct Share {
    /// Id of the component.
    pub id: ComponentId,
    /// Name of the component.
    pub name: String,
    /// Color of the component.
    pub color: Color,
    /// Ratio of the component at the time of blending.
    pub ratio: Component,
    /// Percentage of the total ratio.
    pub percentage: Component,
}

/// Output of blending a [`Mix`].
#[derive(Clone, Debug, PartialEq)]
pub struct BlendResult {
    /// The blended color, or [`NO_MIX`] when there is nothing to blend.
    pub color: Color,
    /// The blended color before quantizing to 8-bit channels.
    pub rgb: Rgb,
    /// Sum of all component ratios.
    pub total_ratio: Component,
    /// Shares of every component, in mix order.
    pub shares: Vec<Share>,
}

impl BlendResult {
    fn empty() -> Self {
        Self {
            color: NO_MIX,
            rgb: NO_MIX.to_rgb(),
            total_ratio: 0.0,
            shares: vec![],
        }
    }

    /// Returns true if at least one component has a positive ratio. When
    /// false, `color` is the [`NO_MIX`] sentinel.
    pub fn is_mixed(&self) -> bool {
        self.total_ratio > 0.0
    }

    /// Look up the percentage of the component with the given name.
    pub fn percentage(&self, name: &str) -> Option<Component> {
        self.shares
            .iter()
            .find(|share| share.name == name)
            .map(|share| share.percentage)
    }
}

/// An in-progress weighted combination of named colors.
#[derive(Clone, Debug)]
pub struct Mix {
    pub(crate) components: Vec<MixComponent>,
    next_id: u32,
    pub(crate) config: MixConfig,
    blend: BlendResult,
}

impl Default for Mix {
    fn default() -> Self {
        Self::new()
    }
}

impl Mix {
    /// Create an empty mix with the default configuration.
    pub fn new() -> Self {
        Self {
            components: vec![],
            next_id: 0,
            config: MixConfig::default(),
            blend: BlendResult::empty(),
        }
    }

    /// Create an empty mix with the given configuration.
    pub fn with_config(config: MixConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            ..Self::new()
        })
    }

    /// Add every color supplied by `source` as a component.
    pub fn seed_from<S: ColorSource + ?Sized>(&mut self, source: &S) {
        for named in source.colors() {
            self.add_component(named.name, named.color);
        }
    }

    /// The configuration of this mix.
    pub fn config(&self) -> &MixConfig {
        &self.config
    }

    /// All components in mix order.
    pub fn components(&self) -> &[MixComponent] {
        &self.components
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if the mix has no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Find a component by id.
    pub fn get(&self, id: ComponentId) -> Option<&MixComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Find a component by name.
    pub fn find(&self, name: &str) -> Option<&MixComponent> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Sum of all ratios.
    pub fn total_ratio(&self) -> Component {
        self.components.iter().map(|c| c.ratio).sum()
    }

    /// The result of the last recompute.
    pub fn blend(&self) -> &BlendResult {
        &self.blend
    }

    /// Add a color to the mix. If a component with the same name exists its
    /// ratio is incremented instead.
    pub fn add_component(&mut self, name: impl Into<String>, color: Color) -> ComponentId {
        let name = name.into();

        let id = match self.components.iter_mut().find(|c| c.name == name) {
            Some(existing) => {
                existing.ratio += self.config.step;
                existing.id
            }
            None => self.push(name, color, self.config.initial_ratio),
        };

        self.recompute();
        id
    }

    /// Parse `hex` and add it with [`Mix::add_component`]. The mix is left
    /// untouched if the hex color is malformed.
    pub fn add_hex(&mut self, name: impl Into<String>, hex: &str) -> Result<ComponentId> {
        let color = Color::from_hex(hex)?;
        Ok(self.add_component(name, color))
    }

    /// Set the ratio of a component. A ratio of zero keeps the component in
    /// the mix, see [`Mix::prune`].
    pub fn set_ratio(&mut self, id: ComponentId, ratio: Component) -> Result<Changes> {
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(Error::InvalidRatio(ratio));
        }

        let index = self.index_of(id)?;
        if self.components[index].ratio == ratio {
            return Ok(Changes::empty());
        }

        self.components[index].ratio = ratio;
        self.recompute();

        Ok(Changes::RATIO)
    }

    /// Increase the ratio of a component by one step.
    pub fn increment(&mut self, id: ComponentId) -> Result<Changes> {
        let index = self.index_of(id)?;
        self.components[index].ratio += self.config.step;
        self.recompute();

        Ok(Changes::RATIO)
    }

    /// Decrease the ratio of a component by one step. A component that
    /// reaches zero is removed from the mix.
    pub fn decrement(&mut self, id: ComponentId) -> Result<Changes> {
        let index = self.index_of(id)?;
        let ratio = self.components[index].ratio - self.config.step;

        let changes = if ratio <= 0.0 {
            self.remove_at(index);
            Changes::RATIO | Changes::REMOVED
        } else {
            self.components[index].ratio = ratio;
            Changes::RATIO
        };

        self.recompute();
        Ok(changes)
    }

    /// Remove a component from the mix.
    pub fn remove_component(&mut self, id: ComponentId) -> Result<Changes> {
        let index = self.index_of(id)?;
        self.remove_at(index);
        self.recompute();

        Ok(Changes::REMOVED)
    }

    /// Remove every component with a ratio of zero.
    pub fn prune(&mut self) -> Changes {
        let before = self.components.len();
        self.components.retain(|c| c.ratio > 0.0);

        if self.components.len() == before {
            return Changes::empty();
        }

        tracing::debug!(removed = before - self.components.len(), "Pruned empty components");
        self.recompute();
        Changes::REMOVED
    }

    /// Remove all components.
    pub fn clear(&mut self) {
        self.components.clear();
        self.recompute();
    }

    /// Blend the components and refresh every percentage.
    pub fn recompute(&mut self) -> &BlendResult {
        let total_ratio = self.total_ratio();

        for component in self.components.iter_mut() {
            component.percentage = if total_ratio > 0.0 {
                100.0 * component.ratio / total_ratio
            } else {
                0.0
            };
        }

        let (color, rgb) = match self.mixed_rgb() {
            Some(rgb) => (Color::from(rgb), rgb),
            None => (NO_MIX, NO_MIX.to_rgb()),
        };

        let shares = self
            .components
            .iter()
            .map(|c| Share {
                id: c.id,
                name: c.name.clone(),
                color: c.color,
                ratio: c.ratio,
                percentage: c.percentage,
            })
            .collect();

        self.blend = BlendResult {
            color,
            rgb,
            total_ratio,
            shares,
        };

        &self.blend
    }

    /// Blend the current ratios without touching any derived state. `None`
    /// when the total ratio is not positive.
    pub(crate) fn mixed_rgb(&self) -> Option<Rgb> {
        weighted_mean(
            self.components
                .iter()
                .map(|c| (c.color.to_rgb().to_vector(), c.ratio)),
        )
        .map(Rgb::from_vector)
    }

    pub(crate) fn push(&mut self, name: String, color: Color, ratio: Component) -> ComponentId {
        let id = ComponentId(self.next_id);
        self.next_id += 1;

        self.components.push(MixComponent {
            id,
            name,
            color,
            ratio,
            percentage: 0.0,
        });

        id
    }

    fn index_of(&self, id: ComponentId) -> Result<usize> {
        self.components
            .iter()
            .position(|c| c.id == id)
            .ok_or(Error::UnknownComponent(id))
    }

    fn remove_at(&mut self, index: usize) {
        let removed = self.components.remove(index);
        tracing::debug!(
            component = %removed.id,
            name = %removed.name,
            "Removed component from mix"
        );
    }
}
