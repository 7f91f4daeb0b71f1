//! Tunables for a [`Mix`](crate::Mix) and its ratio search.

use serde::{Deserialize, Serialize};

use crate::color::Component;
use crate::error::{Error, Result};

/// Settings for the hill-climbing ratio search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    /// Upper bound on the number of passes over all components.
    pub max_passes: usize,
    /// Ratio every base color starts the search with.
    pub seed_ratio: Component,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_passes: 1000,
            seed_ratio: 10.0,
        }
    }
}

/// Settings for a [`Mix`](crate::Mix).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MixConfig {
    /// Ratio a newly added component starts with.
    pub initial_ratio: Component,
    /// Amount a ratio changes by on increment, decrement and on every search
    /// move.
    pub step: Component,
    /// Options for [`Mix::find_best_mix`](crate::Mix::find_best_mix).
    pub search: SearchOptions,
}

impl Default for MixConfig {
    fn default() -> Self {
        Self {
            initial_ratio: 1.0,
            step: 1.0,
            search: SearchOptions::default(),
        }
    }
}

impl MixConfig {
    /// Check that all ratios and the step are positive and finite.
    pub fn validate(&self) -> Result<()> {
        let positive = |name: &str, value: Component| {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(Error::InvalidConfig(format!(
                    "{name} must be positive and finite, got {value}"
                )))
            }
        };

        positive("initial_ratio", self.initial_ratio)?;
        positive("step", self.step)?;
        positive("search.seed_ratio", self.search.seed_ratio)?;

        Ok(())
    }
}
