//! Find component ratios that approximate a target color.
//!
//! The search is coordinate-wise hill climbing: each pass visits every
//! component in order, tries one step up and then one step down, and keeps a
//! move only if it strictly reduces the distance to the target. It stops
//! after a pass without any accepted move, or when the pass limit is hit.
//! Local minima are possible and are reported like any other result.

use crate::catalog::NamedColor;
use crate::color::{Color, Component, Rgb};
use crate::error::{Error, Result};
use crate::mix::{BlendResult, Mix, NO_MIX};

/// Result of [`Mix::find_best_mix`].
#[derive(Clone, Debug, PartialEq)]
pub struct SearchOutcome {
    /// Blend of the best ratios found.
    pub blend: BlendResult,
    /// Distance between the blend and the target in normalized RGB.
    pub distance: Component,
    /// Number of passes that were run.
    pub passes: usize,
    /// Number of accepted moves.
    pub accepted: usize,
    /// Distance before the first pass followed by the distance after every
    /// pass. Never increases.
    pub history: Vec<Component>,
}

impl Mix {
    /// Replace the components of this mix with `base_colors` and adjust their
    /// ratios to approximate `target`.
    ///
    /// Every base color starts with the configured seed ratio. Components
    /// whose ratio drops to zero stay in the mix. An empty `base_colors`
    /// leaves the mix untouched and reports [`Error::NothingToMix`].
    pub fn find_best_mix(
        &mut self,
        target: Color,
        base_colors: &[NamedColor],
    ) -> Result<SearchOutcome> {
        if base_colors.is_empty() {
            return Err(Error::NothingToMix);
        }

        let options = self.config.search.clone();
        let step = self.config.step;

        self.components.clear();
        for named in base_colors {
            if !self.components.iter().any(|c| c.name == named.name) {
                self.push(named.name.clone(), named.color, options.seed_ratio);
            }
        }

        tracing::debug!(
            target = %target,
            components = self.components.len(),
            max_passes = options.max_passes,
            "Searching for best mix"
        );

        let target = target.to_rgb();
        let mut current = self.distance_to(&target);
        let mut history = vec![current];
        let mut passes = 0;
        let mut accepted = 0;

        let mut improved = true;
        while improved && passes < options.max_passes {
            improved = false;
            passes += 1;

            for index in 0..self.components.len() {
                let original = self.components[index].ratio;

                let mut candidates = vec![original + step];
                if original > 0.0 {
                    candidates.push((original - step).max(0.0));
                }

                for ratio in candidates {
                    self.components[index].ratio = ratio;
                    let distance = self.distance_to(&target);

                    if distance < current {
                        tracing::trace!(
                            component = %self.components[index].id,
                            ratio,
                            distance,
                            "Accepted move"
                        );
                        current = distance;
                        improved = true;
                        accepted += 1;
                        break;
                    }

                    self.components[index].ratio = original;
                }
            }

            history.push(current);
        }

        let blend = self.recompute().clone();

        tracing::debug!(
            passes,
            accepted,
            distance = current,
            color = %blend.color,
            "Search finished"
        );

        Ok(SearchOutcome {
            blend,
            distance: current,
            passes,
            accepted,
            history,
        })
    }

    fn distance_to(&self, target: &Rgb) -> Component {
        let mixed = self.mixed_rgb().unwrap_or_else(|| NO_MIX.to_rgb());
        mixed.distance(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, MixConfig, SearchOptions};

    const RED: Color = Color::new(255, 0, 0);
    const GREEN: Color = Color::new(0, 255, 0);
    const BLUE: Color = Color::new(0, 0, 255);

    fn primaries() -> Vec<NamedColor> {
        vec![
            NamedColor::new("Red", RED),
            NamedColor::new("Green", GREEN),
            NamedColor::new("Blue", BLUE),
        ]
    }

    #[test]
    fn nothing_to_mix_with() {
        let mut mix = Mix::new();
        let red = mix.add_component("Red", RED);

        assert_eq!(mix.find_best_mix(BLUE, &[]), Err(Error::NothingToMix));
        assert_eq!(mix.len(), 1);
        assert!(mix.get(red).is_some());
    }

    #[test]
    fn converges_on_an_exact_mix() {
        let mut reference = Mix::new();
        reference.add_component("Red", RED);
        reference.add_component("Green", GREEN);
        let target = reference.blend().color;
        assert_eq!(target, Color::new(128, 128, 0));

        let mut mix = Mix::new();
        let outcome = mix.find_best_mix(target, &primaries()).unwrap();

        assert!(outcome.distance < 0.01, "distance {}", outcome.distance);
        assert!(outcome.passes < 1000);
        assert_eq!(outcome.blend.color, target);

        let red = mix.find("Red").unwrap().ratio();
        let green = mix.find("Green").unwrap().ratio();
        let blue = mix.find("Blue").unwrap().ratio();
        assert_eq!(red, green);
        assert_eq!(blue, 0.0);
        assert_component_eq!(outcome.blend.percentage("Blue").unwrap(), 0.0);
    }

    #[test]
    fn finds_a_pure_base_color() {
        let mut mix = Mix::new();
        let outcome = mix.find_best_mix(RED, &primaries()).unwrap();

        assert_component_eq!(outcome.distance, 0.0);
        assert_eq!(outcome.blend.color, RED);
        assert_component_eq!(outcome.blend.percentage("Red").unwrap(), 100.0);
    }

    #[test]
    fn distance_never_increases() {
        let mut mix = Mix::new();
        let target = Color::new(201, 87, 33);
        let bases = vec![
            NamedColor::new("Red", RED),
            NamedColor::new("Yellow", Color::new(255, 255, 0)),
            NamedColor::new("Black", Color::BLACK),
            NamedColor::new("White", Color::WHITE),
        ];

        let outcome = mix.find_best_mix(target, &bases).unwrap();

        assert_eq!(outcome.history.len(), outcome.passes + 1);
        assert!(outcome.history.windows(2).all(|pair| pair[1] <= pair[0]));
        assert_eq!(outcome.history.last().copied(), Some(outcome.distance));
        assert!(outcome.distance < outcome.history[0]);
    }

    #[test]
    fn unreachable_target_is_a_local_minimum() {
        // Green can not be made from red and blue; the search still ends
        // with the closest blend it found.
        let mut mix = Mix::new();
        let bases = vec![NamedColor::new("Red", RED), NamedColor::new("Blue", BLUE)];
        let outcome = mix.find_best_mix(Color::new(10, 200, 30), &bases).unwrap();

        assert!(outcome.distance > 0.5);
        assert_eq!(outcome.blend.color.green, 0);
        assert_eq!(mix.len(), 2);
    }

    #[test]
    fn seed_ratio_and_pass_limit_come_from_the_config() {
        let config = MixConfig {
            search: SearchOptions {
                max_passes: 1,
                seed_ratio: 3.0,
            },
            ..Default::default()
        };

        let mut mix = Mix::with_config(config).unwrap();
        let outcome = mix.find_best_mix(RED, &primaries()).unwrap();

        assert_eq!(outcome.passes, 1);
        // One pass moves every component by at most one step.
        for component in mix.components() {
            assert!((component.ratio() - 3.0).abs() <= 1.0);
        }
    }

    #[test]
    fn previous_components_are_replaced() {
        let mut mix = Mix::new();
        mix.add_component("Cyan", Color::new(0, 255, 255));
        mix.find_best_mix(BLUE, &primaries()).unwrap();

        assert!(mix.find("Cyan").is_none());
        assert_eq!(mix.len(), 3);
    }

    #[test]
    fn duplicate_base_names_collapse() {
        let mut mix = Mix::new();
        let bases = vec![NamedColor::new("Red", RED), NamedColor::new("Red", RED)];
        let outcome = mix.find_best_mix(RED, &bases).unwrap();

        assert_eq!(mix.len(), 1);
        assert_component_eq!(outcome.distance, 0.0);
        // Nothing to improve on, the first pass is also the last.
        assert_eq!(outcome.passes, 1);
        assert_eq!(outcome.accepted, 0);
    }
}
