//! Math utility functions.

use euclid::default::Vector3D;
use num_traits::{Float, NumCast};

use crate::color::Component;

/// Channel vector used for blending and distance calculations.
pub type Vector = Vector3D<Component>;

/// Returns true if the value is close enough to zero to be treated as zero.
pub fn almost_zero<T: Float>(value: T) -> bool {
    value.abs() <= T::epsilon()
}

/// Clamp a vector so every channel falls inside `0.0..=1.0`.
pub fn clamp_unit(vector: Vector) -> Vector {
    vector.clamp(Vector::zero(), Vector::new(1.0, 1.0, 1.0))
}

/// Scale a normalized value by `scale`, round half away from zero and store
/// it in an integer channel bounded by `scale`.
pub fn quantize<T: NumCast + Default>(value: Component, scale: Component) -> T {
    let scaled = num_traits::clamp((value * scale).round(), 0.0, scale);
    num_traits::cast(scaled).unwrap_or_default()
}

/// Weighted average of `(vector, weight)` pairs. Returns `None` when the
/// weights do not sum to a positive value.
pub fn weighted_mean(items: impl IntoIterator<Item = (Vector, Component)>) -> Option<Vector> {
    let (sum, total) = items
        .into_iter()
        .fold((Vector::zero(), 0.0), |(sum, total), (vector, weight)| {
            (sum + vector * weight, total + weight)
        });

    if total > 0.0 {
        Some(sum / total)
    } else {
        None
    }
}
