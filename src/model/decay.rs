//! Inactivity decay toward a baseline rating

/// Pull `rating` toward `baseline` by the weighting `decay_factor`, a
/// linear interpolation: `rating * decay_factor + baseline * (1 -
/// decay_factor)`.
///
/// Decay is one-directional. It only applies when `rating > baseline` and
/// `decay_factor > 0`, so it models inactivity rust rather than two-sided
/// regression toward the mean: an above-baseline rating is pulled down, a
/// below-baseline rating is never raised. Factors of 0 and 1 are both
/// identities. Factors outside [0, 1] are not validated here and will
/// overshoot or invert the interpolation.
pub fn decay(rating: f64, decay_factor: f64, baseline: f64) -> f64 {
    if rating > baseline && decay_factor > 0.0 {
        return rating * decay_factor + baseline * (1.0 - decay_factor);
    }
    rating
}
