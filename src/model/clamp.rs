//! Post-update change limits
//!
//! A clamp bounds how far a single match can move a rating, either as a
//! percentage of the old rating or as an absolute amount. The generic
//! interval clamp is exposed on its own so callers can compute bounds
//! however they like.

/// Clamp `value` into the interval `[min, max]`.
pub fn clamp_rating(min: f64, max: f64, value: f64) -> f64 {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Limit `new_rating` to within `max_change_percent` of `old_rating`,
/// e.g. 0.2 allows a 20% move in either direction.
pub fn apply_max_change_percent(max_change_percent: f64, old_rating: f64, new_rating: f64) -> f64 {
    let min = old_rating * (1.0 - max_change_percent);
    let max = old_rating * (1.0 + max_change_percent);
    clamp_rating(min, max, new_rating)
}

/// Limit `new_rating` to within `max_change_absolute` rating points of
/// `old_rating`.
pub fn apply_max_change_absolute(
    max_change_absolute: f64,
    old_rating: f64,
    new_rating: f64,
) -> f64 {
    let min = old_rating - max_change_absolute;
    let max = old_rating + max_change_absolute;
    clamp_rating(min, max, new_rating)
}
