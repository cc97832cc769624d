//! Update models
//!
//! An update model turns the gap between observed and expected outcome
//! into a raw rating delta.

/// Signature shared by every update model.
pub type UpdateFn = fn(observed: f64, expected: f64, k_factor: f64) -> f64;

/// Standard Elo update: `k_factor * (observed - expected)`.
pub fn update_expected_scaled(observed: f64, expected: f64, k_factor: f64) -> f64 {
    k_factor * (observed - expected)
}

/// Alternate scaling for point-difference domains:
/// `((observed - expected) / k_factor) / 2`.
///
/// Note that `k_factor` acts as a divisor here, inverted in meaning from
/// [`update_expected_scaled`]; the same value must not be reused across
/// the two variants without re-tuning. A zero `k_factor` follows normal
/// IEEE-754 division rules.
pub fn update_points(observed: f64, expected: f64, k_factor: f64) -> f64 {
    let difference = observed - expected;
    (difference / k_factor) / 2.0
}

/// Pluggable update strategy.
#[derive(Debug, Clone, Copy, Default)]
pub enum UpdateModel {
    /// K-factor scaled delta ([`update_expected_scaled`]).
    #[default]
    ExpectedScaled,
    /// Point-difference scaled delta ([`update_points`]).
    Points,
    /// Caller-supplied function with the same signature.
    Custom(UpdateFn),
}

impl UpdateModel {
    /// Evaluate the configured variant.
    pub fn evaluate(&self, observed: f64, expected: f64, k_factor: f64) -> f64 {
        match self {
            UpdateModel::ExpectedScaled => update_expected_scaled(observed, expected, k_factor),
            UpdateModel::Points => update_points(observed, expected, k_factor),
            UpdateModel::Custom(f) => f(observed, expected, k_factor),
        }
    }
}
