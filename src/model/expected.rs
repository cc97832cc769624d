//! Expectation models
//!
//! An expectation model predicts the match outcome before it is observed,
//! either as a win probability on a logistic curve or as a raw point
//! difference. Every variant stays callable as a plain function so callers
//! can compose their own pipelines.

/// Signature shared by every expectation model.
pub type ExpectedFn = fn(rating: f64, rating_opponent: f64, home_advantage: f64, scale: f64) -> f64;

/// Win probability of the subject party against the opponent.
///
/// `scale` controls the steepness of the curve: a rating lead equal to
/// `scale` maps to roughly a 10:1 win expectation. The result lies in the
/// open interval (0, 1) and is 0.5 when the effective ratings are equal.
///
/// A `scale` of zero is not defended against; the division follows normal
/// IEEE-754 rules and the caller sees the resulting non-finite value.
pub fn expected_probability(
    rating: f64,
    rating_opponent: f64,
    home_advantage: f64,
    scale: f64,
) -> f64 {
    let difference = (rating + home_advantage) - rating_opponent;
    1.0 / (1.0 + 10f64.powf(-difference / scale))
}

/// Expected score difference between the parties. Unbounded; ignores
/// `scale`. Pairs with the score-difference observed model for
/// point-based rating systems.
pub fn expected_difference(
    rating: f64,
    rating_opponent: f64,
    home_advantage: f64,
    _scale: f64,
) -> f64 {
    (rating + home_advantage) - rating_opponent
}

/// Pluggable expectation strategy.
#[derive(Debug, Clone, Copy, Default)]
pub enum ExpectedModel {
    /// Logistic win probability ([`expected_probability`]).
    #[default]
    Probability,
    /// Raw rating difference ([`expected_difference`]).
    Difference,
    /// Caller-supplied function with the same signature.
    Custom(ExpectedFn),
}

impl ExpectedModel {
    /// Evaluate the configured variant.
    pub fn evaluate(
        &self,
        rating: f64,
        rating_opponent: f64,
        home_advantage: f64,
        scale: f64,
    ) -> f64 {
        match self {
            ExpectedModel::Probability => {
                expected_probability(rating, rating_opponent, home_advantage, scale)
            }
            ExpectedModel::Difference => {
                expected_difference(rating, rating_opponent, home_advantage, scale)
            }
            ExpectedModel::Custom(f) => f(rating, rating_opponent, home_advantage, scale),
        }
    }
}
