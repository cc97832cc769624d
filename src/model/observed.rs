//! Observed-outcome models
//!
//! An observed model translates the actual match scores into the same
//! scale the expectation model predicts on.

/// Signature shared by every observed-outcome model.
pub type ObservedFn = fn(score: f64, score_opponent: f64) -> f64;

/// Classic win/loss/draw outcome: 1.0 for a win, 0.0 for a loss, 0.5 for
/// a draw. The draw case is exact equality on the score values.
pub fn observed_win_loss_draw(score: f64, score_opponent: f64) -> f64 {
    if score > score_opponent {
        1.0
    } else if score < score_opponent {
        0.0
    } else {
        0.5
    }
}

/// Laplace-smoothed score ratio in (0, 1), rewarding margin of victory.
///
/// Meaningful for `score >= -1` and `score + score_opponent >= -2`;
/// inputs outside that domain produce out-of-range values without error.
pub fn observed_continuous(score: f64, score_opponent: f64) -> f64 {
    (score + 1.0) / (score + score_opponent + 2.0)
}

/// Raw score difference, unbounded. Pairs with the difference expectation
/// model for point-based rating systems.
pub fn observed_score_difference(score: f64, score_opponent: f64) -> f64 {
    score - score_opponent
}

/// Pluggable observed-outcome strategy.
#[derive(Debug, Clone, Copy, Default)]
pub enum ObservedModel {
    /// 1 / 0 / 0.5 ([`observed_win_loss_draw`]).
    #[default]
    WinLossDraw,
    /// Smoothed score ratio ([`observed_continuous`]).
    Continuous,
    /// Raw score difference ([`observed_score_difference`]).
    ScoreDifference,
    /// Caller-supplied function with the same signature.
    Custom(ObservedFn),
}

impl ObservedModel {
    /// Evaluate the configured variant.
    pub fn evaluate(&self, score: f64, score_opponent: f64) -> f64 {
        match self {
            ObservedModel::WinLossDraw => observed_win_loss_draw(score, score_opponent),
            ObservedModel::Continuous => observed_continuous(score, score_opponent),
            ObservedModel::ScoreDifference => observed_score_difference(score, score_opponent),
            ObservedModel::Custom(f) => f(score, score_opponent),
        }
    }
}
