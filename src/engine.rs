//! The rating update pipeline
//!
//! [`RatingEngine`] owns an immutable [`EloConfig`] and composes the
//! configured models into a single update: decay both ratings, compute
//! expected and observed outcomes, apply the delta, then limit the
//! change. The stage order is part of the numeric contract.

use crate::config::EloConfig;
use crate::model::{clamp, decay::decay};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Full record of one match evaluation: the raw inputs plus every value
/// derived while running the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Pre-decay rating of the subject party.
    pub rating: f64,
    /// Pre-decay rating of the opponent.
    pub rating_opponent: f64,
    /// Match score of the subject party.
    pub score: f64,
    /// Match score of the opponent.
    pub score_opponent: f64,
    /// Subject rating after decay toward the baseline.
    pub decayed_rating: f64,
    /// Opponent rating after decay toward the baseline.
    pub decayed_rating_opponent: f64,
    /// Output of the expectation model.
    pub expected: f64,
    /// Output of the observed-outcome model.
    pub observed: f64,
    /// Final rating of the subject party.
    pub new_rating: f64,
}

/// Computes rating updates for one party of a two-party match.
///
/// The engine is a thin immutable wrapper over its configuration: it
/// holds no cross-call state, performs no I/O, and is safe to share
/// across threads. To rate both sides of a match, call it once per party
/// with the arguments swapped.
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingEngine {
    config: EloConfig,
}

impl RatingEngine {
    /// Create an engine from a configuration.
    pub fn new(config: EloConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine was built with.
    pub fn config(&self) -> &EloConfig {
        &self.config
    }

    /// Rating assigned to an entity with no match history.
    pub fn initial_rating(&self) -> f64 {
        self.config.init_rating
    }

    /// Run the full pipeline and return the subject party's new rating.
    pub fn update_rating(
        &self,
        rating: f64,
        rating_opponent: f64,
        score: f64,
        score_opponent: f64,
    ) -> f64 {
        self.evaluate(rating, rating_opponent, score, score_opponent)
            .new_rating
    }

    /// Run the full pipeline and return every intermediate value.
    pub fn evaluate(
        &self,
        rating: f64,
        rating_opponent: f64,
        score: f64,
        score_opponent: f64,
    ) -> MatchOutcome {
        let cfg = &self.config;

        let decayed_rating = decay(rating, cfg.decay_factor, cfg.init_rating);
        let decayed_rating_opponent =
            decay(rating_opponent, cfg.decay_factor_opponent, cfg.init_rating);

        let expected = cfg.expected.evaluate(
            decayed_rating,
            decayed_rating_opponent,
            cfg.home_advantage,
            cfg.scale,
        );
        let observed = cfg.observed.evaluate(score, score_opponent);

        // The delta applies to the decayed rating, not the raw one, and
        // the change limit is referenced against the decayed rating too.
        let proposed = decayed_rating + cfg.updater.evaluate(observed, expected, cfg.k_factor);
        let new_rating = self.apply_max_change(decayed_rating, proposed);

        debug!(
            rating,
            rating_opponent, expected, observed, new_rating, "evaluated match"
        );

        MatchOutcome {
            rating,
            rating_opponent,
            score,
            score_opponent,
            decayed_rating,
            decayed_rating_opponent,
            expected,
            observed,
            new_rating,
        }
    }

    /// Percent limit wins when both limits are configured.
    fn apply_max_change(&self, old_rating: f64, new_rating: f64) -> f64 {
        if let Some(percent) = self.config.max_change_percent {
            clamp::apply_max_change_percent(percent, old_rating, new_rating)
        } else if let Some(absolute) = self.config.max_change_absolute {
            clamp::apply_max_change_absolute(absolute, old_rating, new_rating)
        } else {
            new_rating
        }
    }
}
