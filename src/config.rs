//! Rating engine configuration
//!
//! [`EloConfig`] gathers every tunable of the rating pipeline. It is
//! built once (defaults first, then per-field overrides), never mutated
//! afterwards, and shared freely across evaluation threads.

use crate::error::{EloError, Result};
use crate::model::{ExpectedModel, ObservedModel, UpdateModel};
use serde::{Deserialize, Serialize};

/// Default baseline rating assigned to new entities.
pub const DEFAULT_INIT_RATING: f64 = 2600.0;
/// Default steepness divisor of the probability curve.
pub const DEFAULT_SCALE: f64 = 400.0;
/// Default home advantage bonus.
pub const DEFAULT_HOME_ADVANTAGE: f64 = 0.0;
/// Default k-factor.
pub const DEFAULT_K_FACTOR: f64 = 32.0;
/// K-factor used by the tournament preset.
pub const TOURNAMENT_K_FACTOR: f64 = 10.0;

/// Configuration for the rating pipeline.
///
/// The strategy fields are skipped during serialization (function
/// pointers have no serialized form) and come back as the default
/// variants on deserialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EloConfig {
    /// Baseline rating for new entities; also the decay target.
    pub init_rating: f64,
    /// Divisor controlling the steepness of the probability curve.
    pub scale: f64,
    /// Additive rating bonus for the party designated home.
    pub home_advantage: f64,
    /// Multiplier controlling how much one match can move a rating.
    pub k_factor: f64,
    /// Weighting in [0, 1] pulling the subject rating toward
    /// `init_rating` before the match is evaluated; 0 disables decay.
    pub decay_factor: f64,
    /// Same as `decay_factor`, for the opponent. Two distinct factors
    /// allow asymmetric decay.
    pub decay_factor_opponent: f64,
    /// Maximum relative change per update. Takes priority over
    /// `max_change_absolute` when both are set.
    pub max_change_percent: Option<f64>,
    /// Maximum absolute change per update.
    pub max_change_absolute: Option<f64>,
    /// Expectation strategy.
    #[serde(skip)]
    pub expected: ExpectedModel,
    /// Observed-outcome strategy.
    #[serde(skip)]
    pub observed: ObservedModel,
    /// Update strategy.
    #[serde(skip)]
    pub updater: UpdateModel,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            init_rating: DEFAULT_INIT_RATING,
            scale: DEFAULT_SCALE,
            home_advantage: DEFAULT_HOME_ADVANTAGE,
            k_factor: DEFAULT_K_FACTOR,
            decay_factor: 0.0,
            decay_factor_opponent: 0.0,
            max_change_percent: None,
            max_change_absolute: None,
            expected: ExpectedModel::default(),
            observed: ObservedModel::default(),
            updater: UpdateModel::default(),
        }
    }
}

impl EloConfig {
    /// Create a configuration with the standard defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tournament profile: slower-moving ratings via a low k-factor.
    pub fn tournament() -> Self {
        Self {
            k_factor: TOURNAMENT_K_FACTOR,
            ..Self::default()
        }
    }

    /// Override the baseline rating.
    pub fn with_init_rating(mut self, init_rating: f64) -> Self {
        self.init_rating = init_rating;
        self
    }

    /// Override the probability curve scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Override the home advantage bonus.
    pub fn with_home_advantage(mut self, home_advantage: f64) -> Self {
        self.home_advantage = home_advantage;
        self
    }

    /// Override the k-factor.
    pub fn with_k_factor(mut self, k_factor: f64) -> Self {
        self.k_factor = k_factor;
        self
    }

    /// Override the subject decay factor.
    pub fn with_decay_factor(mut self, decay_factor: f64) -> Self {
        self.decay_factor = decay_factor;
        self
    }

    /// Override the opponent decay factor.
    pub fn with_decay_factor_opponent(mut self, decay_factor_opponent: f64) -> Self {
        self.decay_factor_opponent = decay_factor_opponent;
        self
    }

    /// Enable the percentage change limit.
    pub fn with_max_change_percent(mut self, max_change_percent: f64) -> Self {
        self.max_change_percent = Some(max_change_percent);
        self
    }

    /// Enable the absolute change limit.
    pub fn with_max_change_absolute(mut self, max_change_absolute: f64) -> Self {
        self.max_change_absolute = Some(max_change_absolute);
        self
    }

    /// Install an expectation strategy.
    pub fn with_expected(mut self, expected: ExpectedModel) -> Self {
        self.expected = expected;
        self
    }

    /// Install an observed-outcome strategy.
    pub fn with_observed(mut self, observed: ObservedModel) -> Self {
        self.observed = observed;
        self
    }

    /// Install an update strategy.
    pub fn with_updater(mut self, updater: UpdateModel) -> Self {
        self.updater = updater;
        self
    }

    /// Validate configuration parameters.
    ///
    /// Entirely optional: the pipeline itself never validates and lets
    /// float semantics propagate. This catches the configurations that
    /// would produce non-finite ratings or nonsense bounds up front.
    pub fn validate(&self) -> Result<()> {
        if self.scale == 0.0 && matches!(self.expected, ExpectedModel::Probability) {
            return Err(EloError::ConfigurationError {
                message: "Scale must be non-zero with the probability expectation model"
                    .to_string(),
            }
            .into());
        }

        if self.k_factor == 0.0 && matches!(self.updater, UpdateModel::Points) {
            return Err(EloError::ConfigurationError {
                message: "K-factor must be non-zero with the points update model".to_string(),
            }
            .into());
        }

        for (name, factor) in [
            ("Decay factor", self.decay_factor),
            ("Opponent decay factor", self.decay_factor_opponent),
        ] {
            if !(0.0..=1.0).contains(&factor) {
                return Err(EloError::ConfigurationError {
                    message: format!("{} must be within [0, 1], got {}", name, factor),
                }
                .into());
            }
        }

        if let Some(percent) = self.max_change_percent {
            if percent < 0.0 {
                return Err(EloError::ConfigurationError {
                    message: "Maximum percentage change must be non-negative".to_string(),
                }
                .into());
            }
        }

        if let Some(absolute) = self.max_change_absolute {
            if absolute < 0.0 {
                return Err(EloError::ConfigurationError {
                    message: "Maximum absolute change must be non-negative".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}
