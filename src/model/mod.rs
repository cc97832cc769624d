//! Pluggable models for the rating pipeline
//!
//! Each stage of the pipeline (expectation, observed outcome, update,
//! clamp, decay) is built from small pure functions. The `*Model` enums
//! tag the built-in variants and carry a custom-function escape hatch;
//! the free functions remain independently callable.

pub mod clamp;
pub mod decay;
pub mod expected;
pub mod observed;
pub mod update;

// Re-export commonly used items
pub use clamp::{apply_max_change_absolute, apply_max_change_percent, clamp_rating};
pub use decay::decay;
pub use expected::{expected_difference, expected_probability, ExpectedFn, ExpectedModel};
pub use observed::{
    observed_continuous, observed_score_difference, observed_win_loss_draw, ObservedFn,
    ObservedModel,
};
pub use update::{update_expected_scaled, update_points, UpdateFn, UpdateModel};
