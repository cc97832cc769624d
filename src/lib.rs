//! Elo Duel - Two-party Elo rating computation
//!
//! This crate computes updated skill ratings for the parties of a single
//! observed match. The pipeline is fully pluggable: expectation,
//! observed-outcome, and update models can be swapped or replaced with
//! custom functions, with optional pre-match decay toward a baseline and
//! post-update change limits.
//!
//! ```
//! use elo_duel::{EloConfig, RatingEngine};
//!
//! let engine = RatingEngine::new(EloConfig::default().with_k_factor(16.0));
//! let new_rating = engine.update_rating(2650.0, 2700.0, 3.0, 1.0);
//! assert!(new_rating > 2650.0);
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod model;

// Re-export commonly used types
pub use config::EloConfig;
pub use engine::{MatchOutcome, RatingEngine};
pub use error::{EloError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
