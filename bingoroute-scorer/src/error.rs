//! Error types raised while configuring the recommendation scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors returned by [`ScoreWeights::validate`](crate::ScoreWeights::validate).
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ScoreWeightsError {
    /// A weight was NaN or infinite.
    #[error("score weight {field} must be finite, got {value}")]
    NonFinite {
        /// Name of the offending weight.
        field: &'static str,
        /// Value supplied.
        value: f64,
    },
    /// A weight was negative.
    #[error("score weight {field} must not be negative, got {value}")]
    Negative {
        /// Name of the offending weight.
        field: &'static str,
        /// Value supplied.
        value: f64,
    },
    /// The highly-rated threshold fell outside the rating scale.
    #[error("highly-rated threshold {threshold} must lie within 0.0..=5.0")]
    ThresholdOutOfRange {
        /// Threshold supplied.
        threshold: f64,
    },
}
