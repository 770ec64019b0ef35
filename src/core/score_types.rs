//! Type-safe score scales for resiliency scoring.
//!
//! This module provides newtype wrappers for the two scales used by the
//! scoring engine. By encoding the scale in the type system, we prevent
//! bugs caused by mixing a raw weighted sum with a normalized percentage.
//!
//! # Score Scales
//!
//! - `RawScore`: sum of triggered criteria weights, floored at 0
//! - `ScorePercentage`: normalized resiliency quality in [0, 1], higher
//!   is better
//!
//! # Examples
//!
//! ```rust
//! use riskmap::core::score_types::{RawScore, ScorePercentage};
//!
//! let raw = RawScore::new(8.0);
//! assert_eq!(raw.value(), 8.0);
//!
//! // Out-of-bounds values are clamped
//! let clamped = ScorePercentage::new(1.5);
//! assert_eq!(clamped.value(), 1.0);
//! ```

use serde::{Deserialize, Serialize};

/// Raw weighted score for one resource.
///
/// Sum of the priorities of all triggered criteria. Priorities are
/// validated to be positive, so the sum can never legitimately go
/// negative; values below zero are floored at construction.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct RawScore(f64);

impl RawScore {
    /// Create a new raw score, flooring at 0.0.
    pub fn new(value: f64) -> Self {
        Self(value.max(0.0))
    }

    /// Get the raw score value.
    pub fn value(self) -> f64 {
        self.0
    }
}

/// Normalized resiliency quality on the 0-1 scale, higher is better.
///
/// Computed as `1 - raw / max`. Values are clamped to [0.0, 1.0] at
/// construction, so a raw score above the configured ceiling floors the
/// percentage at 0 instead of going negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct ScorePercentage(f64);

impl ScorePercentage {
    /// Create a new score percentage, clamping to [0.0, 1.0].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use riskmap::core::score_types::ScorePercentage;
    /// let score = ScorePercentage::new(0.6667);
    /// assert_eq!(score.value(), 0.6667);
    ///
    /// let clamped = ScorePercentage::new(-0.25);
    /// assert_eq!(clamped.value(), 0.0);
    /// ```
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the percentage value.
    pub fn value(self) -> f64 {
        self.0
    }
}

// Implement Display for user-facing output
impl std::fmt::Display for RawScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl std::fmt::Display for ScorePercentage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}", self.0)
    }
}
