//! Type-safe score scale for the quality index system.
//!
//! Both per-parameter sub-indices and the aggregate WQI live on the same
//! 0-100 scale. Encoding the clamp in a newtype means no formula branch can
//! leak an out-of-range value into aggregation or display.

use serde::{Deserialize, Serialize};

/// Score on the 0-100 water quality scale.
///
/// Values are clamped to [0.0, 100.0] at construction, so a sub-index built
/// from an adversarial reading (say a BOD of 10000 mg/L) still aggregates
/// safely.
///
/// # Examples
///
/// ```rust
/// use aquameter::index::IndexScore;
///
/// let score = IndexScore::new(96.4);
/// assert_eq!(score.value(), 96.4);
///
/// // Formula overshoot is clamped, not propagated
/// let clamped = IndexScore::new(-650.0);
/// assert_eq!(clamped.value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct IndexScore(f64);

impl IndexScore {
    /// Create a new score, clamping to [0.0, 100.0].
    pub fn new(value: f64) -> Self {
        Self(value.clamp(0.0, 100.0))
    }

    /// Get the raw score value.
    pub fn value(self) -> f64 {
        self.0
    }
}

// Display is the user-facing rendering: two decimal places everywhere.
impl std::fmt::Display for IndexScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
