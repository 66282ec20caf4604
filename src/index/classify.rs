use colored::Color;
use serde::{Deserialize, Serialize};

use super::score::IndexScore;

/// Classification tier for an aggregate water quality score.
///
/// Three mutually exclusive numeric tiers with closed lower bounds:
/// - **Safe/Potable** (score ≥ 70): suitable for drinking and domestic use
/// - **Polluted** (40 ≤ score < 70): treatment recommended before use
/// - **Highly Polluted** (score < 40): unusable without extensive treatment
///
/// A fourth outcome, **Insufficient Data**, is produced only when no
/// parameter yielded a sub-index at all; it never results from a numeric
/// score.
///
/// # Examples
///
/// ```
/// use aquameter::index::QualityClass;
///
/// let class = QualityClass::from_score(70.0);
/// assert_eq!(class, QualityClass::SafePotable);
/// assert_eq!(class.label(), "Safe/Potable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualityClass {
    HighlyPolluted,
    Polluted,
    SafePotable,
    InsufficientData,
}

impl QualityClass {
    /// Pure function: score → tier.
    ///
    /// Boundaries are closed on the lower bound of each tier: exactly 70 is
    /// Safe/Potable, exactly 40 is Polluted.
    #[inline]
    pub fn from_score(score: f64) -> Self {
        if score >= 70.0 {
            Self::SafePotable
        } else if score >= 40.0 {
            Self::Polluted
        } else {
            Self::HighlyPolluted
        }
    }

    /// Classify an optional aggregate, mapping an absent score to the
    /// explicit insufficient-data outcome.
    pub fn from_aggregate(score: Option<IndexScore>) -> Self {
        match score {
            Some(score) => Self::from_score(score.value()),
            None => Self::InsufficientData,
        }
    }

    /// Display label for this tier.
    #[inline]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SafePotable => "Safe/Potable",
            Self::Polluted => "Polluted",
            Self::HighlyPolluted => "Highly Polluted",
            Self::InsufficientData => "Insufficient Data",
        }
    }

    /// Guidance shown alongside the classification.
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::SafePotable => {
                "Water quality is good and suitable for drinking and domestic use."
            }
            Self::Polluted => {
                "Water shows moderate pollution. Treatment recommended before use. \
                 Not suitable for drinking without proper filtration."
            }
            Self::HighlyPolluted => {
                "Water is severely polluted. Not suitable for any use without \
                 extensive treatment. Immediate intervention required."
            }
            Self::InsufficientData => {
                "No usable readings were provided. Supply at least one monitored \
                 parameter to compute an index."
            }
        }
    }

    /// Terminal color for this tier.
    #[inline]
    pub const fn color(self) -> Color {
        match self {
            Self::SafePotable => Color::Green,
            Self::Polluted => Color::Yellow,
            Self::HighlyPolluted => Color::Red,
            Self::InsufficientData => Color::White,
        }
    }
}
