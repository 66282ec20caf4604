//! Water Quality Index core.
//!
//! The evaluation chain is three pure stages: per-parameter sub-index
//! calculation ([`sub_index`]), weighted aggregation ([`compute_wqi`]), and
//! tier classification ([`QualityClass`]). The standards catalog is built
//! once at startup and injected; every stage is re-entrant and side-effect
//! free.

pub mod aggregate;
pub mod classify;
pub mod score;
pub mod standards;
pub mod sub_index;

pub use aggregate::{compute_wqi, MeasurementSet};
pub use classify::QualityClass;
pub use score::IndexScore;
pub use standards::{ScoringPolicy, StandardEntry, StandardsCatalog};
pub use sub_index::{sub_index, sub_index_for};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The outcome of evaluating one measurement set.
///
/// Derived purely from the readings and the catalog; carries no identity or
/// lifecycle beyond the call that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityAssessment {
    /// Aggregate WQI, absent when no parameter yielded a sub-index.
    pub wqi: Option<IndexScore>,
    /// Classification tier for the aggregate.
    pub class: QualityClass,
    /// Per-parameter sub-indices that entered the aggregate.
    pub sub_indices: BTreeMap<String, IndexScore>,
}

impl QualityAssessment {
    pub fn recommendation(&self) -> &'static str {
        self.class.recommendation()
    }
}

/// Evaluate a measurement set against a standards catalog.
///
/// # Examples
///
/// ```
/// use aquameter::index::{evaluate, MeasurementSet, QualityClass, StandardsCatalog};
///
/// let catalog = StandardsCatalog::who_bis();
/// let readings = MeasurementSet::new().with("pH", 7.0).with("BOD", 0.5);
/// let assessment = evaluate(&readings, &catalog);
/// assert_eq!(assessment.class, QualityClass::SafePotable);
/// ```
pub fn evaluate(readings: &MeasurementSet, catalog: &StandardsCatalog) -> QualityAssessment {
    let sub_indices: BTreeMap<String, IndexScore> = readings
        .iter()
        .filter_map(|(name, value)| {
            sub_index_for(name, value, catalog).map(|qi| (name.to_string(), qi))
        })
        .collect();

    let wqi = compute_wqi(readings, catalog);

    QualityAssessment {
        wqi,
        class: QualityClass::from_aggregate(wqi),
        sub_indices,
    }
}
