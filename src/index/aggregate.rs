//! Weighted aggregation of sub-indices into the overall WQI.

use super::score::IndexScore;
use super::standards::StandardsCatalog;
use super::sub_index::sub_index;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One evaluation request's readings, keyed by parameter name.
///
/// Ephemeral: constructed fresh per request and discarded with the
/// assessment. Any subset of catalog parameters may be present; unknown
/// names are tolerated and excluded at scoring time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeasurementSet(BTreeMap<String, f64>);

impl MeasurementSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: f64) {
        self.0.insert(name.into(), value);
    }

    /// Builder-style insert, convenient in tests and call sites that
    /// assemble a fixed set of readings.
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl FromIterator<(String, f64)> for MeasurementSet {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Compute the weight-normalized WQI over the readings that produce a valid
/// sub-index.
///
/// Parameters whose reading is missing, non-finite, or unknown to the
/// catalog contribute nothing (neither score nor weight). When no parameter
/// survives, there is no meaningful aggregate and `None` is returned; that
/// is a legitimate terminal outcome, not an error.
///
/// The sum is commutative and associative, so the result is independent of
/// the order readings were inserted.
pub fn compute_wqi(readings: &MeasurementSet, catalog: &StandardsCatalog) -> Option<IndexScore> {
    let mut weighted_sum = 0.0;
    let mut total_weight = 0.0;

    for (name, value) in readings.iter() {
        let Some(entry) = catalog.get(name) else {
            log::debug!("no standards entry for parameter {}, excluding", name);
            continue;
        };
        let Some(qi) = sub_index(value, entry) else {
            continue;
        };
        weighted_sum += qi.value() * entry.weight;
        total_weight += entry.weight;
    }

    if total_weight > 0.0 {
        Some(IndexScore::new(weighted_sum / total_weight))
    } else {
        None
    }
}
