//! WHO/BIS water quality standards catalog.
//!
//! Each monitored parameter carries an ideal value, acceptable bounds, a
//! relative weight, and a scoring policy tag. The policy tag is what the
//! sub-index calculator dispatches on, so adding a parameter (from the
//! built-in table or from configuration) never touches the scoring code.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a parameter's reading maps onto the 0-100 sub-index scale.
///
/// Real-world index construction scores a range-centered parameter like pH
/// differently from a pollutant concentration where "absent" is ideal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoringPolicy {
    /// Centered on an ideal inside an acceptable band (pH). Mild penalty
    /// per unit of deviation inside [min, max], double rate outside.
    RangeCentered,
    /// Pollutant where the ideal concentration is zero (BOD, COD,
    /// coliforms). Linear decay to 0 at `max`, steeper decay beyond it.
    ZeroIdeal,
    /// Positive ideal with an upper ceiling (DO, TDS). Deviation from the
    /// ideal scaled by the ceiling; past the ceiling the excess is scored.
    BoundedIdeal,
}

/// Standards entry for one monitored parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardEntry {
    /// Target value; 0.0 for pollutants where "absent" is ideal.
    pub ideal: f64,
    /// Lower acceptable bound. Only meaningful for range-centered
    /// parameters; 0.0 otherwise.
    #[serde(default)]
    pub min: f64,
    /// Upper acceptable bound.
    pub max: f64,
    /// Relative importance in the aggregate. Positive; weights are
    /// normalized at aggregation time and need not sum to any total.
    pub weight: f64,
    /// Scoring policy the sub-index calculator dispatches on.
    pub policy: ScoringPolicy,
}

impl StandardEntry {
    /// Validate bounds and weight. Returns a human-readable reason when the
    /// entry cannot be scored safely.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.weight > 0.0) {
            return Err(format!("weight must be positive, got {}", self.weight));
        }
        if !(self.max > 0.0) {
            return Err(format!("max must be positive, got {}", self.max));
        }
        if self.min >= self.max {
            return Err(format!(
                "min ({}) must be below max ({})",
                self.min, self.max
            ));
        }
        Ok(())
    }
}

/// Immutable catalog of standards, keyed by parameter name.
///
/// Constructed once at startup (built-in table, optionally extended from
/// configuration) and injected into the calculator; never mutated during
/// evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardsCatalog {
    entries: BTreeMap<String, StandardEntry>,
}

impl StandardsCatalog {
    /// The built-in WHO/BIS table for the six parameters the evaluation
    /// form collects.
    pub fn who_bis() -> Self {
        let mut entries = BTreeMap::new();
        entries.insert(
            "pH".to_string(),
            StandardEntry {
                ideal: 7.0,
                min: 6.5,
                max: 8.5,
                weight: 4.0,
                policy: ScoringPolicy::RangeCentered,
            },
        );
        entries.insert(
            "DO".to_string(),
            StandardEntry {
                ideal: 6.0,
                min: 5.0,
                max: 14.0,
                weight: 5.0,
                policy: ScoringPolicy::BoundedIdeal,
            },
        );
        entries.insert(
            "BOD".to_string(),
            StandardEntry {
                ideal: 0.0,
                min: 0.0,
                max: 3.0,
                weight: 5.0,
                policy: ScoringPolicy::ZeroIdeal,
            },
        );
        entries.insert(
            "COD".to_string(),
            StandardEntry {
                ideal: 0.0,
                min: 0.0,
                max: 10.0,
                weight: 4.0,
                policy: ScoringPolicy::ZeroIdeal,
            },
        );
        entries.insert(
            "TotalColiform".to_string(),
            StandardEntry {
                ideal: 0.0,
                min: 0.0,
                max: 50.0,
                weight: 5.0,
                policy: ScoringPolicy::ZeroIdeal,
            },
        );
        entries.insert(
            "TDS".to_string(),
            StandardEntry {
                ideal: 300.0,
                min: 0.0,
                max: 500.0,
                weight: 4.0,
                policy: ScoringPolicy::BoundedIdeal,
            },
        );
        Self { entries }
    }

    /// Empty catalog, mostly useful in tests.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Look up the standards for a parameter name.
    pub fn get(&self, name: &str) -> Option<&StandardEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in stable name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StandardEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Insert or replace an entry after validating it. Invalid entries are
    /// rejected with the validation reason.
    pub fn insert(&mut self, name: impl Into<String>, entry: StandardEntry) -> Result<(), String> {
        entry.validate()?;
        self.entries.insert(name.into(), entry);
        Ok(())
    }

    /// Merge configured entries over this catalog. Entries that fail
    /// validation are skipped with a warning rather than aborting startup.
    pub fn merge(&mut self, extensions: &BTreeMap<String, StandardEntry>) {
        for (name, entry) in extensions {
            match self.insert(name.clone(), entry.clone()) {
                Ok(()) => log::debug!("standards entry for {} loaded from config", name),
                Err(reason) => {
                    log::warn!("skipping invalid standards entry for {}: {}", name, reason)
                }
            }
        }
    }
}

impl Default for StandardsCatalog {
    fn default() -> Self {
        Self::who_bis()
    }
}
