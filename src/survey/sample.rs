//! Raw field samples as they arrive from monitoring datasets.
//!
//! Lab exports are messy: readings come as numbers, numeric strings, or
//! sentinel text like `BDL` (below detection limit) and `NIL`. Sanitization
//! turns each raw reading into either a finite number or an explicit
//! absence before the index core ever sees it.

use crate::index::MeasurementSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors loading a survey dataset.
#[derive(Debug, Error)]
pub enum SurveyError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A reading as found in the raw dataset: numeric, textual, or absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawReading {
    Number(f64),
    Text(String),
    Missing,
}

impl RawReading {
    /// Sanitize into a usable numeric reading.
    ///
    /// Detection-limit and no-sample sentinels, empty strings, and
    /// unparseable text all collapse to `None`; the parameter is then
    /// excluded from aggregation rather than scored as zero.
    pub fn sanitize(&self) -> Option<f64> {
        match self {
            RawReading::Number(value) if value.is_finite() => Some(*value),
            RawReading::Number(_) => None,
            RawReading::Text(text) => sanitize_text(text),
            RawReading::Missing => None,
        }
    }
}

// Sentinels observed in pollution control board exports.
const MISSING_SENTINELS: &[&str] = &["bdl", "nil", "less than 1.8"];

fn sanitize_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lowered = trimmed.to_ascii_lowercase();
    if MISSING_SENTINELS.contains(&lowered.as_str()) {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            log::debug!("unparseable reading {:?} treated as missing", trimmed);
            None
        }
    }
}

/// One surveyed sample: station metadata plus raw parameter readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveySample {
    /// Monitoring station code, when the dataset carries one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,

    /// Water body the sample was drawn from (river, lake, tank).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_body: Option<String>,

    /// Raw readings keyed by parameter name.
    pub readings: BTreeMap<String, RawReading>,
}

impl SurveySample {
    /// Sanitize the raw readings into a measurement set the index core can
    /// evaluate. Unusable readings drop out here.
    pub fn measurements(&self) -> MeasurementSet {
        self.readings
            .iter()
            .filter_map(|(name, raw)| raw.sanitize().map(|value| (name.clone(), value)))
            .collect()
    }
}

/// Load a JSON dataset (an array of samples) from disk.
pub fn load_samples(path: &Path) -> Result<Vec<SurveySample>, SurveyError> {
    let contents = std::fs::read_to_string(path).map_err(|source| SurveyError::Read {
        path: path.display().to_string(),
        source,
    })?;
    let samples: Vec<SurveySample> =
        serde_json::from_str(&contents).map_err(|source| SurveyError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    log::debug!("loaded {} samples from {}", samples.len(), path.display());
    Ok(samples)
}
