//! Descriptive statistics over an evaluated survey.

use crate::index::{evaluate, IndexScore, QualityClass, StandardsCatalog};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::sample::SurveySample;

/// Number of fixed-width histogram buckets over the 0-100 scale.
const HISTOGRAM_BUCKETS: usize = 10;

/// Label used to group samples that carry no water-body name.
const UNKNOWN_WATER_BODY: &str = "(unspecified)";

/// One evaluated sample within a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_body: Option<String>,
    pub wqi: Option<IndexScore>,
    pub class: QualityClass,
}

/// One histogram bucket: a `"lo-hi"` range label and the sample count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistogramBucket {
    pub range: String,
    pub count: usize,
}

/// Aggregated statistics for one water body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterBodySummary {
    pub samples: usize,
    pub average_wqi: IndexScore,
}

/// The full survey report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyReport {
    pub generated: DateTime<Utc>,
    pub sample_count: usize,
    /// Samples that produced a defined aggregate.
    pub evaluated_count: usize,
    /// Samples with no usable readings.
    pub insufficient_count: usize,
    pub mean_wqi: Option<IndexScore>,
    pub median_wqi: Option<IndexScore>,
    /// Per-tier sample counts, keyed by tier label.
    pub class_counts: BTreeMap<String, usize>,
    /// Decile distribution of defined WQI values ("0-10" through "90-100").
    pub histogram: Vec<HistogramBucket>,
    /// Average WQI per water body, over samples with a defined aggregate.
    pub water_bodies: BTreeMap<String, WaterBodySummary>,
    pub results: Vec<SampleResult>,
}

impl SurveyReport {
    /// Evaluate every sample and assemble the report.
    pub fn from_samples(samples: &[SurveySample], catalog: &StandardsCatalog) -> Self {
        let results: Vec<SampleResult> = samples
            .iter()
            .map(|sample| {
                let assessment = evaluate(&sample.measurements(), catalog);
                SampleResult {
                    station: sample.station.clone(),
                    water_body: sample.water_body.clone(),
                    wqi: assessment.wqi,
                    class: assessment.class,
                }
            })
            .collect();

        let defined: Vec<f64> = results
            .iter()
            .filter_map(|r| r.wqi.map(IndexScore::value))
            .collect();

        let mut class_counts = BTreeMap::new();
        for result in &results {
            *class_counts
                .entry(result.class.label().to_string())
                .or_insert(0) += 1;
        }

        Self {
            generated: Utc::now(),
            sample_count: results.len(),
            evaluated_count: defined.len(),
            insufficient_count: results.len() - defined.len(),
            mean_wqi: mean(&defined).map(IndexScore::new),
            median_wqi: median(&defined).map(IndexScore::new),
            class_counts,
            histogram: histogram(&defined),
            water_bodies: water_body_summaries(&results),
            results,
        }
    }

    /// Percentage of all samples falling in the given tier.
    pub fn class_percentage(&self, class: QualityClass) -> f64 {
        if self.sample_count == 0 {
            return 0.0;
        }
        let count = self
            .class_counts
            .get(class.label())
            .copied()
            .unwrap_or(0);
        count as f64 / self.sample_count as f64 * 100.0
    }
}

// Pure function: arithmetic mean, None when empty.
fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

// Pure function: median over a copy, None when empty.
fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}

// Pure function: decile buckets over the 0-100 scale. A score of exactly
// 100 lands in the top bucket.
fn histogram(values: &[f64]) -> Vec<HistogramBucket> {
    let mut counts = [0usize; HISTOGRAM_BUCKETS];
    for value in values {
        let bucket = ((value / 10.0) as usize).min(HISTOGRAM_BUCKETS - 1);
        counts[bucket] += 1;
    }
    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| HistogramBucket {
            range: format!("{}-{}", i * 10, (i + 1) * 10),
            count,
        })
        .collect()
}

fn water_body_summaries(results: &[SampleResult]) -> BTreeMap<String, WaterBodySummary> {
    let mut grouped: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for result in results {
        let Some(wqi) = result.wqi else { continue };
        let name = result
            .water_body
            .clone()
            .unwrap_or_else(|| UNKNOWN_WATER_BODY.to_string());
        grouped.entry(name).or_default().push(wqi.value());
    }

    grouped
        .into_iter()
        .filter_map(|(name, scores)| {
            mean(&scores).map(|avg| {
                (
                    name,
                    WaterBodySummary {
                        samples: scores.len(),
                        average_wqi: IndexScore::new(avg),
                    },
                )
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::survey::sample::RawReading;
    use std::collections::BTreeMap;

    fn sample(water_body: Option<&str>, readings: &[(&str, f64)]) -> SurveySample {
        SurveySample {
            station: None,
            water_body: water_body.map(String::from),
            readings: readings
                .iter()
                .map(|(name, value)| (name.to_string(), RawReading::Number(*value)))
                .collect(),
        }
    }

    fn empty_sample() -> SurveySample {
        SurveySample {
            station: None,
            water_body: None,
            readings: BTreeMap::new(),
        }
    }

    #[test]
    fn counts_partition_into_evaluated_and_insufficient() {
        let samples = vec![
            sample(Some("Lake"), &[("pH", 7.0)]),
            sample(Some("Lake"), &[("BOD", 3.0)]),
            empty_sample(),
        ];
        let report = SurveyReport::from_samples(&samples, &StandardsCatalog::who_bis());

        assert_eq!(report.sample_count, 3);
        assert_eq!(report.evaluated_count, 2);
        assert_eq!(report.insufficient_count, 1);
        assert_eq!(
            report.evaluated_count + report.insufficient_count,
            report.sample_count
        );
    }

    #[test]
    fn class_counts_track_each_tier() {
        let samples = vec![
            // pH 7.0 alone -> 100 -> Safe/Potable
            sample(None, &[("pH", 7.0)]),
            // BOD 1.5 alone -> 50 -> Polluted
            sample(None, &[("BOD", 1.5)]),
            // BOD 3.0 alone -> 0 -> Highly Polluted
            sample(None, &[("BOD", 3.0)]),
            empty_sample(),
        ];
        let report = SurveyReport::from_samples(&samples, &StandardsCatalog::who_bis());

        assert_eq!(report.class_counts.get("Safe/Potable"), Some(&1));
        assert_eq!(report.class_counts.get("Polluted"), Some(&1));
        assert_eq!(report.class_counts.get("Highly Polluted"), Some(&1));
        assert_eq!(report.class_counts.get("Insufficient Data"), Some(&1));
        assert_eq!(report.class_percentage(QualityClass::Polluted), 25.0);
    }

    #[test]
    fn mean_and_median_cover_defined_scores_only() {
        let samples = vec![
            sample(None, &[("pH", 7.0)]),  // 100
            sample(None, &[("BOD", 1.5)]), // 50
            sample(None, &[("BOD", 3.0)]), // 0
            empty_sample(),
        ];
        let report = SurveyReport::from_samples(&samples, &StandardsCatalog::who_bis());

        assert_eq!(report.mean_wqi.unwrap().value(), 50.0);
        assert_eq!(report.median_wqi.unwrap().value(), 50.0);
    }

    #[test]
    fn empty_survey_has_no_statistics() {
        let report = SurveyReport::from_samples(&[], &StandardsCatalog::who_bis());
        assert_eq!(report.mean_wqi, None);
        assert_eq!(report.median_wqi, None);
        assert!(report.water_bodies.is_empty());
        assert_eq!(report.histogram.iter().map(|b| b.count).sum::<usize>(), 0);
    }

    #[test]
    fn histogram_buckets_sum_to_evaluated_count() {
        let samples = vec![
            sample(None, &[("pH", 7.0)]),  // 100 -> top bucket
            sample(None, &[("BOD", 1.5)]), // 50 -> 50-60
            sample(None, &[("BOD", 2.9)]), // ~3.3 -> 0-10
            empty_sample(),
        ];
        let report = SurveyReport::from_samples(&samples, &StandardsCatalog::who_bis());

        let total: usize = report.histogram.iter().map(|b| b.count).sum();
        assert_eq!(total, report.evaluated_count);
        assert_eq!(report.histogram.len(), 10);
        assert_eq!(report.histogram[9].range, "90-100");
        assert_eq!(report.histogram[9].count, 1);
        assert_eq!(report.histogram[5].count, 1);
        assert_eq!(report.histogram[0].count, 1);
    }

    #[test]
    fn water_body_averages_group_defined_scores() {
        let samples = vec![
            sample(Some("River Musi"), &[("pH", 7.0)]),  // 100
            sample(Some("River Musi"), &[("BOD", 1.5)]), // 50
            sample(Some("Lake"), &[("BOD", 3.0)]),       // 0
            sample(None, &[("pH", 7.0)]),                // grouped under fallback
            empty_sample(),                              // no score, not grouped
        ];
        let report = SurveyReport::from_samples(&samples, &StandardsCatalog::who_bis());

        let musi = report.water_bodies.get("River Musi").unwrap();
        assert_eq!(musi.samples, 2);
        assert_eq!(musi.average_wqi.value(), 75.0);

        let lake = report.water_bodies.get("Lake").unwrap();
        assert_eq!(lake.average_wqi.value(), 0.0);

        assert!(report.water_bodies.contains_key("(unspecified)"));
        assert_eq!(report.water_bodies.len(), 3);
    }
}
