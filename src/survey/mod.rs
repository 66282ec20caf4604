//! Batch evaluation of monitoring survey datasets.

pub mod report;
pub mod sample;

pub use report::{HistogramBucket, SampleResult, SurveyReport, WaterBodySummary};
pub use sample::{load_samples, RawReading, SurveyError, SurveySample};
