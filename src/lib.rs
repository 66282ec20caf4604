// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod index;
pub mod io;
pub mod survey;

// Re-export commonly used types
pub use crate::index::{
    compute_wqi, evaluate, sub_index, sub_index_for, IndexScore, MeasurementSet, QualityAssessment,
    QualityClass, ScoringPolicy, StandardEntry, StandardsCatalog,
};

pub use crate::survey::{load_samples, SurveyError, SurveyReport, SurveySample};

pub use crate::io::{create_writer, OutputFormat, OutputWriter};
