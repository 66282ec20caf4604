//! Batch analysis of a monitoring survey dataset.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config;
use crate::io::{create_file_writer, create_writer, OutputFormat};
use crate::survey::{load_samples, SurveyReport};

pub struct SurveyConfig {
    pub dataset: PathBuf,
    /// Explicit `--format` flag; falls back to the configured default.
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
}

pub fn handle_survey(config: SurveyConfig) -> Result<()> {
    let samples = load_samples(&config.dataset)
        .with_context(|| format!("could not load dataset {}", config.dataset.display()))?;
    log::info!("evaluating {} samples", samples.len());

    let settings = config::get_config();
    let report = SurveyReport::from_samples(&samples, &settings.catalog());

    let format = config.format.unwrap_or_else(|| settings.default_format());
    let mut writer = match &config.output {
        Some(path) => create_file_writer(format, path)?,
        None => create_writer(format, 0),
    };
    writer.write_report(&report)
}
