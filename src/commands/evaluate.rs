//! Single-sample evaluation, the CLI equivalent of the dashboard's
//! prediction form.

use anyhow::Result;
use std::path::PathBuf;

use crate::config;
use crate::index::{evaluate, MeasurementSet};
use crate::io::{create_file_writer, create_writer, OutputFormat};

pub struct EvaluateConfig {
    pub ph: Option<f64>,
    pub dissolved_oxygen: Option<f64>,
    pub bod: Option<f64>,
    pub cod: Option<f64>,
    pub coliform: Option<f64>,
    pub tds: Option<f64>,
    /// Explicit `--format` flag; falls back to the configured default.
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub verbosity: u8,
}

impl EvaluateConfig {
    // Pure function: flags -> measurement set. Absent flags simply don't
    // appear; they are not zeros.
    fn measurements(&self) -> MeasurementSet {
        let named = [
            ("pH", self.ph),
            ("DO", self.dissolved_oxygen),
            ("BOD", self.bod),
            ("COD", self.cod),
            ("TotalColiform", self.coliform),
            ("TDS", self.tds),
        ];
        named
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name.to_string(), v)))
            .collect()
    }
}

pub fn handle_evaluate(config: EvaluateConfig) -> Result<()> {
    let settings = config::get_config();
    let assessment = evaluate(&config.measurements(), &settings.catalog());

    let format = config.format.unwrap_or_else(|| settings.default_format());
    let mut writer = match &config.output {
        Some(path) => create_file_writer(format, path)?,
        None => create_writer(format, config.verbosity),
    };
    writer.write_assessment(&assessment)
}
