use crate::index::{QualityAssessment, QualityClass};
use crate::survey::SurveyReport;
use colored::*;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

/// Sink for evaluation results, one implementation per output format.
pub trait OutputWriter {
    fn write_assessment(&mut self, assessment: &QualityAssessment) -> anyhow::Result<()>;
    fn write_report(&mut self, report: &SurveyReport) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_assessment(&mut self, assessment: &QualityAssessment) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(assessment)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }

    fn write_report(&mut self, report: &SurveyReport) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        writeln!(self.writer, "{json}")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_assessment_header(&mut self, assessment: &QualityAssessment) -> anyhow::Result<()> {
        writeln!(self.writer, "# Water Quality Assessment")?;
        writeln!(self.writer)?;
        match assessment.wqi {
            Some(wqi) => writeln!(self.writer, "**WQI: {wqi}** ({})", assessment.class.label())?,
            None => writeln!(self.writer, "**{}**", assessment.class.label())?,
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", assessment.recommendation())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_breakdown(&mut self, assessment: &QualityAssessment) -> anyhow::Result<()> {
        if assessment.sub_indices.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Parameter Breakdown")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Parameter | Sub-index |")?;
        writeln!(self.writer, "|-----------|-----------|")?;
        for (name, qi) in &assessment.sub_indices {
            writeln!(self.writer, "| {name} | {qi} |")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_report_summary(&mut self, report: &SurveyReport) -> anyhow::Result<()> {
        writeln!(self.writer, "# Water Quality Survey Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            report.generated.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Samples | {} |", report.sample_count)?;
        writeln!(self.writer, "| Evaluated | {} |", report.evaluated_count)?;
        writeln!(
            self.writer,
            "| Insufficient data | {} |",
            report.insufficient_count
        )?;
        if let Some(mean) = report.mean_wqi {
            writeln!(self.writer, "| Mean WQI | {mean} |")?;
        }
        if let Some(median) = report.median_wqi {
            writeln!(self.writer, "| Median WQI | {median} |")?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_distribution(&mut self, report: &SurveyReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## Classification Distribution")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Tier | Samples | Share |")?;
        writeln!(self.writer, "|------|---------|-------|")?;
        for class in [
            QualityClass::SafePotable,
            QualityClass::Polluted,
            QualityClass::HighlyPolluted,
            QualityClass::InsufficientData,
        ] {
            let count = report.class_counts.get(class.label()).copied().unwrap_or(0);
            writeln!(
                self.writer,
                "| {} | {} | {:.1}% |",
                class.label(),
                count,
                report.class_percentage(class)
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_water_bodies(&mut self, report: &SurveyReport) -> anyhow::Result<()> {
        if report.water_bodies.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Average WQI per Water Body")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Water Body | Samples | Average WQI |")?;
        writeln!(self.writer, "|------------|---------|-------------|")?;
        for (name, summary) in &report.water_bodies {
            writeln!(
                self.writer,
                "| {name} | {} | {} |",
                summary.samples, summary.average_wqi
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_histogram(&mut self, report: &SurveyReport) -> anyhow::Result<()> {
        writeln!(self.writer, "## WQI Distribution")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Range | Samples |")?;
        writeln!(self.writer, "|-------|---------|")?;
        for bucket in &report.histogram {
            writeln!(self.writer, "| {} | {} |", bucket.range, bucket.count)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_assessment(&mut self, assessment: &QualityAssessment) -> anyhow::Result<()> {
        self.write_assessment_header(assessment)?;
        self.write_breakdown(assessment)?;
        Ok(())
    }

    fn write_report(&mut self, report: &SurveyReport) -> anyhow::Result<()> {
        self.write_report_summary(report)?;
        self.write_distribution(report)?;
        self.write_water_bodies(report)?;
        self.write_histogram(report)?;
        Ok(())
    }
}

pub struct TerminalWriter {
    verbosity: u8,
}

impl TerminalWriter {
    pub fn new(verbosity: u8) -> Self {
        Self { verbosity }
    }
}

impl Default for TerminalWriter {
    fn default() -> Self {
        Self::new(0)
    }
}

impl OutputWriter for TerminalWriter {
    fn write_assessment(&mut self, assessment: &QualityAssessment) -> anyhow::Result<()> {
        print_assessment(assessment, self.verbosity);
        Ok(())
    }

    fn write_report(&mut self, report: &SurveyReport) -> anyhow::Result<()> {
        print_report(report);
        Ok(())
    }
}

fn print_assessment(assessment: &QualityAssessment, verbosity: u8) {
    println!("{}", "Water Quality Assessment".bold().blue());
    println!("{}", "========================".blue());
    println!();

    let label = assessment
        .class
        .label()
        .color(assessment.class.color())
        .bold();
    match assessment.wqi {
        Some(wqi) => {
            println!("  WQI:            {}", wqi.to_string().bold());
            println!("  Classification: {label}");
        }
        None => println!("  Classification: {label}"),
    }
    println!();
    println!("  {}", assessment.recommendation());

    if verbosity > 0 && !assessment.sub_indices.is_empty() {
        println!();
        println!("  {}", "Parameter breakdown:".bold());
        for (name, qi) in &assessment.sub_indices {
            let tier = QualityClass::from_score(qi.value());
            println!("    {:<16} {}", name, qi.to_string().color(tier.color()));
        }
    }
}

fn print_report(report: &SurveyReport) {
    println!("{}", "Water Quality Survey Report".bold().blue());
    println!("{}", "===========================".blue());
    println!();
    println!("  Samples:           {}", report.sample_count);
    println!("  Evaluated:         {}", report.evaluated_count);
    println!("  Insufficient data: {}", report.insufficient_count);
    if let Some(mean) = report.mean_wqi {
        println!("  Mean WQI:          {}", mean.to_string().bold());
    }
    if let Some(median) = report.median_wqi {
        println!("  Median WQI:        {median}");
    }
    println!();

    print_class_distribution(report);
    print_water_bodies(report);
}

fn print_class_distribution(report: &SurveyReport) {
    if report.sample_count == 0 {
        return;
    }
    println!("  {}", "Classification distribution:".bold());
    for class in [
        QualityClass::SafePotable,
        QualityClass::Polluted,
        QualityClass::HighlyPolluted,
        QualityClass::InsufficientData,
    ] {
        let count = report.class_counts.get(class.label()).copied().unwrap_or(0);
        if count == 0 {
            continue;
        }
        println!(
            "    {:<20} {:>4} ({:.1}%)",
            class.label().color(class.color()),
            count,
            report.class_percentage(class)
        );
    }
    println!();
}

fn print_water_bodies(report: &SurveyReport) {
    if report.water_bodies.is_empty() {
        return;
    }
    println!("  {}", "Average WQI per water body:".bold());
    for (name, summary) in &report.water_bodies {
        let tier = QualityClass::from_score(summary.average_wqi.value());
        println!(
            "    {:<24} {} ({} samples)",
            name,
            summary.average_wqi.to_string().color(tier.color()),
            summary.samples
        );
    }
    println!();
}

/// Build a writer targeting stdout for the requested format.
pub fn create_writer(format: OutputFormat, verbosity: u8) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(verbosity)),
    }
}

/// Build a writer targeting a file. Terminal output makes no sense in a
/// file, so it degrades to markdown.
pub fn create_file_writer(
    format: OutputFormat,
    path: &Path,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    let file = std::fs::File::create(path)?;
    Ok(match format {
        OutputFormat::Json => Box::new(JsonWriter::new(file)),
        OutputFormat::Markdown | OutputFormat::Terminal => Box::new(MarkdownWriter::new(file)),
    })
}
