use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "aquameter")]
#[command(about = "Water quality index calculator and survey analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the WQI for a single set of readings
    Evaluate {
        /// pH reading
        #[arg(long)]
        ph: Option<f64>,

        /// Dissolved oxygen (mg/L)
        #[arg(long = "do")]
        dissolved_oxygen: Option<f64>,

        /// Biochemical oxygen demand (mg/L)
        #[arg(long)]
        bod: Option<f64>,

        /// Chemical oxygen demand (mg/L)
        #[arg(long)]
        cod: Option<f64>,

        /// Total coliform count (MPN/100ml)
        #[arg(long)]
        coliform: Option<f64>,

        /// Total dissolved solids (mg/L)
        #[arg(long)]
        tds: Option<f64>,

        /// Output format (defaults to the configured format, or terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Increase verbosity (show the per-parameter breakdown)
        #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
        verbosity: u8,
    },

    /// Analyze a survey dataset (JSON array of samples)
    Survey {
        /// Path to the dataset file
        dataset: PathBuf,

        /// Output format (defaults to the configured format, or terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::OutputFormat::Terminal,
        }
    }
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
