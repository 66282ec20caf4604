//! CLI command implementations for aquameter operations.
//!
//! Each submodule handles a specific command with its configuration and
//! execution logic:
//! - **evaluate**: Compute the WQI for one set of readings
//! - **survey**: Evaluate a survey dataset and report its statistics
//! - **init**: Initialize a new aquameter configuration file

pub mod evaluate;
pub mod init;
pub mod survey;

pub use evaluate::{handle_evaluate, EvaluateConfig};
pub use init::init_config;
pub use survey::{handle_survey, SurveyConfig};
