//! Configuration loading for aquameter.
//!
//! An optional `.aquameter.toml` may extend the built-in standards catalog
//! with additional monitored parameters and set output defaults. The file is
//! discovered by walking ancestor directories from the working directory,
//! parsed once, and cached for the life of the process. A broken config
//! degrades to defaults with a warning; it never aborts an evaluation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::index::{StandardEntry, StandardsCatalog};
use crate::io::OutputFormat;

pub const CONFIG_FILE_NAME: &str = ".aquameter.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AquameterConfig {
    /// Additional standards entries merged over the built-in table.
    /// Entries reuse built-in names to override them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standards: Option<BTreeMap<String, StandardEntry>>,

    /// Output defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub default_format: Option<String>,
}

impl AquameterConfig {
    /// Build the standards catalog: built-in WHO/BIS table, extended with
    /// whatever the config declares. Invalid entries are skipped with a
    /// warning inside the merge.
    pub fn catalog(&self) -> StandardsCatalog {
        let mut catalog = StandardsCatalog::who_bis();
        if let Some(extensions) = &self.standards {
            catalog.merge(extensions);
        }
        catalog
    }

    /// Output format used when the CLI does not pass `--format`. Unknown
    /// names degrade to terminal with a warning.
    pub fn default_format(&self) -> OutputFormat {
        let Some(name) = self
            .output
            .as_ref()
            .and_then(|output| output.default_format.as_deref())
        else {
            return OutputFormat::Terminal;
        };
        match name {
            "json" => OutputFormat::Json,
            "markdown" => OutputFormat::Markdown,
            "terminal" => OutputFormat::Terminal,
            other => {
                log::warn!("unknown default_format {:?} in config, using terminal", other);
                OutputFormat::Terminal
            }
        }
    }
}

static CONFIG: OnceLock<AquameterConfig> = OnceLock::new();

// Pure function to read config file contents.
fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    fs::read_to_string(path)
}

fn parse_config(contents: &str) -> Result<AquameterConfig, String> {
    toml::from_str::<AquameterConfig>(contents)
        .map_err(|e| format!("Failed to parse {CONFIG_FILE_NAME}: {e}"))
}

// Pure function to try loading config from a specific path.
fn try_load_config_from_path(config_path: &Path) -> Option<AquameterConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("failed to read {}: {}", config_path.display(), e);
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration from the nearest `.aquameter.toml`, defaulting when
/// none is found.
pub fn load_config() -> AquameterConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!("failed to get current directory: {}. Using defaults.", e);
            return AquameterConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_default()
}

/// Get the cached configuration.
pub fn get_config() -> &'static AquameterConfig {
    CONFIG.get_or_init(load_config)
}
