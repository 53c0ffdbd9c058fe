use anyhow::Context;
use quote_analytics::api::builder::{DEFAULT_CHART_FILE, DEFAULT_INPUT_FILE, DEFAULT_REPORT_FILE};
use quote_analytics::models::DEFAULT_DATE_FORMAT;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

// YAML-serializable configuration structure
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ConfigYaml {
    pub input: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub chart: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub date_format: Option<String>,
}

// Holds the settings of one report run
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub input: PathBuf,
    pub report: PathBuf,
    pub chart: PathBuf,
    pub json: Option<PathBuf>,
    pub date_format: String,
}

/// Command-line values that take precedence over file and environment settings
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub input: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub chart: Option<PathBuf>,
    pub json: Option<PathBuf>,
    pub date_format: Option<String>,
}

impl AppConfig {
    // Load configuration from an explicit YAML file, CONFIG_FILE, or environment variables
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = config_file {
            return Self::from_yaml(path);
        }

        if let Ok(config_file) = env::var("CONFIG_FILE") {
            Self::from_yaml(Path::new(&config_file))
        } else {
            Ok(Self::from_env())
        }
    }

    // Load configuration from YAML file
    pub fn from_yaml(file_path: &Path) -> anyhow::Result<Self> {
        let yaml_content = fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read config file {}", file_path.display()))?;

        let yaml_config: ConfigYaml = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Failed to parse YAML config {}", file_path.display()))?;

        Ok(Self::from_parts(yaml_config))
    }

    // Load all configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self::from_parts(ConfigYaml {
            input: non_empty("QUOTE_INPUT").map(PathBuf::from),
            report: non_empty("QUOTE_REPORT").map(PathBuf::from),
            chart: non_empty("QUOTE_CHART").map(PathBuf::from),
            json: non_empty("QUOTE_JSON").map(PathBuf::from),
            date_format: non_empty("QUOTE_DATE_FORMAT"),
        })
    }

    fn from_parts(parts: ConfigYaml) -> Self {
        Self {
            input: parts.input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE)),
            report: parts.report.unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_FILE)),
            chart: parts.chart.unwrap_or_else(|| PathBuf::from(DEFAULT_CHART_FILE)),
            json: parts.json,
            date_format: parts.date_format.unwrap_or_else(|| DEFAULT_DATE_FORMAT.to_string()),
        }
    }

    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(input) = overrides.input {
            self.input = input;
        }
        if let Some(report) = overrides.report {
            self.report = report;
        }
        if let Some(chart) = overrides.chart {
            self.chart = chart;
        }
        if overrides.json.is_some() {
            self.json = overrides.json;
        }
        if let Some(date_format) = overrides.date_format {
            self.date_format = date_format;
        }
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_parts(ConfigYaml::default())
    }
}
