use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use jsonschema::{JSONSchema, ValidationError};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{comprehension::AggregationKind, emotion::ConfigMap};

const CONFIG_SCHEMA: &str = include_str!("../emo-comprehension.schema.json");

/// Reads a JSON document and returns its top-level object verbatim.
pub fn load_config(config_path: &Path) -> Result<ConfigMap> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("failed to read {}", config_path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", config_path.display()))
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
    #[serde(default)]
    pub comprehension: ComprehensionConfig,
    #[serde(default)]
    pub response: ResponseConfig,
}

fn default_logging_filter() -> String {
    "info".to_string()
}

fn default_logging_rotation() -> LoggingRotation {
    LoggingRotation::Daily
}

fn default_enabled_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LoggingRotation {
    Daily,
    Hourly,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_filter")]
    pub filter: String,
    /// JSON log files are written here when set.
    #[serde(default)]
    pub dir: Option<PathBuf>,
    #[serde(default = "default_logging_rotation")]
    pub rotation: LoggingRotation,
    #[serde(default = "default_enabled_true")]
    pub stderr_enabled: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_logging_filter(),
            dir: None,
            rotation: default_logging_rotation(),
            stderr_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComprehensionConfig {
    #[serde(default)]
    pub aggregation: AggregationKind,
    /// Passed to the comprehension stage untouched.
    #[serde(default)]
    pub settings: ConfigMap,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseConfig {
    #[serde(default)]
    pub model: Option<String>,
}

impl Config {
    pub fn load(config_path: &Path) -> Result<Self> {
        let raw = load_config(config_path)?;
        let mut config = Self::from_map(raw)
            .with_context(|| format!("invalid config {}", config_path.display()))?;

        let config_base = config_path.parent().unwrap_or_else(|| Path::new("."));
        if let Some(dir) = config.logging.dir.as_mut()
            && !dir.is_absolute()
        {
            *dir = config_base.join(&*dir);
        }

        Ok(config)
    }

    pub fn from_map(raw: ConfigMap) -> Result<Self> {
        let value = Value::Object(raw.into_iter().collect());
        validate_against_schema(&value)?;
        serde_json::from_value(value).context("failed to deserialize config")
    }
}

fn validate_against_schema(config_value: &Value) -> Result<()> {
    let schema: Value =
        serde_json::from_str(CONFIG_SCHEMA).context("failed to parse embedded config schema")?;
    let compiled =
        JSONSchema::compile(&schema).map_err(|e| anyhow!("failed to compile schema: {e}"))?;

    match compiled.validate(config_value) {
        Ok(()) => Ok(()),
        Err(errors_iter) => {
            let validation_errors: Vec<ValidationError> = errors_iter.collect();
            let messages: Vec<String> = validation_errors
                .into_iter()
                .map(|error| error.to_string())
                .collect();
            Err(anyhow!("config validation failed: {}", messages.join("; ")))
        }
    }
}
