//! Configuration loading and validation.
//!
//! Configuration lives in a YAML file. Every section is optional; anything left
//! out takes its default.

use rw_atmos::DensityAltitudeCalibration;
use rw_station::FieldAliases;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{AppError, AppResult};

/// Looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "racewx.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub history: HistoryConfig,
    pub station: StationConfig,
    /// Density-altitude calibration pair.
    pub calibration: DensityAltitudeCalibration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history: HistoryConfig::default(),
            station: StationConfig::default(),
            calibration: DensityAltitudeCalibration::REFERENCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub path: PathBuf,
    pub max_entries: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".racewx").join("history.jsonl"),
            max_entries: 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StationConfig {
    /// Observations older than this are rejected at ingest.
    pub max_age_s: u64,
    /// Extra payload keys, tried before the built-in vendor names.
    pub aliases: FieldAliases,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            max_age_s: 900,
            aliases: FieldAliases::empty(),
        }
    }
}

impl StationConfig {
    pub fn effective_aliases(&self) -> FieldAliases {
        self.aliases.merged_with_defaults()
    }
}

/// Load configuration.
///
/// With an explicit `path` the file must exist. Without one, [`CONFIG_FILE_NAME`]
/// in the working directory is used if present, otherwise defaults.
pub fn load_config(path: Option<&Path>) -> AppResult<Config> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (PathBuf::from(CONFIG_FILE_NAME), false),
    };

    if !required && !path.exists() {
        debug!("no {} found; using defaults", CONFIG_FILE_NAME);
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|e| AppError::ConfigFileRead {
        path: path.clone(),
        source: e,
    })?;

    let config = parse_config(&content)?;
    debug!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Parse and validate configuration text.
pub fn parse_config(content: &str) -> AppResult<Config> {
    let config: Config = if content.trim().is_empty() {
        Config::default()
    } else {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))?
    };
    validate_config(&config)?;
    Ok(config)
}

/// Largest staleness window a `chrono::Duration` can hold, in seconds.
const MAX_AGE_LIMIT_S: u64 = (i64::MAX / 1000) as u64;

/// Validate configuration values.
pub fn validate_config(config: &Config) -> AppResult<()> {
    if config.history.max_entries == 0 {
        return Err(AppError::Validation(
            "history.max_entries must be at least 1".to_string(),
        ));
    }

    if config.station.max_age_s > MAX_AGE_LIMIT_S {
        return Err(AppError::Validation(format!(
            "station.max_age_s must be at most {} (got {})",
            MAX_AGE_LIMIT_S, config.station.max_age_s
        )));
    }

    let cal = &config.calibration;
    if !cal.scale.is_finite() || !cal.offset_ft.is_finite() {
        return Err(AppError::Validation(format!(
            "calibration must be finite (scale={}, offset_ft={})",
            cal.scale, cal.offset_ft
        )));
    }

    Ok(())
}

/// Render configuration as YAML.
pub fn to_yaml(config: &Config) -> AppResult<String> {
    serde_yaml::to_string(config)
        .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))
}
