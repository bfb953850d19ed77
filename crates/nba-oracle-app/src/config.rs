// Configuration loading and validation (config/oracle.toml).

use nba_oracle_core::model::{Conference, ReportMeta};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file inside `config/` and `defaults/`.
pub const CONFIG_FILE: &str = "oracle.toml";

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// oracle.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
struct OracleFile {
    meta: ReportMeta,
    paths: PathsConfig,
    divisions: Vec<DivisionConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the per-division CSV files.
    pub input_dir: String,
    /// Destination of the JSON report.
    pub output: String,
}

/// One row of the division table.
#[derive(Debug, Clone, Deserialize)]
pub struct DivisionConfig {
    pub key: String,
    pub file: String,
    pub conference: Conference,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub meta: ReportMeta,
    pub paths: PathsConfig,
    pub divisions: Vec<DivisionConfig>,
    /// Directory relative paths resolve against.
    pub base_dir: PathBuf,
}

impl Config {
    /// Full path of a division's CSV file.
    pub fn division_path(&self, division: &DivisionConfig) -> PathBuf {
        self.base_dir
            .join(&self.paths.input_dir)
            .join(&division.file)
    }

    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.paths.output)
    }
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/oracle.toml` under `base_dir`.
///
/// Does not copy defaults; `load_config()` does.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let file: OracleFile = toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    let config = Config {
        meta: file.meta,
        paths: file.paths,
        divisions: file.divisions,
        base_dir: base_dir.to_path_buf(),
    };

    validate(&config)?;

    Ok(config)
}

/// Seed `config/oracle.toml` from `defaults/oracle.toml` when it is absent.
/// Returns the path written, or `None` if a config already existed.
pub fn ensure_config_file(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.exists() {
        return Ok(None);
    }

    let source = base_dir.join("defaults").join(CONFIG_FILE);
    if !source.is_file() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "no {CONFIG_FILE} in config/ or defaults/ under {}",
                base_dir.display()
            ),
        });
    }

    let copy_error = |e: std::io::Error| ConfigError::DefaultsCopyError {
        message: format!("failed to copy {} to {}: {e}", source.display(), target.display()),
    };
    std::fs::create_dir_all(base_dir.join("config")).map_err(copy_error)?;
    std::fs::copy(&source, &target).map_err(copy_error)?;
    Ok(Some(target))
}

/// Load config relative to the current working directory, seeding
/// `config/` from `defaults/` first.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    ensure_config_file(&cwd)?;
    load_config_from(&cwd)
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationError {
        field: field.into(),
        message: message.into(),
    }
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let target = config.meta.prediction_target.trim();
    if target.is_empty() {
        return Err(invalid("meta.prediction_target", "must not be empty"));
    }
    if !config.meta.dataset_seasons.iter().any(|s| s == target) {
        return Err(invalid(
            "meta.prediction_target",
            format!("{target} is not listed in meta.dataset_seasons"),
        ));
    }

    if config.paths.input_dir.trim().is_empty() {
        return Err(invalid("paths.input_dir", "must not be empty"));
    }
    if config.paths.output.trim().is_empty() {
        return Err(invalid("paths.output", "must not be empty"));
    }

    if config.divisions.is_empty() {
        return Err(invalid("divisions", "at least one division is required"));
    }
    let mut seen = HashSet::new();
    for division in &config.divisions {
        if division.key.trim().is_empty() {
            return Err(invalid("divisions.key", "must not be empty"));
        }
        if division.file.trim().is_empty() {
            return Err(invalid(
                "divisions.file",
                format!("missing file for division {}", division.key),
            ));
        }
        if !seen.insert(division.key.as_str()) {
            return Err(invalid(
                "divisions.key",
                format!("duplicate division {}", division.key),
            ));
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
