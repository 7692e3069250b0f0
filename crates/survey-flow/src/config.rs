//! Survey configuration
//!
//! ```toml
//! [storage]
//! path = "survey-state.json"
//!
//! [submission]
//! endpoint = "https://example.org/api/submit"
//! timeout_secs = 10
//!
//! [logging]
//! format = "json"
//! filter = "info,survey_flow=debug"
//!
//! [catalog]
//! path = "catalog.toml"
//! ```
//!
//! Every section and field is optional.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use survey_catalog::Catalog;
use survey_store::{FileStore, StoreError};
use survey_submit::{HttpSubmitter, NoopSubmitter, SubmitError, Submitter};

/// Survey configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurveyConfig {
    /// Where answers are persisted
    pub storage: StorageConfig,
    /// Where answers are sent
    pub submission: SubmissionConfig,
    /// Log output
    pub logging: LoggingConfig,
    /// Question catalog source
    pub catalog: CatalogConfig,
}

/// Persistence settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Store file
    pub path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("survey-state.json"),
        }
    }
}

/// Submission settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionConfig {
    /// Endpoint URL; without one submissions are only logged
    pub endpoint: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SubmissionConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: HttpSubmitter::DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Output format
    pub format: LogFormat,
    /// Filter directive used when `RUST_LOG` is unset
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            filter: "info".to_string(),
        }
    }
}

/// Catalog settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// TOML catalog replacing the built-in one
    pub path: Option<PathBuf>,
}

impl SurveyConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a TOML config file
    ///
    /// # Errors
    /// [`ConfigError::Io`] or [`ConfigError::Parse`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        let config = Self::from_toml_str(&raw)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// Parse TOML config text
    ///
    /// # Errors
    /// [`ConfigError::Parse`] on invalid TOML or unknown enum values.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// With store file
    #[inline]
    #[must_use]
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage.path = path.into();
        self
    }

    /// With submission endpoint
    #[inline]
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.submission.endpoint = Some(endpoint.into());
        self
    }

    /// With log format
    #[inline]
    #[must_use]
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.logging.format = format;
        self
    }

    /// With catalog file
    #[inline]
    #[must_use]
    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog.path = Some(path.into());
        self
    }

    /// Submission timeout
    #[inline]
    #[must_use]
    pub fn submission_timeout(&self) -> Duration {
        Duration::from_secs(self.submission.timeout_secs)
    }

    /// Configured catalog, or the built-in one
    ///
    /// # Errors
    /// [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Catalog`] if it is not a valid catalog.
    pub fn load_catalog(&self) -> Result<Catalog, ConfigError> {
        let Some(path) = &self.catalog.path else {
            return Ok(Catalog::builtin());
        };
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::io_error(path, e))?;
        let catalog = Catalog::from_toml_str(&raw)?;
        tracing::info!(path = %path.display(), questions = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Open the store file
    ///
    /// # Errors
    /// See [`FileStore::open`].
    pub fn open_store(&self) -> Result<FileStore, StoreError> {
        FileStore::open(&self.storage.path)
    }

    /// Submitter for the configured endpoint
    ///
    /// # Errors
    /// [`SubmitError::Transport`] if the HTTP client cannot be built.
    pub fn build_submitter(&self) -> Result<Arc<dyn Submitter>, SubmitError> {
        match &self.submission.endpoint {
            Some(endpoint) => Ok(Arc::new(HttpSubmitter::new(
                endpoint.as_str(),
                self.submission_timeout(),
            )?)),
            None => {
                tracing::debug!("no submission endpoint configured");
                Ok(Arc::new(NoopSubmitter))
            }
        }
    }
}
