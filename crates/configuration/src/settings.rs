use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section carries defaults, so an absent file or a partial file is valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub logging: LoggingSettings,
    pub analysis: AnalysisSettings,
    pub sample: SampleSettings,
    pub agents: AgentSettings,
    pub output: OutputSettings,
}

/// Controls the tracing subscriber installed at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive (e.g. "info", "canopy=debug"). `RUST_LOG` wins when set.
    pub level: String,
    /// When set, logs go to a daily rolling file in this directory instead of stderr.
    pub directory: Option<PathBuf>,
    /// File name prefix for the rolling log files.
    pub file_prefix: String,
}

/// Parameters for building the analysis result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Whether the rich, multi-agent analysis path may be used.
    /// When false every analysis takes the data-derived fallback path.
    pub rich_analysis_enabled: bool,
}

/// Parameters for the synthetic demo dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleSettings {
    pub rows: usize,
    /// Inclusive lower bound of the uniform emission draw.
    pub min_emission: f64,
    /// Exclusive upper bound of the uniform emission draw.
    pub max_emission: f64,
    /// Fixes the random draw for reproducible samples.
    pub seed: Option<u64>,
}

/// Settings for the simulated agent network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSettings {
    pub server_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

/// How the CLI renders results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

// --- Default Implementations ---

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
            file_prefix: "canopy.log".to_string(),
        }
    }
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            rich_analysis_enabled: true,
        }
    }
}

impl Default for SampleSettings {
    fn default() -> Self {
        Self {
            rows: 50,
            min_emission: 100.0,
            max_emission: 1000.0,
            seed: None,
        }
    }
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:5555".to_string(),
        }
    }
}

impl Settings {
    /// Checks cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample.rows == 0 {
            return Err(ConfigError::ValidationError(
                "sample.rows must be greater than zero".to_string(),
            ));
        }
        if !(self.sample.min_emission < self.sample.max_emission) {
            return Err(ConfigError::ValidationError(format!(
                "sample.min_emission ({}) must be below sample.max_emission ({})",
                self.sample.min_emission, self.sample.max_emission
            )));
        }
        if self.agents.server_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "agents.server_url must not be empty".to_string(),
            ));
        }
        if self.logging.file_prefix.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "logging.file_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
