use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{
    AgentSettings, AnalysisSettings, LoggingSettings, OutputFormat, OutputSettings,
    SampleSettings, Settings,
};

/// The file looked up when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "canopy.toml";

/// Prefix for environment overrides, e.g. `CANOPY__ANALYSIS__RICH_ANALYSIS_ENABLED=false`.
pub const ENV_PREFIX: &str = "CANOPY";

/// Loads the application settings.
///
/// Sources are layered in order: built-in defaults, the TOML file, then
/// `CANOPY__*` environment variables. An explicitly requested file must exist;
/// the default `canopy.toml` is optional.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let (file, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (Path::new(DEFAULT_CONFIG_FILE).to_path_buf(), false),
    };

    let builder = config::Config::builder()
        .add_source(config::File::from(file).required(required))
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Missing keys fall back to the serde defaults on each section.
    let settings = builder.try_deserialize::<Settings>()?;
    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[analysis]\nrich_analysis_enabled = false\n\n[sample]\nrows = 10\nseed = 7"
        )
        .unwrap();

        let settings = load_settings(Some(file.path())).unwrap();

        assert!(!settings.analysis.rich_analysis_enabled);
        assert_eq!(settings.sample.rows, 10);
        assert_eq!(settings.sample.seed, Some(7));
        assert_eq!(settings.sample.max_emission, 1000.0);
        assert_eq!(settings.agents.server_url, "http://localhost:5555");
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(
            load_settings(Some(&missing)),
            Err(ConfigError::LoadError(_))
        ));
    }

    #[test]
    fn invalid_values_fail_validation() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[sample]\nmin_emission = 10.0\nmax_emission = 5.0").unwrap();

        assert!(matches!(
            load_settings(Some(file.path())),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn output_format_reads_lowercase() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[output]\nformat = \"json\"").unwrap();

        let settings = load_settings(Some(file.path())).unwrap();
        assert_eq!(settings.output.format, OutputFormat::Json);
    }
}
