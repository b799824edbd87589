// Engine settings, loaded from a JSON file or falling back to defaults
use crate::error::EngineError;
use serde::Deserialize;
use shared::brazilian_format::SeparatorPolicy;
use std::path::Path;

/// Environment variable naming the JSON settings file.
pub const CONFIG_ENV_VAR: &str = "SIMULADOR_ENGINE_CONFIG";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    pub host: String,
    pub port: u16,
    /// How ambiguous separators are read by SanitizeInput
    pub number_format: SeparatorPolicy,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            host: "localhost".to_string(),
            port: 50051,
            number_format: SeparatorPolicy::default(),
        }
    }
}

impl EngineSettings {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let settings: EngineSettings = serde_json::from_str(&content)?;
        if settings.host.trim().is_empty() {
            return Err(EngineError::ConfigError(format!("Empty 'host' in {}", path.display())));
        }
        Ok(settings)
    }

    /// Reads the file named by `SIMULADOR_ENGINE_CONFIG`, or returns the defaults when it is unset.
    pub fn load() -> Result<Self, EngineError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) if !path.trim().is_empty() => {
                tracing::info!(path = %path, "Loading engine settings from file");
                Self::from_file(path.trim())
            }
            _ => {
                tracing::info!("{} not set, using default engine settings", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::brazilian_format::ThreeDigitGroupRule;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.listen_address(), "localhost:50051");
        assert_eq!(settings.number_format, SeparatorPolicy::default());
    }

    #[test]
    fn test_from_file_with_partial_settings() {
        let file = write_config(r#"{ "port": 6000, "number_format": { "three_digit_group": "decimal" } }"#);
        let settings = EngineSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.host, "localhost");
        assert_eq!(settings.port, 6000);
        assert_eq!(settings.number_format.three_digit_group, ThreeDigitGroupRule::Decimal);
        assert_eq!(settings.number_format.long_integer_digits, 4);
    }

    #[test]
    fn test_from_file_invalid_json() {
        let file = write_config("{ port: ");
        let err = EngineSettings::from_file(file.path()).unwrap_err();
        assert!(matches!(err, EngineError::ConfigFormatError { .. }));
    }

    #[test]
    fn test_from_file_empty_host() {
        let file = write_config(r#"{ "host": " " }"#);
        let err = EngineSettings::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Empty 'host'"));
    }

    #[test]
    fn test_from_missing_file() {
        let err = EngineSettings::from_file("does/not/exist.json").unwrap_err();
        assert!(matches!(err, EngineError::IoError { .. }));
    }
}
