use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::contacts::DEFAULT_NAME_FIELD;
use crate::error::ConfigError;
use crate::store::DEFAULT_LIST_FIELD;

/// Log configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LogConfig {
    /// Log file path, if not set, logs will be printed to stderr
    pub file: Option<PathBuf>,
    /// Log level, default is "info"
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_log_level(),
        }
    }
}

/// RecordDB configuration
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// JSON seed file; the built-in tutorial data is used when unset
    pub seed: Option<PathBuf>,

    /// Field whose updates append instead of overwrite
    #[serde(default = "default_list_field")]
    pub list_field: String,

    /// Field contacts are looked up by
    #[serde(default = "default_contact_name_field")]
    pub contact_name_field: String,

    /// Log configuration
    #[serde(default)]
    pub log: LogConfig,
}

fn default_list_field() -> String {
    DEFAULT_LIST_FIELD.to_string()
}

fn default_contact_name_field() -> String {
    DEFAULT_NAME_FIELD.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            list_field: default_list_field(),
            contact_name_field: default_contact_name_field(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config_str = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&config_str).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_full_config() {
        let config_str = r#"
seed = "/var/lib/recordb/seed.json"
list_field = "songs"
contact_name_field = "lastName"

[log]
level = "debug"
file = "/tmp/recordb.log"
"#;

        let config: Config = toml::from_str(config_str).unwrap();
        assert_eq!(config.seed, Some(PathBuf::from("/var/lib/recordb/seed.json")));
        assert_eq!(config.list_field, "songs");
        assert_eq!(config.contact_name_field, "lastName");
        assert_eq!(config.log.level, "debug");
        assert_eq!(config.log.file, Some(PathBuf::from("/tmp/recordb.log")));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.list_field, "tracks");
        assert_eq!(config.contact_name_field, "firstName");
        assert_eq!(config.log.level, "info");
        assert!(config.log.file.is_none());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "list_field = \"likes\"").unwrap();
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.list_field, "likes");
    }

    #[test]
    fn test_from_file_errors() {
        let err = Config::from_file("/nonexistent/recordb.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "list_field = [").unwrap();
        let err = Config::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("failed to parse config file"));
    }
}
