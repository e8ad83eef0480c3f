use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::record::RecordId;

/// Errors returned by record store and contact book operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("No such record: {0}")]
    NoSuchRecord(RecordId),
    #[error("No such contact")]
    NoSuchContact,
    #[error("No such property")]
    NoSuchProperty,
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Errors raised while loading a seed file.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read seed file '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse seed file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_errors_render_tutorial_strings() {
        assert_eq!(StoreError::NoSuchContact.to_string(), "No such contact");
        assert_eq!(StoreError::NoSuchProperty.to_string(), "No such property");
    }

    #[test]
    fn test_no_such_record_names_the_id() {
        let err = StoreError::NoSuchRecord(RecordId::from(42));
        assert_eq!(err.to_string(), "No such record: 42");
    }
}
