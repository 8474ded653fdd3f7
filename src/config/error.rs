//! Typed error variants for configuration resolution.
//!
//! Library-level code returns `Result<T, ConfigError>`; the binary wraps
//! these in `anyhow` with context. A malformed color is deliberately not an
//! error here: accessors log it and fall back to the caller's default.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::properties::SyntaxError;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The override file exists but its bytes could not be read.
    #[error("failed to read config override {path:?}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The override file was read but is not valid configuration text.
    /// Aborts resolution for the session, like an unreadable file.
    #[error("invalid config override {path:?}: {source}")]
    Syntax {
        path: PathBuf,
        #[source]
        source: SyntaxError,
    },

    /// The key is absent and the caller supplied no default.
    #[error("cannot find property '{key}' in config")]
    MissingKey { key: String },

    /// A present value could not be converted to the requested type.
    #[error("property '{key}' = '{value}' is not a valid {expected}: {reason}")]
    Malformed {
        key: String,
        value: String,
        expected: &'static str,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn malformed(
        key: &str,
        value: &str,
        expected: &'static str,
        reason: impl ToString,
    ) -> Self {
        Self::Malformed {
            key: key.to_string(),
            value: value.to_string(),
            expected,
            reason: reason.to_string(),
        }
    }

    /// Whether the error came from loading the override file rather than from a single key
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Self::Load { .. } | Self::Syntax { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_key() {
        let err = ConfigError::MissingKey {
            key: "waifu.name".to_string(),
        };
        assert_eq!(err.to_string(), "cannot find property 'waifu.name' in config");

        let err = ConfigError::malformed("baloon.width", "wide", "integer", "invalid digit");
        assert_eq!(
            err.to_string(),
            "property 'baloon.width' = 'wide' is not a valid integer: invalid digit"
        );
        assert!(!err.is_load_failure());
    }

    #[test]
    fn test_load_failure_keeps_source() {
        let err = ConfigError::Load {
            path: PathBuf::from("config/config.properties"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.is_load_failure());
        assert!(std::error::Error::source(&err).is_some());
    }
}
