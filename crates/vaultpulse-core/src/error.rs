//! Error types for the vault auditor.
//!
//! All fatal failures are represented by the [`Error`] enum. Per-note read
//! failures are deliberately not errors: the pipeline logs and skips them.

use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// The core error type for all vaultpulse operations.
#[derive(ThisError, Debug)]
pub enum Error {
    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Vault root missing or not a directory
    #[error("Vault directory not found: {path}")]
    VaultNotFound { path: PathBuf },

    /// Invalid configuration
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// Generic unclassified error
    #[error("Error: {0}")]
    Other(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an IO error
    pub fn io(err: io::Error) -> Self {
        Error::Io(err)
    }

    /// Create a vault not found error
    pub fn vault_not_found(path: impl Into<PathBuf>) -> Self {
        Error::VaultNotFound { path: path.into() }
    }

    /// Create a configuration error
    pub fn config_error(reason: impl Into<String>) -> Self {
        Error::ConfigError {
            reason: reason.into(),
        }
    }

    /// Create a generic error
    pub fn other(reason: impl Into<String>) -> Self {
        Error::Other(reason.into())
    }

    /// Whether this error indicates a missing or unusable vault root.
    pub fn is_vault_not_found(&self) -> bool {
        matches!(self, Error::VaultNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = Error::vault_not_found("/nowhere/vault");
        assert_eq!(err.to_string(), "Vault directory not found: /nowhere/vault");
        assert!(err.is_vault_not_found());

        let err = Error::config_error("stub threshold cannot be zero");
        assert_eq!(
            err.to_string(),
            "Configuration error: stub threshold cannot be zero"
        );
        assert!(!err.is_vault_not_found());
    }

    #[test]
    fn io_errors_convert() {
        fn read_missing() -> Result<String> {
            let content = std::fs::read_to_string("/definitely/not/here.md")?;
            Ok(content)
        }
        assert!(matches!(read_missing(), Err(Error::Io(_))));
    }
}
