//! Audit configuration.
//!
//! Follows a builder pattern with validation on `build()`.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for auditing a single vault.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultConfig {
    /// Path to the vault directory
    pub path: PathBuf,
    /// Note file extension, without the leading dot
    pub note_extension: String,
    /// Directory name excluded from scanning (editor settings)
    pub settings_dir: String,
    /// Notes with fewer words than this are reported as stubs
    pub stub_threshold: usize,
}

impl VaultConfig {
    pub const DEFAULT_NOTE_EXTENSION: &'static str = "md";
    pub const DEFAULT_SETTINGS_DIR: &'static str = ".obsidian";
    pub const DEFAULT_STUB_THRESHOLD: usize = 100;

    /// Create a new vault config with builder
    pub fn builder(path: impl Into<PathBuf>) -> VaultConfigBuilder {
        VaultConfigBuilder::new(path)
    }

    /// Create a config with all defaults for the given vault path.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Self::builder(path).build()
    }

    /// Validate the vault configuration
    pub fn validate(&self) -> Result<()> {
        if !self.path.exists() {
            return Err(Error::vault_not_found(&self.path));
        }

        if !self.path.is_dir() {
            return Err(Error::vault_not_found(&self.path));
        }

        if self.note_extension.is_empty() {
            return Err(Error::config_error("Note extension cannot be empty"));
        }

        if self.note_extension.starts_with('.') {
            return Err(Error::config_error(format!(
                "Note extension must not include the dot: {}",
                self.note_extension
            )));
        }

        if self.settings_dir.is_empty() {
            return Err(Error::config_error("Settings directory cannot be empty"));
        }

        Ok(())
    }
}

/// Builder for VaultConfig
pub struct VaultConfigBuilder {
    path: PathBuf,
    note_extension: String,
    settings_dir: String,
    stub_threshold: usize,
}

impl VaultConfigBuilder {
    /// Create a new builder
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            note_extension: VaultConfig::DEFAULT_NOTE_EXTENSION.to_string(),
            settings_dir: VaultConfig::DEFAULT_SETTINGS_DIR.to_string(),
            stub_threshold: VaultConfig::DEFAULT_STUB_THRESHOLD,
        }
    }

    /// Set the note file extension (without the dot)
    pub fn note_extension(mut self, ext: impl Into<String>) -> Self {
        self.note_extension = ext.into();
        self
    }

    /// Set the settings directory name excluded from scanning
    pub fn settings_dir(mut self, dir: impl Into<String>) -> Self {
        self.settings_dir = dir.into();
        self
    }

    /// Set the stub word-count threshold
    pub fn stub_threshold(mut self, words: usize) -> Self {
        self.stub_threshold = words;
        self
    }

    /// Build and validate
    pub fn build(self) -> Result<VaultConfig> {
        let config = VaultConfig {
            path: self.path,
            note_extension: self.note_extension,
            settings_dir: self.settings_dir,
            stub_threshold: self.stub_threshold,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = VaultConfig::new(dir.path()).unwrap();
        assert_eq!(config.note_extension, "md");
        assert_eq!(config.settings_dir, ".obsidian");
        assert_eq!(config.stub_threshold, 100);
    }

    #[test]
    fn builder_overrides_stick() {
        let dir = tempfile::tempdir().unwrap();
        let config = VaultConfig::builder(dir.path())
            .note_extension("markdown")
            .settings_dir(".logseq")
            .stub_threshold(25)
            .build()
            .unwrap();
        assert_eq!(config.note_extension, "markdown");
        assert_eq!(config.settings_dir, ".logseq");
        assert_eq!(config.stub_threshold, 25);
    }

    #[test]
    fn missing_vault_is_rejected() {
        let err = VaultConfig::new("/definitely/not/a/vault").unwrap_err();
        assert!(err.is_vault_not_found());
    }

    #[test]
    fn file_as_vault_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("note.md");
        std::fs::write(&file, "hello").unwrap();
        let err = VaultConfig::new(&file).unwrap_err();
        assert!(err.is_vault_not_found());
    }

    #[test]
    fn dotted_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = VaultConfig::builder(dir.path())
            .note_extension(".md")
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::ConfigError { .. }));
    }
}
