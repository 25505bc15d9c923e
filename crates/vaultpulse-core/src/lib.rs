//! # VaultPulse Core
//!
//! Core data models, error types, and configuration for the vault health
//! auditor. This crate defines the canonical types that all other crates
//! depend on.
//!
//! ## Architecture Principles
//!
//! - **Dependencies**: serde for serialization, thiserror for errors, nothing else
//! - **Zero Panic in Libraries**: fallible operations return `Result<T, Error>`
//! - **Deterministic Output**: report collections are ordered, so the same
//!   vault state always yields the same serialized report
//! - **Builder Pattern**: configuration is assembled through a validating builder
//!
//! ## Core Modules
//!
//! - [`models`] - Note, health report, and severity types
//! - [`error`] - Error enum and Result alias
//! - [`config`] - Vault audit configuration
//!
//! ## Usage
//!
//! ```
//! use vaultpulse_core::prelude::*;
//!
//! let severity = HealthSeverity::from_issue_count(12);
//! assert_eq!(severity, HealthSeverity::Fair);
//! ```
//!
//! ```no_run
//! use vaultpulse_core::prelude::*;
//!
//! fn configure() -> Result<VaultConfig> {
//!     VaultConfig::builder("/path/to/vault")
//!         .stub_threshold(50)
//!         .build()
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;

pub use config::{VaultConfig, VaultConfigBuilder};
pub use error::{Error, Result};
pub use models::{HealthReport, HealthSeverity, Note, StubNote, note_title};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::VaultConfig;
    pub use crate::error::{Error, Result};
    pub use crate::models::{HealthReport, HealthSeverity, Note, StubNote, note_title};
}
