//! # VaultPulse Vault
//!
//! Vault scanning and the concurrent audit pipeline.
//!
//! This crate ties the pieces together:
//! - [`scanner`] walks the vault directory, pruning the settings directory
//!   and collecting note files in sorted order
//! - [`manager::VaultManager`] reads and parses every note concurrently,
//!   then reduces the results into a single `HealthReport`
//!
//! ## Quick Start
//!
//! ```no_run
//! use vaultpulse_vault::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = VaultConfig::new("/path/to/vault")?;
//!     let manager = VaultManager::new(config)?;
//!
//!     let report = manager.analyze().await?;
//!     println!("{} notes, severity {}", report.total_notes, report.severity);
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! One tokio task per note file handles the read and parse; tasks share
//! nothing and return an immutable [`Note`](vaultpulse_core::Note). The
//! pipeline joins all tasks before any classification, because orphanhood
//! is a whole-vault property: a note is cleared the moment anything links
//! to it, which might be the last file read.
//!
//! ## Error Handling
//!
//! Only two failures are fatal: a vault root that does not exist and I/O
//! errors while walking the tree. A note file that cannot be read (deleted
//! mid-scan, bad encoding) is logged as a warning and excluded from the
//! audit entirely.

pub mod manager;
pub mod scanner;

pub use manager::VaultManager;
pub use scanner::scan_notes;
pub use vaultpulse_core::prelude::*;

pub mod prelude {
    pub use crate::manager::VaultManager;
    pub use crate::scanner::scan_notes;
    pub use vaultpulse_core::prelude::*;
}
