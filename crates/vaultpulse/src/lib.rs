//! # VaultPulse
//!
//! Report rendering and the CLI surface.

pub mod report;

pub use report::{render_human, render_json};
pub use vaultpulse_core::prelude::*;
pub use vaultpulse_vault::VaultManager;
