//! # VaultPulse Graph
//!
//! Link resolution and vault health analysis.
//!
//! Provides:
//! - Title index with deterministic duplicate handling
//! - Wikilink resolution (anchor stripping, broken link collection)
//! - Orphan detection
//! - Whole-vault health aggregation
//!
//! ## Resolution Model
//!
//! Wikilinks address notes by title (file stem). The [`NoteIndex`] maps
//! every title to a single representative file, electing the smallest path
//! in component order when titles collide; the full groups feed the
//! duplicate-titles finding. [`resolve_links`] classifies every outgoing
//! link as resolved or broken, and [`HealthAnalyzer`] folds notes, index,
//! and link analysis into one [`HealthReport`].
//!
//! ## Quick Start
//!
//! ```
//! use vaultpulse_graph::{HealthAnalyzer, NoteIndex};
//! use vaultpulse_core::Note;
//!
//! let notes: Vec<Note> = vec![];
//! let index = NoteIndex::build(notes.iter().map(|n| n.path.clone()));
//!
//! let report = HealthAnalyzer::new(&notes, &index).analyze();
//! assert_eq!(report.total_notes, 0);
//! ```
//!
//! ## Determinism
//!
//! The analysis is a pure function of the parsed notes: report collections
//! are sorted by path or title, never by scan order, so repeated runs over
//! an unchanged vault produce byte-identical reports.

pub mod health;
pub mod index;
pub mod resolve;

pub use health::HealthAnalyzer;
pub use index::NoteIndex;
pub use resolve::{LinkAnalysis, resolve_links, strip_anchor};
pub use vaultpulse_core::prelude::*;

pub mod prelude {
    pub use crate::health::HealthAnalyzer;
    pub use crate::index::NoteIndex;
    pub use crate::resolve::{LinkAnalysis, resolve_links, strip_anchor};
    pub use vaultpulse_core::prelude::*;
}
