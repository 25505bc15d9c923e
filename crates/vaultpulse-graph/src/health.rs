//! Vault health aggregation.
//!
//! One serial pass over immutable per-note results assembles the complete
//! [`HealthReport`]. The pass runs after all notes are parsed, so every
//! orphan decision sees the full set of incoming links.

use crate::index::NoteIndex;
use crate::resolve::resolve_links;
use std::path::PathBuf;
use vaultpulse_core::{HealthReport, Note, StubNote, VaultConfig};

/// Vault health analyzer
pub struct HealthAnalyzer<'a> {
    notes: &'a [Note],
    index: &'a NoteIndex,
    stub_threshold: usize,
}

impl<'a> HealthAnalyzer<'a> {
    /// Create an analyzer over parsed notes and their title index.
    pub fn new(notes: &'a [Note], index: &'a NoteIndex) -> Self {
        Self {
            notes,
            index,
            stub_threshold: VaultConfig::DEFAULT_STUB_THRESHOLD,
        }
    }

    /// Override the stub word-count threshold.
    pub fn with_stub_threshold(mut self, words: usize) -> Self {
        self.stub_threshold = words;
        self
    }

    /// Run the full health analysis.
    ///
    /// The same notes and index always produce an identical report; every
    /// collection is assembled in path or title order.
    pub fn analyze(&self) -> HealthReport {
        let links = resolve_links(self.notes, self.index);
        let orphaned_notes = links.orphans(self.notes);

        let mut missing_frontmatter: Vec<PathBuf> = self
            .notes
            .iter()
            .filter(|note| !note.has_frontmatter)
            .map(|note| note.path.clone())
            .collect();
        missing_frontmatter.sort();

        let mut stubs: Vec<StubNote> = self
            .notes
            .iter()
            .filter(|note| note.word_count < self.stub_threshold)
            .map(|note| StubNote {
                path: note.path.clone(),
                word_count: note.word_count,
            })
            .collect();
        stubs.sort_by(|a, b| a.path.cmp(&b.path));

        let mut report = HealthReport {
            total_notes: self.notes.len(),
            broken_links: links.broken_links,
            orphaned_notes,
            missing_frontmatter,
            stubs,
            duplicate_titles: self.index.duplicate_titles(),
            severity: Default::default(),
        };
        report.update_severity();

        log::debug!(
            "health analysis: {} notes, {} findings, severity {}",
            report.total_notes,
            report.issue_count(),
            report.severity
        );

        report
    }
}
