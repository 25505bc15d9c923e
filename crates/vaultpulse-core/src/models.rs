//! Core data models for vault health analysis.
//!
//! A [`Note`] is the parsed form of a single Markdown file. The whole-vault
//! verdict is a [`HealthReport`], whose collections are ordered so that the
//! same vault state always serializes to the same bytes.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

/// Title of a note file: the file stem, as Obsidian resolves wikilinks.
///
/// `notes/Rust.md` and `archive/Rust.md` share the title `Rust`.
pub fn note_title(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// A single note parsed from the vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Absolute path of the note file
    pub path: PathBuf,
    /// Link-target title (file stem)
    pub title: String,
    /// Raw file content
    pub content: String,
    /// Whether the file opens with a `---` frontmatter line
    pub has_frontmatter: bool,
    /// Prose word count (frontmatter and fenced code blocks excluded)
    pub word_count: usize,
    /// Deduplicated raw wikilink targets found in the content
    pub outgoing_links: HashSet<String>,
}

impl Note {
    /// Whether the note links out at all. Broken links count: a note whose
    /// only links are dangling still references other material.
    pub fn has_outgoing_links(&self) -> bool {
        !self.outgoing_links.is_empty()
    }
}

/// A note flagged as too short to stand on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StubNote {
    pub path: PathBuf,
    pub word_count: usize,
}

/// Overall vault health grade, derived from the number of findings.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum HealthSeverity {
    #[default]
    Excellent,
    Good,
    Fair,
    NeedsAttention,
}

impl HealthSeverity {
    /// Grade a finding count: 0 is excellent, under 10 good, under 50 fair,
    /// anything more needs attention.
    pub fn from_issue_count(issues: usize) -> Self {
        match issues {
            0 => HealthSeverity::Excellent,
            1..=9 => HealthSeverity::Good,
            10..=49 => HealthSeverity::Fair,
            _ => HealthSeverity::NeedsAttention,
        }
    }
}

impl fmt::Display for HealthSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            HealthSeverity::Excellent => "EXCELLENT",
            HealthSeverity::Good => "GOOD",
            HealthSeverity::Fair => "FAIR",
            HealthSeverity::NeedsAttention => "NEEDS ATTENTION",
        };
        write!(f, "{label}")
    }
}

/// The complete result of one vault audit.
///
/// Unreadable note files are excluded everywhere: they are skipped with a
/// warning and contribute neither to `total_notes` nor to any finding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Number of notes successfully read and analyzed
    pub total_notes: usize,
    /// Source file -> raw link targets that resolve to no note title
    pub broken_links: BTreeMap<PathBuf, BTreeSet<String>>,
    /// Notes with no outgoing wikilinks that nothing links to
    pub orphaned_notes: Vec<PathBuf>,
    /// Notes whose content does not open with a frontmatter block
    pub missing_frontmatter: Vec<PathBuf>,
    /// Notes below the stub word-count threshold
    pub stubs: Vec<StubNote>,
    /// Title -> all files sharing it, for titles with more than one file
    pub duplicate_titles: BTreeMap<String, Vec<PathBuf>>,
    /// Grade derived from [`HealthReport::issue_count`]
    pub severity: HealthSeverity,
}

impl HealthReport {
    /// Total findings across all categories. Broken links count per source
    /// file and duplicates per title, matching the sections of the rendered
    /// report.
    pub fn issue_count(&self) -> usize {
        self.broken_links.len()
            + self.orphaned_notes.len()
            + self.missing_frontmatter.len()
            + self.stubs.len()
            + self.duplicate_titles.len()
    }

    /// Whether the audit found nothing to report.
    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }

    /// Recompute `severity` from the current findings.
    pub fn update_severity(&mut self) {
        self.severity = HealthSeverity::from_issue_count(self.issue_count());
    }
}
