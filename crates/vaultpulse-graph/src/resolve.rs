//! Whole-vault link resolution: broken links and linked-to tracking.

use crate::index::NoteIndex;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::path::PathBuf;
use vaultpulse_core::Note;

/// Outcome of resolving every wikilink in the vault.
#[derive(Debug, Clone, Default)]
pub struct LinkAnalysis {
    /// Source file -> raw link targets that resolve to no title
    pub broken_links: BTreeMap<PathBuf, BTreeSet<String>>,
    /// Representative files that at least one note links to
    pub linked: HashSet<PathBuf>,
}

/// Drop a `#heading` or `#^block` suffix from a raw link target.
///
/// Everything before the first `#` is the note title; surrounding
/// whitespace is trimmed. A pure anchor like `[[#Heading]]` strips to the
/// empty string.
pub fn strip_anchor(link: &str) -> &str {
    match link.split_once('#') {
        Some((title, _)) => title.trim(),
        None => link.trim(),
    }
}

/// Resolve every outgoing link of every note against the title index.
///
/// Unresolvable targets are recorded under their source file with the raw
/// link text, so the report shows the link exactly as written. Pure-anchor
/// links are internal to their note and are skipped entirely.
pub fn resolve_links(notes: &[Note], index: &NoteIndex) -> LinkAnalysis {
    let mut analysis = LinkAnalysis::default();

    for note in notes {
        for link in &note.outgoing_links {
            let target = strip_anchor(link);
            if target.is_empty() {
                continue;
            }
            match index.resolve(target) {
                Some(representative) => {
                    analysis.linked.insert(representative.to_path_buf());
                }
                None => {
                    analysis
                        .broken_links
                        .entry(note.path.clone())
                        .or_default()
                        .insert(link.clone());
                }
            }
        }
    }

    analysis
}

impl LinkAnalysis {
    /// A note is orphaned when it has no outgoing wikilinks at all and no
    /// other note links to it. Broken outgoing links still count as
    /// outgoing, so a note full of dangling references is not an orphan.
    pub fn is_orphan(&self, note: &Note) -> bool {
        !note.has_outgoing_links() && !self.linked.contains(&note.path)
    }

    /// All orphaned notes, sorted by path.
    pub fn orphans(&self, notes: &[Note]) -> Vec<PathBuf> {
        let mut orphans: Vec<PathBuf> = notes
            .iter()
            .filter(|note| self.is_orphan(note))
            .map(|note| note.path.clone())
            .collect();
        orphans.sort();
        orphans
    }
}
