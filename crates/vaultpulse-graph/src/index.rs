//! Title index: note titles mapped to the files that carry them.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use vaultpulse_core::note_title;

/// Maps every note title to its files.
///
/// Wikilinks address notes by title, so when several files share a title the
/// index elects a single representative: the smallest path in component
/// order. Resolution is therefore deterministic regardless of scan order,
/// and the full groups stay available for duplicate reporting.
#[derive(Debug, Clone, Default)]
pub struct NoteIndex {
    representatives: HashMap<String, PathBuf>,
    groups: HashMap<String, Vec<PathBuf>>,
}

impl NoteIndex {
    /// Build an index from note paths.
    pub fn build<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let mut index = NoteIndex::default();
        for path in paths {
            index.insert(path);
        }
        index
    }

    /// Add one note file under its title.
    pub fn insert(&mut self, path: PathBuf) {
        let title = note_title(&path);
        match self.representatives.entry(title.clone()) {
            Entry::Occupied(mut entry) => {
                if path < *entry.get() {
                    entry.insert(path.clone());
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(path.clone());
            }
        }
        self.groups.entry(title).or_default().push(path);
    }

    /// Resolve a title to its representative file.
    pub fn resolve(&self, title: &str) -> Option<&Path> {
        self.representatives.get(title).map(PathBuf::as_path)
    }

    /// Whether any note carries this title.
    pub fn contains_title(&self, title: &str) -> bool {
        self.representatives.contains_key(title)
    }

    /// Number of distinct titles.
    pub fn title_count(&self) -> usize {
        self.representatives.len()
    }

    /// Number of indexed files.
    pub fn file_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.representatives.is_empty()
    }

    /// Titles carried by more than one file, each with its full sorted file
    /// list. Ordered by title for stable reporting.
    pub fn duplicate_titles(&self) -> BTreeMap<String, Vec<PathBuf>> {
        self.groups
            .iter()
            .filter(|(_, files)| files.len() > 1)
            .map(|(title, files)| {
                let mut files = files.clone();
                files.sort();
                (title.clone(), files)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index_of(paths: &[&str]) -> NoteIndex {
        NoteIndex::build(paths.iter().map(PathBuf::from))
    }

    #[test]
    fn unique_titles_resolve_to_their_file() {
        let index = index_of(&["/v/a.md", "/v/sub/b.md"]);
        assert_eq!(index.resolve("a"), Some(Path::new("/v/a.md")));
        assert_eq!(index.resolve("b"), Some(Path::new("/v/sub/b.md")));
        assert_eq!(index.resolve("missing"), None);
        assert_eq!(index.title_count(), 2);
        assert_eq!(index.file_count(), 2);
    }

    #[test]
    fn representative_is_the_smallest_path() {
        let forward = index_of(&["/v/alpha/Note.md", "/v/beta/Note.md"]);
        let reverse = index_of(&["/v/beta/Note.md", "/v/alpha/Note.md"]);
        assert_eq!(forward.resolve("Note"), Some(Path::new("/v/alpha/Note.md")));
        assert_eq!(reverse.resolve("Note"), Some(Path::new("/v/alpha/Note.md")));
    }

    #[test]
    fn duplicate_groups_list_all_files_sorted() {
        let index = index_of(&["/v/z/Note.md", "/v/a/Note.md", "/v/only.md"]);
        let duplicates = index.duplicate_titles();
        assert_eq!(duplicates.len(), 1);
        assert_eq!(
            duplicates["Note"],
            vec![PathBuf::from("/v/a/Note.md"), PathBuf::from("/v/z/Note.md")]
        );
        assert!(!duplicates.contains_key("only"));
    }

    #[test]
    fn every_file_lands_in_exactly_one_group() {
        let index = index_of(&["/v/x/T.md", "/v/y/T.md", "/v/z/T.md", "/v/u.md"]);
        assert_eq!(index.file_count(), 4);
        assert_eq!(index.title_count(), 2);
        assert_eq!(index.duplicate_titles()["T"].len(), 3);
    }

    #[test]
    fn empty_index_reports_nothing() {
        let index = NoteIndex::default();
        assert!(index.is_empty());
        assert!(index.duplicate_titles().is_empty());
        assert!(!index.contains_title("anything"));
    }
}
