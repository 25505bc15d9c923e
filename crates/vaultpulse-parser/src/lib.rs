//! # VaultPulse Parser
//!
//! Wikilink extraction and content classification for vault notes.
//!
//! The audit is defined by exact textual rules, not a Markdown AST:
//!
//! - Wikilinks are matched wherever they appear in the file, code blocks
//!   and frontmatter included. `[[Note]]`, `[[Note|shown]]`, and
//!   `[[Note#Heading]]` all yield a raw target; display text is dropped,
//!   anchors are kept.
//! - Frontmatter is detected by the opening `---` line alone.
//! - Word counting removes the frontmatter block and fenced code blocks,
//!   then counts runs of word characters.
//!
//! Parsing a note never fails; every function here is total over its input.
//!
//! ## Quick Start
//!
//! ```
//! use std::path::Path;
//! use vaultpulse_parser::parse_note;
//!
//! let content = "---\ntags: [lang]\n---\nSee [[Ownership]] and [[Borrowing|refs]].";
//! let note = parse_note(Path::new("/vault/Rust.md"), content);
//!
//! assert_eq!(note.title, "Rust");
//! assert!(note.has_frontmatter);
//! assert_eq!(note.word_count, 5);
//! assert!(note.outgoing_links.contains("Ownership"));
//! assert!(note.outgoing_links.contains("Borrowing"));
//! ```
//!
//! ## Performance
//!
//! All regex patterns are compiled once via `std::sync::LazyLock`, so
//! per-note parsing allocates only for the extracted strings.

pub mod content;
pub mod wikilinks;

pub use content::{count_words, has_frontmatter};
pub use wikilinks::extract_wikilinks;

use std::path::Path;
use vaultpulse_core::{Note, note_title};

/// Parse one note file into its audited form.
pub fn parse_note(path: &Path, content: &str) -> Note {
    Note {
        path: path.to_path_buf(),
        title: note_title(path),
        has_frontmatter: has_frontmatter(content),
        word_count: count_words(content),
        outgoing_links: extract_wikilinks(content),
        content: content.to_string(),
    }
}

/// Re-export commonly used items
pub mod prelude {
    pub use crate::content::{count_words, has_frontmatter};
    pub use crate::parse_note;
    pub use crate::wikilinks::extract_wikilinks;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn parse_note_assembles_all_fields() {
        let path = PathBuf::from("/vault/topics/Async Rust.md");
        let content = "---\ntitle: async\n---\nFutures need [[Executors]].\n```\n[[In Code]]\n```";
        let note = parse_note(&path, content);

        assert_eq!(note.path, path);
        assert_eq!(note.title, "Async Rust");
        assert!(note.has_frontmatter);
        // "Futures need Executors" with the code fence removed
        assert_eq!(note.word_count, 3);
        assert!(note.outgoing_links.contains("Executors"));
        assert!(note.outgoing_links.contains("In Code"));
        assert_eq!(note.content, content);
    }

    #[test]
    fn empty_file_parses_to_an_empty_note() {
        let note = parse_note(Path::new("/vault/Empty.md"), "");
        assert_eq!(note.title, "Empty");
        assert!(!note.has_frontmatter);
        assert_eq!(note.word_count, 0);
        assert!(note.outgoing_links.is_empty());
    }
}
