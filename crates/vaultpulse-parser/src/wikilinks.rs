//! Wikilink extraction: `[[Note]]`, `[[Note|shown text]]`, `[[Note#Heading]]`.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Matches `[[target]]` and `[[target|display]]`. The capture stops at the
/// first `|` or `]`, so display text is consumed without being captured and
/// a `#heading` suffix stays inside the capture.
static WIKILINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]|]+)(?:\|[^\]]+)?\]\]").unwrap());

/// Extract the deduplicated set of raw wikilink targets from note content.
///
/// Targets are reported exactly as written, anchors included. Extraction
/// runs over the whole file: links inside frontmatter or code blocks count,
/// and an embed `![[Note]]` references its target like any other link.
pub fn extract_wikilinks(content: &str) -> HashSet<String> {
    WIKILINK_PATTERN
        .captures_iter(content)
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links(content: &str) -> HashSet<String> {
        extract_wikilinks(content)
    }

    #[test]
    fn extracts_plain_links() {
        let found = links("See [[Rust]] and [[Borrow Checker]].");
        assert_eq!(found.len(), 2);
        assert!(found.contains("Rust"));
        assert!(found.contains("Borrow Checker"));
    }

    #[test]
    fn display_text_is_dropped() {
        let found = links("[[Rust|the language]]");
        assert_eq!(found.len(), 1);
        assert!(found.contains("Rust"));
    }

    #[test]
    fn anchors_stay_in_the_target() {
        let found = links("[[Rust#Ownership]] and [[Rust#Lifetimes|see here]]");
        assert!(found.contains("Rust#Ownership"));
        assert!(found.contains("Rust#Lifetimes"));
        assert!(!found.contains("Rust"));
    }

    #[test]
    fn repeated_links_deduplicate() {
        let found = links("[[Rust]] then [[Rust]] again, plus [[Rust|alias]]");
        assert_eq!(found.len(), 1);
    }

    #[test]
    fn second_pipe_belongs_to_the_display_text() {
        let found = links("[[a|b|c]]");
        assert_eq!(found.len(), 1);
        assert!(found.contains("a"));
    }

    #[test]
    fn malformed_links_are_ignored() {
        assert!(links("[[unclosed").is_empty());
        assert!(links("[[]]").is_empty());
        assert!(links("[single brackets]").is_empty());
        assert!(links("]] [[").is_empty());
    }

    #[test]
    fn embeds_count_as_links() {
        let found = links("![[diagram]]");
        assert_eq!(found.len(), 1);
        assert!(found.contains("diagram"));
    }

    #[test]
    fn code_blocks_are_not_exempt() {
        let found = links("```\n[[In Code]]\n```\ninline `[[Also Counted]]`");
        assert!(found.contains("In Code"));
        assert!(found.contains("Also Counted"));
    }

    #[test]
    fn multiple_links_on_one_line() {
        let found = links("[[a]][[b]] [[c|x]]");
        assert_eq!(found.len(), 3);
    }
}
