//! Content classification: frontmatter detection and prose word counting.

use regex::Regex;
use std::sync::LazyLock;

/// Fenced code blocks, fences included. Non-greedy, so back-to-back blocks
/// are removed independently instead of swallowing the prose between them.
static CODE_FENCE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());

/// Maximal runs of word characters (Unicode letters, digits, underscore).
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").unwrap());

/// Whether the content opens with a frontmatter block: a `---` line at the
/// very start of the file. Only the opening delimiter is checked.
pub fn has_frontmatter(content: &str) -> bool {
    content.starts_with("---\n") || content.starts_with("---\r\n")
}

/// Count prose words: the frontmatter block and fenced code blocks are
/// removed, then runs of word characters are counted. Hyphenated compounds
/// count per segment (`well-known` is two words).
pub fn count_words(content: &str) -> usize {
    let body = strip_frontmatter_block(content);
    let prose = CODE_FENCE_PATTERN.replace_all(body, "");
    WORD_PATTERN.find_iter(&prose).count()
}

/// Drop the frontmatter block by splitting on `---` into at most three
/// parts and keeping the remainder after the closing delimiter. When the
/// closing `---` never appears the split yields fewer than three parts and
/// the content is returned unchanged, so an unclosed header is counted as
/// body text.
fn strip_frontmatter_block(content: &str) -> &str {
    if !content.starts_with("---") {
        return content;
    }
    match content.splitn(3, "---").nth(2) {
        Some(body) => body,
        None => content,
    }
}
