//! Report rendering: sectioned terminal output and pretty-printed JSON.
//!
//! Stdout carries only the rendered report, so both renderers return
//! strings and leave printing to the caller.

use std::path::Path;
use vaultpulse_core::{HealthReport, HealthSeverity};

const RULER: &str = "============================================================";

/// Entries shown per finding section before truncation.
const SECTION_LIMIT: usize = 10;
/// Duplicate titles shown before truncation.
const TITLE_LIMIT: usize = 5;
/// Broken link targets shown per source note.
const LINKS_PER_NOTE: usize = 3;

/// Render the sectioned terminal report.
///
/// Paths are shown relative to the vault root. Long sections are truncated
/// with a `... and N more` marker; JSON output is the full report.
pub fn render_human(report: &HealthReport, vault_path: &Path, stub_threshold: usize) -> String {
    let mut out = String::new();
    let rel = |path: &Path| relative_display(path, vault_path);

    out.push_str(RULER);
    out.push('\n');
    out.push_str("VAULT HEALTH REPORT\n");
    out.push_str(&format!("Vault: {}\n", vault_path.display()));
    out.push_str(RULER);
    out.push_str("\n\n");

    out.push_str(&format!("Total Notes Analyzed: {}\n\n", report.total_notes));

    if !report.broken_links.is_empty() {
        out.push_str(&format!(
            "🔴 BROKEN LINKS: {} notes with broken links\n",
            report.broken_links.len()
        ));
        for (path, links) in report.broken_links.iter().take(SECTION_LIMIT) {
            out.push_str(&format!("  - {}\n", rel(path)));
            for link in links.iter().take(LINKS_PER_NOTE) {
                out.push_str(&format!("    → [[{link}]]\n"));
            }
        }
        push_overflow(&mut out, report.broken_links.len(), SECTION_LIMIT);
        out.push('\n');
    } else {
        out.push_str("✅ No broken links found\n\n");
    }

    if !report.orphaned_notes.is_empty() {
        out.push_str(&format!(
            "🟡 ORPHANED NOTES: {} notes with no connections\n",
            report.orphaned_notes.len()
        ));
        for path in report.orphaned_notes.iter().take(SECTION_LIMIT) {
            out.push_str(&format!("  - {}\n", rel(path)));
        }
        push_overflow(&mut out, report.orphaned_notes.len(), SECTION_LIMIT);
        out.push('\n');
    } else {
        out.push_str("✅ No orphaned notes found\n\n");
    }

    if !report.missing_frontmatter.is_empty() {
        out.push_str(&format!(
            "🟡 MISSING FRONTMATTER: {} notes\n",
            report.missing_frontmatter.len()
        ));
        for path in report.missing_frontmatter.iter().take(SECTION_LIMIT) {
            out.push_str(&format!("  - {}\n", rel(path)));
        }
        push_overflow(&mut out, report.missing_frontmatter.len(), SECTION_LIMIT);
        out.push('\n');
    } else {
        out.push_str("✅ All notes have frontmatter\n\n");
    }

    if !report.stubs.is_empty() {
        out.push_str(&format!(
            "🟡 STUB NOTES: {} notes with < {} words\n",
            report.stubs.len(),
            stub_threshold
        ));
        for stub in report.stubs.iter().take(SECTION_LIMIT) {
            out.push_str(&format!(
                "  - {} ({} words)\n",
                rel(&stub.path),
                stub.word_count
            ));
        }
        push_overflow(&mut out, report.stubs.len(), SECTION_LIMIT);
        out.push('\n');
    } else {
        out.push_str("✅ No stub notes found\n\n");
    }

    if !report.duplicate_titles.is_empty() {
        out.push_str(&format!(
            "🟡 DUPLICATE TITLES: {} titles with multiple files\n",
            report.duplicate_titles.len()
        ));
        for (title, files) in report.duplicate_titles.iter().take(TITLE_LIMIT) {
            out.push_str(&format!("  Title: {title}\n"));
            for file in files {
                out.push_str(&format!("    - {}\n", rel(file)));
            }
        }
        push_overflow(&mut out, report.duplicate_titles.len(), TITLE_LIMIT);
        out.push('\n');
    } else {
        out.push_str("✅ No duplicate titles found\n\n");
    }

    out.push_str(RULER);
    out.push('\n');
    out.push_str(&severity_banner(report));
    out.push('\n');
    out.push_str(RULER);
    out.push('\n');

    out
}

/// Render the full report as pretty-printed JSON.
pub fn render_json(report: &HealthReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

fn severity_banner(report: &HealthReport) -> String {
    let issues = report.issue_count();
    match report.severity {
        HealthSeverity::Excellent => "✅ VAULT HEALTH: EXCELLENT - No issues found!".to_string(),
        HealthSeverity::Good => {
            format!("🟡 VAULT HEALTH: GOOD - {issues} minor issues found")
        }
        HealthSeverity::Fair => format!("🟡 VAULT HEALTH: FAIR - {issues} issues found"),
        HealthSeverity::NeedsAttention => {
            format!("🔴 VAULT HEALTH: NEEDS ATTENTION - {issues} issues found")
        }
    }
}

fn push_overflow(out: &mut String, total: usize, limit: usize) {
    if total > limit {
        out.push_str(&format!("  ... and {} more\n", total - limit));
    }
}

fn relative_display(path: &Path, vault_path: &Path) -> String {
    path.strip_prefix(vault_path)
        .unwrap_or(path)
        .display()
        .to_string()
}
